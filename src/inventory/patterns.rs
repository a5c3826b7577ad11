//! Text patterns that locate hostnames, clocks and inventory fields in a capture.
//!
//! Compiled once per process and never mutated. The hostname and clock
//! patterns run against a whole block in multi-line mode; the inventory
//! patterns run against single trimmed lines.

use regex::Regex;
use std::sync::LazyLock;

/// `HOST#show inventory` or `HOST# show inventory` at line start; captures `HOST`
pub static PROMPT_HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(.*?)#[ \t]*show inventory").expect("prompt hostname pattern is valid")
});

/// `hostname HOST` configuration line; captures `HOST`
pub static CONFIG_HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^hostname\s+(\S+)").expect("config hostname pattern is valid")
});

/// `...#show clock` followed by the clock output on the next non-blank line
pub static SHOW_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)#[ \t]*show clock[ \t\r]*\n\s*([^\r\n]*)").expect("show clock pattern is valid")
});

/// Any `HH:MM:SS` substring; a line containing one is a fallback time candidate
pub static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}:\d{2}").expect("time of day pattern is valid"));

/// `NAME: "<name>", DESCR: "<description>"`
pub static NAME_DESCR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"NAME:\s*"(.*?)",\s*DESCR:\s*"(.*?)""#).expect("name/descr pattern is valid")
});

/// `PID: <pid>, VID: <vid>, SN: <serial>`
pub static PID_SERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PID:\s*([^,]*)\s*,\s*VID:.*,\s*SN:\s*(.*)").expect("pid/serial pattern is valid")
});

/// Literal prefix that opens the PID half of an inventory entry
pub const PID_PREFIX: &str = "PID:";
