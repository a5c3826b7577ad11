use clap::Parser;
use serial_grabber::application::dto::OutputFormat;
use serial_grabber::shared::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const ROOT_PROMPT: &str = "Enter the full path to your logs folder: ";

/// Build a deduplicated hardware inventory from network device logs
#[derive(Parser, Debug)]
#[command(name = "serial-grabber")]
#[command(version)]
#[command(
    about = "Build a deduplicated hardware inventory from network device logs",
    long_about = None
)]
pub struct Args {
    /// Folder containing the log captures (prompted for when omitted)
    pub path: Option<String>,

    /// Report format: csv, json or markdown [default: csv]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report file path, or "-" for stdout
    /// [default: <path>/Inventory_Report_Final_Clean.<ext>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Folder name whose subfolder labels each capture (adds a Group column)
    #[arg(short, long, value_name = "FOLDER")]
    pub group_anchor: Option<String>,

    /// Path to a config file (default: serial-grabber.config.yml in the logs folder)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not open .zip or .tar(.gz) archives
    #[arg(long)]
    pub no_archives: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Asks for the logs folder on `output` and reads one line from `input`
pub fn prompt_for_root(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "{}", ROOT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(clean_path_input(&line)))
}

/// Trims the answer and drops quote characters pasted along with the path
fn clean_path_input(raw: &str) -> String {
    raw.trim().replace(['"', '\''], "")
}
