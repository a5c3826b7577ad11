use crate::inventory::domain::ResolvedCaptureTime;
use crate::inventory::patterns::{SHOW_CLOCK, TIME_OF_DAY};
use crate::inventory::services::FuzzyTimeParser;
use chrono::Datelike;

/// Years at or below this are treated as parser defaults, not real log times
const MIN_PLAUSIBLE_YEAR: i32 = 1990;

/// TimeResolver determines when a capture was taken.
///
/// Priority order:
/// 1. The line after a `#show clock` prompt, if it parses
/// 2. The last line in the block carrying an `HH:MM:SS` that parses to a
///    year after 1990
/// 3. Unresolved; the unparsed `show clock` text is still kept when present
pub struct TimeResolver {
    parser: FuzzyTimeParser,
}

impl TimeResolver {
    pub fn new(parser: FuzzyTimeParser) -> Self {
        Self { parser }
    }

    /// Resolves the capture time of one block of text
    ///
    /// # Arguments
    /// * `text` - Full content of the capture
    ///
    /// # Returns
    /// The parsed timestamp (if any) and the raw text it was read from
    pub fn resolve(&self, text: &str) -> ResolvedCaptureTime {
        let clock_raw = SHOW_CLOCK
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|raw| !raw.is_empty());

        if let Some(raw) = &clock_raw {
            if let Some(value) = self.parser.parse(raw) {
                return ResolvedCaptureTime::parsed(value, raw.clone());
            }
        }

        if let Some(resolved) = self.resolve_from_log_lines(text) {
            return resolved;
        }

        ResolvedCaptureTime::new(None, clock_raw)
    }

    /// Scans timestamp-bearing lines from the end of the block backwards;
    /// later entries are the most recent
    fn resolve_from_log_lines(&self, text: &str) -> Option<ResolvedCaptureTime> {
        let candidates: Vec<&str> = text
            .lines()
            .filter(|line| TIME_OF_DAY.is_match(line))
            .collect();

        candidates.into_iter().rev().find_map(|line| {
            let line = line.trim();
            self.parser
                .parse(line)
                .filter(|value| value.year() > MIN_PLAUSIBLE_YEAR)
                .map(|value| ResolvedCaptureTime::parsed(value, line.to_string()))
        })
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::new(FuzzyTimeParser::new())
    }
}
