use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// FuzzyTimeParser extracts a date/time from a line of free text.
///
/// Device clocks and syslog lines wrap the timestamp in noise such as
/// `*10:15:32.123 UTC Mon Mar 4 2024` or `Mar  4 10:15:32: %SYS-5-CONFIG_I`.
/// The parser tokenises the text, picks out the tokens it recognises and
/// ignores the rest. Timezones are dropped; results are naive local times.
///
/// Recognised tokens:
/// - times `H:MM`, `H:MM:SS`, `H:MM:SS.fff` plus an optional `AM`/`PM` token
/// - ISO dates `YYYY-MM-DD`, optionally joined to a time with `T`
/// - numeric dates `M/D/YYYY` and `M/D/YY`
/// - English month names, full or three-letter (`Sept` too), also behind a
///   `*` or `.` clock-sync marker
/// - a four-digit year and a one or two digit day of month
///
/// Date parts that are absent are taken from the default date.
#[derive(Debug, Clone)]
pub struct FuzzyTimeParser {
    default_date: NaiveDate,
}

#[derive(Debug, Default)]
struct Fields {
    time: Option<NaiveTime>,
    meridiem: Option<Meridiem>,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    /// A full date (ISO or numeric) was seen; later bare numbers are noise
    full_date: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

const MONTHS: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

impl FuzzyTimeParser {
    /// Creates a parser that fills missing date parts from today's local date
    pub fn new() -> Self {
        Self::with_default_date(Local::now().date_naive())
    }

    pub fn with_default_date(default_date: NaiveDate) -> Self {
        Self { default_date }
    }

    /// Parses the first recognisable date/time out of `text`
    ///
    /// # Returns
    /// `None` when the text holds neither a time nor a date, or when the
    /// recognised parts do not form a real calendar date
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let mut fields = Fields::default();

        for token in text.split(|c: char| c.is_whitespace() || c == ',') {
            let token = token.trim_matches(|c: char| matches!(c, '(' | ')' | '[' | ']' | '"'));
            if token.is_empty() {
                continue;
            }
            Self::absorb(&mut fields, token);
        }

        if fields.time.is_none() && fields.year.is_none() && fields.month.is_none() {
            return None;
        }

        let year = fields.year.unwrap_or_else(|| self.default_date.year());
        let month = fields.month.unwrap_or_else(|| self.default_date.month());
        // A bare day number only counts next to a month name. A borrowed
        // default day is clamped to the end of the target month.
        let day = match fields.day.filter(|_| fields.month.is_some()) {
            Some(day) => day,
            None => self.default_date.day().min(Self::last_day_of_month(year, month)?),
        };
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        let time = match (fields.time, fields.meridiem) {
            (Some(time), Some(meridiem)) => Self::apply_meridiem(time, meridiem)?,
            (Some(time), None) => time,
            (None, _) => NaiveTime::MIN,
        };

        Some(date.and_time(time))
    }

    fn absorb(fields: &mut Fields, token: &str) {
        if fields.time.is_none() {
            if let Some((date_part, time_part)) = token.split_once('T') {
                if let (Some(date), Some(time)) =
                    (Self::parse_iso_date(date_part), Self::parse_time(time_part))
                {
                    Self::set_date(fields, date);
                    fields.time = Some(time);
                    return;
                }
            }
            if let Some(time) = Self::parse_time(token) {
                fields.time = Some(time);
                return;
            }
        }

        if fields.time.is_some() && fields.meridiem.is_none() {
            let lower = token.trim_end_matches('.').to_ascii_lowercase();
            match lower.as_str() {
                "am" | "a.m" => {
                    fields.meridiem = Some(Meridiem::Am);
                    return;
                }
                "pm" | "p.m" => {
                    fields.meridiem = Some(Meridiem::Pm);
                    return;
                }
                _ => {}
            }
        }

        if fields.full_date {
            return;
        }

        if let Some(date) = Self::parse_iso_date(token).or_else(|| Self::parse_numeric_date(token))
        {
            Self::set_date(fields, date);
            return;
        }

        if fields.month.is_none() {
            if let Some(month) = Self::parse_month(token) {
                fields.month = Some(month);
                return;
            }
        }

        let digits = token.trim_end_matches(['.', ':']);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            match digits.len() {
                4 if fields.year.is_none() => {
                    fields.year = digits.parse().ok();
                }
                1 | 2 if fields.day.is_none() => {
                    fields.day = digits.parse().ok().filter(|d| (1..=31).contains(d));
                }
                _ => {}
            }
        }
    }

    fn set_date(fields: &mut Fields, date: NaiveDate) {
        fields.year = Some(date.year());
        fields.month = Some(date.month());
        fields.day = Some(date.day());
        fields.full_date = true;
    }

    /// `H:MM`, `H:MM:SS` or `H:MM:SS.fraction`, with leading `*`/`.` and a
    /// trailing `:` (syslog) tolerated
    fn parse_time(token: &str) -> Option<NaiveTime> {
        let token = token
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .trim_end_matches(|c: char| matches!(c, ':' | '.' | 'Z' | 'z'));

        // Drop a numeric UTC offset glued to the time (10:15:32+01:00)
        let token = token
            .find(['+', '-'])
            .map_or(token, |idx| &token[..idx]);

        let (clock, fraction) = match token.split_once(['.', ',']) {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (token, None),
        };

        let mut parts = clock.split(':');
        let hour = Self::parse_number(parts.next()?, 1, 2)?;
        let minute = Self::parse_number(parts.next()?, 2, 2)?;
        let second = match parts.next() {
            Some(second) => Self::parse_number(second, 2, 2)?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }

        let nanos = match fraction {
            Some(fraction) => Self::parse_fraction(fraction)?,
            None => 0,
        };

        NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
    }

    fn parse_number(text: &str, min_len: usize, max_len: usize) -> Option<u32> {
        if text.len() < min_len || text.len() > max_len || !text.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        text.parse().ok()
    }

    fn parse_fraction(fraction: &str) -> Option<u32> {
        if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let digits: String = fraction.chars().take(9).collect();
        let padded = format!("{:0<9}", digits);
        padded.parse().ok()
    }

    fn parse_iso_date(token: &str) -> Option<NaiveDate> {
        let mut parts = token.split(['-', '/', '.']);
        let year = Self::parse_number(parts.next()?, 4, 4)?;
        let month = Self::parse_number(parts.next()?, 1, 2)?;
        let day = Self::parse_number(parts.next()?, 1, 2)?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }

    /// Month-first numeric dates, as US-locale device clocks print them
    fn parse_numeric_date(token: &str) -> Option<NaiveDate> {
        let mut parts = token.split('/');
        let month = Self::parse_number(parts.next()?, 1, 2)?;
        let day = Self::parse_number(parts.next()?, 1, 2)?;
        let year_text = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        let year = match year_text.len() {
            4 => Self::parse_number(year_text, 4, 4)? as i32,
            2 => {
                let short = Self::parse_number(year_text, 2, 2)? as i32;
                if short < 70 {
                    2000 + short
                } else {
                    1900 + short
                }
            }
            _ => return None,
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Month names, tolerating the `*`/`.` clock-sync markers and trailing punctuation
    fn parse_month(token: &str) -> Option<u32> {
        let lower = token
            .trim_matches(|c: char| !c.is_ascii_alphabetic())
            .to_ascii_lowercase();
        MONTHS
            .iter()
            .position(|(short, full)| {
                lower == *short || lower == *full || (lower == "sept" && *short == "sep")
            })
            .map(|idx| idx as u32 + 1)
    }

    fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)?
            .pred_opt()
            .map(|last| last.day())
    }

    fn apply_meridiem(time: NaiveTime, meridiem: Meridiem) -> Option<NaiveTime> {
        let hour = time.hour();
        if !(1..=12).contains(&hour) {
            return Some(time);
        }
        let hour = match meridiem {
            Meridiem::Am if hour == 12 => 0,
            Meridiem::Am => hour,
            Meridiem::Pm if hour == 12 => 12,
            Meridiem::Pm => hour + 12,
        };
        time.with_hour(hour)
    }
}

impl Default for FuzzyTimeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> FuzzyTimeParser {
        FuzzyTimeParser::with_default_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_cisco_show_clock() {
        let parsed = parser().parse("*10:15:32.123 UTC Mon Mar 4 2024").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_milli_opt(10, 15, 32, 123)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_drops_timezone() {
        let parsed = parser().parse("16:02:11.004 EST Tue Jan 9 2024").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    }

    #[test]
    fn test_parse_syslog_line_without_year_uses_default_year() {
        let parsed = parser()
            .parse("Mar  4 10:15:32: %SYS-5-CONFIG_I: Configured from console by vty0 (10.1.1.1)")
            .unwrap();
        assert_eq!(parsed, datetime(2025, 3, 4, 10, 15, 32));
    }

    #[test]
    fn test_parse_syslog_line_with_unsynced_clock_marker() {
        let parsed = parser()
            .parse("*Mar 4 2024 10:15:32: %SYS-5-CONFIG_I: Configured from console by vty0")
            .unwrap();
        assert_eq!(parsed, datetime(2024, 3, 4, 10, 15, 32));

        let parsed = parser()
            .parse(".Mar 4 2024 10:15:32: %SYS-5-CONFIG_I: Configured from console by vty0")
            .unwrap();
        assert_eq!(parsed, datetime(2024, 3, 4, 10, 15, 32));
    }

    #[test]
    fn test_parse_sequence_numbered_syslog_line() {
        let parsed = parser()
            .parse("000042: *Mar 4 10:15:32.123 UTC: %LINK-3-UPDOWN: Interface Gi1/0/1, changed state to up")
            .unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_milli_opt(10, 15, 32, 123)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_clamps_default_day_to_target_month() {
        let leap_day =
            FuzzyTimeParser::with_default_date(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
        let parsed = leap_day.parse("Logging started at 03:14:07 in 2023").unwrap();
        assert_eq!(parsed, datetime(2023, 2, 28, 3, 14, 7));

        let month_end =
            FuzzyTimeParser::with_default_date(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
        let parsed = month_end.parse("Sep 2024 10:15:32 rollover").unwrap();
        assert_eq!(parsed, datetime(2024, 9, 30, 10, 15, 32));
    }

    #[test]
    fn test_parse_time_and_year_only_uses_default_month_and_day() {
        let parsed = parser().parse("Logging started at 03:14:07 in 2023").unwrap();
        assert_eq!(parsed, datetime(2023, 6, 15, 3, 14, 7));
    }

    #[test]
    fn test_parse_iso_timestamp() {
        let parsed = parser().parse("last change 2024-11-02T08:30:00Z by admin").unwrap();
        assert_eq!(parsed, datetime(2024, 11, 2, 8, 30, 0));
    }

    #[test]
    fn test_parse_iso_date_and_time_tokens() {
        let parsed = parser().parse("2023-12-31 23:59:59 +0100").unwrap();
        assert_eq!(parsed, datetime(2023, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_parse_numeric_month_first_date() {
        let parsed = parser().parse("07/04/2024 01:02:03 PM").unwrap();
        assert_eq!(parsed, datetime(2024, 7, 4, 13, 2, 3));
    }

    #[test]
    fn test_parse_twelve_am() {
        let parsed = parser().parse("Jan 2 2024 12:05:00 AM").unwrap();
        assert_eq!(parsed, datetime(2024, 1, 2, 0, 5, 0));
    }

    #[test]
    fn test_parse_full_month_name_and_day_before_month() {
        let parsed = parser().parse("Friday 5 September 2025 07:00:00").unwrap();
        assert_eq!(parsed, datetime(2025, 9, 5, 7, 0, 0));
    }

    #[test]
    fn test_parse_rejects_text_without_date_or_time() {
        assert!(parser().parse("no timestamp here").is_none());
        assert!(parser().parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parser().parse("Feb 30 2024 10:00:00").is_none());
    }

    #[test]
    fn test_parse_ignores_invalid_clock_values() {
        // 99:99:99 is not a time; nothing else is recognisable
        assert!(parser().parse("counter 99:99:99").is_none());
    }
}
