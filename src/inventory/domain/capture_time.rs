use chrono::NaiveDateTime;

/// Capture timestamp of one block: the parsed value and the text it came from.
///
/// `raw` may be present while `value` is `None` when a `show clock` line was
/// found but could not be parsed; the text is kept so the report can show it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedCaptureTime {
    value: Option<NaiveDateTime>,
    raw: Option<String>,
}

impl ResolvedCaptureTime {
    pub fn new(value: Option<NaiveDateTime>, raw: Option<String>) -> Self {
        Self { value, raw }
    }

    pub fn parsed(value: NaiveDateTime, raw: String) -> Self {
        Self::new(Some(value), Some(raw))
    }

    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}
