use crate::inventory::domain::{
    CaptureContext, InventoryRecord, ProductId, SerialNumber, SourceLocation,
};
use crate::inventory::patterns::{NAME_DESCR, PID_PREFIX, PID_SERIAL};
use crate::inventory::services::{HostnameResolver, TimeResolver};

/// The NAME/DESCR half of an inventory entry, waiting for its PID line
#[derive(Debug, Default)]
struct PendingEntry {
    name: Option<String>,
    description: Option<String>,
}

impl PendingEntry {
    fn open(&mut self, name: String, description: String) {
        self.name = Some(name);
        self.description = Some(description);
    }

    fn is_open(&self) -> bool {
        self.name.is_some()
    }

    /// Closes the entry window, handing back whatever was pending
    fn take(&mut self) -> (Option<String>, Option<String>) {
        (self.name.take(), self.description.take())
    }
}

/// RecordExtractor walks one capture line by line and emits inventory records.
///
/// A record needs a `NAME: .., DESCR: ..` line followed by a `PID: .., VID: .., SN: ..`
/// line. A new NAME/DESCR line replaces an unpaired one, and any `PID:` line
/// closes the pending entry whether or not it parses.
pub struct RecordExtractor {
    time_resolver: TimeResolver,
}

impl RecordExtractor {
    pub fn new(time_resolver: TimeResolver) -> Self {
        Self { time_resolver }
    }

    /// Extracts every inventory record from one capture
    ///
    /// # Arguments
    /// * `text` - Full content of the capture
    /// * `location` - Where the capture came from
    /// * `group_label` - Organisational tag for the capture, if one applies
    ///
    /// # Returns
    /// Records in file order, all stamped with the same hostname and capture time
    pub fn extract(
        &self,
        text: &str,
        location: &SourceLocation,
        group_label: Option<String>,
    ) -> Vec<InventoryRecord> {
        let context = CaptureContext::new(
            HostnameResolver::resolve(text, location.fallback_name()),
            self.time_resolver.resolve(text),
            location.identifier(),
            group_label,
        );

        let mut records = Vec::new();
        let mut pending = PendingEntry::default();

        for line in text.lines() {
            let line = line.trim();

            if let Some(caps) = NAME_DESCR.captures(line) {
                pending.open(caps[1].to_string(), caps[2].to_string());
                continue;
            }

            if pending.is_open() && line.starts_with(PID_PREFIX) {
                let (name, description) = pending.take();
                if let (Some(name), Some(description)) = (name, description) {
                    if let Some(record) = Self::pair(&context, line, name, description) {
                        records.push(record);
                    }
                }
            }
        }

        records
    }

    fn pair(
        context: &CaptureContext,
        pid_line: &str,
        name: String,
        description: String,
    ) -> Option<InventoryRecord> {
        let caps = PID_SERIAL.captures(pid_line)?;
        let product_id = ProductId::new(caps[1].to_string()).ok()?;
        let serial_number = SerialNumber::new(caps[2].to_string()).ok()?;
        Some(InventoryRecord::new(
            context,
            name,
            description,
            product_id,
            serial_number,
        ))
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(TimeResolver::default())
    }
}
