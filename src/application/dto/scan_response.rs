use crate::inventory::domain::InventoryRecord;
use serde::Serialize;

/// Counters describing one scan, shown after the run and embedded in reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Captures read as text (regular files and archive members)
    pub files_scanned: usize,
    /// Archives opened
    pub archives_scanned: usize,
    /// Files, archives or members that could not be read
    pub sources_failed: usize,
    /// Records extracted before deduplication
    pub total_found: usize,
    /// Records dropped as duplicate serial numbers
    pub duplicates_removed: usize,
    /// Records kept in the report
    pub unique_kept: usize,
}

/// ScanResponse - Response DTO from the inventory scan use case
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Deduplicated records in display order
    pub records: Vec<InventoryRecord>,
    /// Run counters
    pub summary: ScanSummary,
    /// Whether a group anchor was configured (adds the Group column)
    pub grouped: bool,
}

impl ScanResponse {
    pub fn new(records: Vec<InventoryRecord>, summary: ScanSummary, grouped: bool) -> Self {
        Self {
            records,
            summary,
            grouped,
        }
    }

    /// No records were extracted; no report should be written
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
