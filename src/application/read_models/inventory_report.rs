//! Inventory report read model
//!
//! One row per surviving record, in the column order of the spreadsheet
//! that operators already use.

use crate::application::dto::ScanSummary;
use serde::Serialize;

/// Fixed report columns, in order
pub const REPORT_COLUMNS: [&str; 7] = [
    "Hostname",
    "Capture Time",
    "SN",
    "PID",
    "NAME",
    "DESCR",
    "Source File",
];

/// Optional trailing column present when a group anchor is configured
pub const GROUP_COLUMN: &str = "Group";

/// Placeholder shown for a record without a group label
pub const NO_GROUP: &str = "N/A";

/// Main read model for the inventory report
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub metadata: ReportMetadataView,
    /// Whether the Group column is part of the report
    pub include_group: bool,
    pub rows: Vec<ReportRow>,
    pub summary: ScanSummary,
}

impl InventoryReport {
    /// Column headers for this report
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = REPORT_COLUMNS.to_vec();
        if self.include_group {
            columns.push(GROUP_COLUMN);
        }
        columns
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    /// Unique identifier of this report (`urn:uuid:...`)
    pub report_id: String,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// One report row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub hostname: String,
    /// Capture time exactly as found in the log (empty when unknown)
    pub capture_time: String,
    /// Parsed capture time, ISO 8601 without timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_time_parsed: Option<String>,
    pub serial_number: String,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub source_file: String,
    pub group: String,
}

impl ReportRow {
    /// Cell values in column order
    pub fn cells(&self, include_group: bool) -> Vec<&str> {
        let mut cells = vec![
            self.hostname.as_str(),
            self.capture_time.as_str(),
            self.serial_number.as_str(),
            self.product_id.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.source_file.as_str(),
        ];
        if include_group {
            cells.push(self.group.as_str());
        }
        cells
    }
}
