use crate::application::dto::ScanSummary;
use crate::application::read_models::{InventoryReport, ReportMetadataView, ReportRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadataView,
    summary: &'a ScanSummary,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    hostname: &'a str,
    capture_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    capture_time_parsed: Option<&'a str>,
    serial_number: &'a str,
    product_id: &'a str,
    name: &'a str,
    description: &'a str,
    source_file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
}

impl<'a> JsonRecord<'a> {
    fn from_row(row: &'a ReportRow, include_group: bool) -> Self {
        Self {
            hostname: &row.hostname,
            capture_time: &row.capture_time,
            capture_time_parsed: row.capture_time_parsed.as_deref(),
            serial_number: &row.serial_number,
            product_id: &row.product_id,
            name: &row.name,
            description: &row.description,
            source_file: &row.source_file,
            group: include_group.then_some(row.group.as_str()),
        }
    }
}

/// JsonFormatter adapter for machine-readable reports
///
/// Carries report metadata, the run summary and, per record, the parsed
/// capture time next to the raw one.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let document = JsonReport {
            metadata: &report.metadata,
            summary: &report.summary,
            records: report
                .rows
                .iter()
                .map(|row| JsonRecord::from_row(row, report.include_group))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
