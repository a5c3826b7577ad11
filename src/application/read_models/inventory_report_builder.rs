//! Builder for constructing InventoryReport from scan results

use super::inventory_report::{InventoryReport, ReportMetadataView, ReportRow, NO_GROUP};
use crate::application::dto::ScanResponse;
use crate::inventory::domain::InventoryRecord;
use chrono::Utc;
use uuid::Uuid;

const TOOL_NAME: &str = "serial-grabber";

/// Builder for constructing InventoryReport from a scan response
pub struct InventoryReportBuilder;

impl InventoryReportBuilder {
    /// Builds the report read model with fresh metadata
    pub fn build(response: &ScanResponse) -> InventoryReport {
        Self::build_with_metadata(response, Self::generate_metadata())
    }

    /// Builds the report read model with caller-supplied metadata
    pub fn build_with_metadata(
        response: &ScanResponse,
        metadata: ReportMetadataView,
    ) -> InventoryReport {
        InventoryReport {
            metadata,
            include_group: response.grouped,
            rows: response.records.iter().map(Self::build_row).collect(),
            summary: response.summary,
        }
    }

    /// Generates metadata with the current timestamp and a unique report id
    pub fn generate_metadata() -> ReportMetadataView {
        ReportMetadataView {
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
            generated_at: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_row(record: &InventoryRecord) -> ReportRow {
        ReportRow {
            hostname: record.hostname().to_string(),
            capture_time: record.capture_time_raw().unwrap_or_default().to_string(),
            capture_time_parsed: record
                .capture_time()
                .map(|t| t.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            serial_number: record.serial_number().to_string(),
            product_id: record.product_id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
            source_file: record.source_identifier().to_string(),
            group: record.group_label().unwrap_or(NO_GROUP).to_string(),
        }
    }
}
