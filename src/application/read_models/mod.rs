//! Read models for report output
//!
//! The report read model is a flat, presentation-ready view of the
//! deduplicated records that every formatter consumes.

mod inventory_report;
mod inventory_report_builder;

pub use inventory_report::{InventoryReport, ReportMetadataView, ReportRow, GROUP_COLUMN, REPORT_COLUMNS};
pub use inventory_report_builder::InventoryReportBuilder;
