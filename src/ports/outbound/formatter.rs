use crate::application::read_models::InventoryReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the final inventory report
///
/// This port abstracts the serialization of the report (CSV, JSON,
/// Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Arguments
    /// * `report` - Rows, columns, metadata and summary counters
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, report: &InventoryReport) -> Result<String>;
}
