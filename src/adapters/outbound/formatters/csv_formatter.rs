use crate::application::read_models::InventoryReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CsvFormatter adapter producing the spreadsheet-compatible report
///
/// One header row followed by one row per record. Fields containing commas,
/// quotes or line breaks are quoted by the csv writer.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
        wtr.write_record(report.columns())?;
        for row in &report.rows {
            wtr.write_record(row.cells(report.include_group))?;
        }
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}
