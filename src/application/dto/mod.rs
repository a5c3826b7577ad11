/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the scan use case and the report
/// adapters, keeping the domain layer isolated.
mod output_format;
mod scan_request;
mod scan_response;

pub use output_format::OutputFormat;
pub use scan_request::ScanRequest;
pub use scan_response::{ScanResponse, ScanSummary};
