pub mod capture_time;
pub mod hostname;
pub mod inventory_record;
pub mod source;

pub use capture_time::ResolvedCaptureTime;
pub use hostname::{HostnameSource, ResolvedHostname};
pub use inventory_record::{CaptureContext, InventoryRecord, ProductId, SerialNumber};
pub use source::{SourceBlock, SourceLocation};
