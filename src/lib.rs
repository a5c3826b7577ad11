//! serial-grabber - hardware inventory extraction from network device logs
//!
//! This library turns folders of saved CLI captures (`show inventory`,
//! `show clock`, running configs) into one deduplicated inventory of
//! serial numbers, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Record model, extraction and deduplication logic
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use serial_grabber::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanInventoryUseCase::new(
//!     FileSystemSourceReader::new(),
//!     ConsoleProgressReporter::new(),
//!     RecordExtractor::default(),
//! );
//!
//! let response = use_case.execute(ScanRequest::new(PathBuf::from("./logs"), None))?;
//!
//! let report = InventoryReportBuilder::build(&response);
//! let output = CsvFormatter::new().format(&report)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSourceReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse, ScanSummary};
    pub use crate::application::read_models::{InventoryReport, InventoryReportBuilder};
    pub use crate::application::use_cases::ScanInventoryUseCase;
    pub use crate::inventory::domain::{InventoryRecord, SourceBlock, SourceLocation};
    pub use crate::inventory::services::{
        Deduplicator, FuzzyTimeParser, GroupLabeler, HostnameResolver, RecordExtractor,
        TimeResolver,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, SourceEvent, SourceFailure,
        SourceReader,
    };
    pub use crate::shared::Result;
}
