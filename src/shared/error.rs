use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for inventory scanning.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages next to the variants they describe.
#[derive(Debug, Error)]
pub enum GrabberError {
    #[error("Invalid logs folder: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing folder that contains the log captures")]
    InvalidRootPath { path: PathBuf, reason: String },

    #[error("Failed to read source: {source_id}\nDetails: {details}")]
    SourceReadError { source_id: String, details: String },

    #[error("Failed to open archive: {path}\nDetails: {details}\n\n💡 Hint: The archive may be corrupt or not a zip or tar file")]
    ArchiveError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and domain values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
