use std::path::PathBuf;

/// ScanRequest - Request DTO for the inventory scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Folder holding the log captures
    pub root: PathBuf,
    /// Folder name whose child folder becomes each record's group label
    pub group_anchor: Option<String>,
}

impl ScanRequest {
    pub fn new(root: PathBuf, group_anchor: Option<String>) -> Self {
        Self { root, group_anchor }
    }
}
