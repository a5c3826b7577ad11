use crate::inventory::domain::SourceBlock;
use crate::shared::Result;
use std::path::Path;

/// A source that could not be turned into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    /// Human-readable source name (`path` or `archive > member`)
    pub source_id: String,
    /// Underlying cause
    pub details: String,
}

impl SourceFailure {
    pub fn new(source_id: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            details: details.into(),
        }
    }
}

/// One step of a source walk
#[derive(Debug, Clone)]
pub enum SourceEvent {
    /// A readable capture: a regular file or an archive member
    Block(SourceBlock),
    /// An archive was opened; its members follow as `Block` events
    ArchiveOpened(String),
    /// A file, archive or member was skipped
    Failed(SourceFailure),
}

/// SourceReader port for enumerating captures under a root folder
///
/// This port abstracts directory traversal, archive extraction and text
/// decoding. Captures are handed to `sink` one at a time so that only the
/// extracted records, not every file body, stay in memory.
pub trait SourceReader {
    /// Walks `root` and emits one event per capture, archive or failure
    ///
    /// # Arguments
    /// * `root` - Folder to scan
    /// * `sink` - Receives events in walk order
    ///
    /// # Errors
    /// Returns an error only when the walk cannot start (missing root,
    /// root is not a folder). Per-source problems arrive as `SourceEvent::Failed`.
    fn read_sources(&self, root: &Path, sink: &mut dyn FnMut(SourceEvent)) -> Result<()>;
}
