use serial_grabber::prelude::*;
use std::path::Path;

/// Mock SourceReader replaying a fixed list of events
#[derive(Default)]
pub struct MockSourceReader {
    pub events: Vec<SourceEvent>,
    pub should_fail: bool,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            events: Vec::new(),
            should_fail: true,
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.events.push(SourceEvent::Block(SourceBlock::new(
            content.to_string(),
            SourceLocation::file(path),
        )));
        self
    }

    pub fn with_archive(mut self, archive: &str, members: &[(&str, &str)]) -> Self {
        self.events
            .push(SourceEvent::ArchiveOpened(archive.to_string()));
        for (member, content) in members {
            self.events.push(SourceEvent::Block(SourceBlock::new(
                content.to_string(),
                SourceLocation::archive_member(archive, *member),
            )));
        }
        self
    }

    pub fn with_unreadable(mut self, source_id: &str, details: &str) -> Self {
        self.events
            .push(SourceEvent::Failed(SourceFailure::new(source_id, details)));
        self
    }
}

impl SourceReader for MockSourceReader {
    fn read_sources(&self, root: &Path, sink: &mut dyn FnMut(SourceEvent)) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Invalid logs folder: {}", root.display());
        }
        for event in &self.events {
            sink(event.clone());
        }
        Ok(())
    }
}
