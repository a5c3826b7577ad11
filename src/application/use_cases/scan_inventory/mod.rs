use crate::application::dto::{ScanRequest, ScanResponse, ScanSummary};
use crate::inventory::domain::{InventoryRecord, SourceBlock};
use crate::inventory::services::{Deduplicator, GroupLabeler, RecordExtractor};
use crate::ports::outbound::{ProgressReporter, SourceEvent, SourceReader};
use crate::shared::Result;

/// ScanInventoryUseCase - Core use case for building the hardware inventory
///
/// Orchestrates the scan using generic dependency injection for the
/// infrastructure dependencies: captures come from the source reader, every
/// capture goes through the record extractor, and the collected records are
/// deduplicated once the walk has finished.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanInventoryUseCase<SR, PR> {
    source_reader: SR,
    progress_reporter: PR,
    extractor: RecordExtractor,
}

impl<SR, PR> ScanInventoryUseCase<SR, PR>
where
    SR: SourceReader,
    PR: ProgressReporter,
{
    /// Creates a new ScanInventoryUseCase with injected dependencies
    pub fn new(source_reader: SR, progress_reporter: PR, extractor: RecordExtractor) -> Self {
        Self {
            source_reader,
            progress_reporter,
            extractor,
        }
    }

    /// Executes the inventory scan
    ///
    /// # Arguments
    /// * `request` - Scan request containing the root folder and group anchor
    ///
    /// # Returns
    /// ScanResponse with the deduplicated records and run counters.
    /// Unreadable sources are reported and skipped; only an unusable root
    /// folder is an error.
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning files in: {}",
            request.root.display()
        ));

        let labeler = request.group_anchor.as_deref().map(GroupLabeler::new);
        let mut records: Vec<InventoryRecord> = Vec::new();
        let mut summary = ScanSummary::default();

        self.source_reader
            .read_sources(&request.root, &mut |event| match event {
                SourceEvent::Block(block) => {
                    summary.files_scanned += 1;
                    records.extend(self.extract_block(&block, labeler.as_ref()));
                    self.progress_reporter.report_progress(
                        summary.files_scanned,
                        Some(&block.location.identifier()),
                    );
                }
                SourceEvent::ArchiveOpened(_) => {
                    summary.archives_scanned += 1;
                }
                SourceEvent::Failed(failure) => {
                    summary.sources_failed += 1;
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Error reading {}: {}",
                        failure.source_id, failure.details
                    ));
                }
            })?;

        let outcome = Deduplicator::deduplicate(records);
        summary.total_found = outcome.total_count;
        summary.duplicates_removed = outcome.duplicate_count;
        summary.unique_kept = outcome.unique_count();

        self.progress_reporter.report_completion(&format!(
            "✅ Found {} inventory record(s) in {} capture(s)",
            summary.total_found, summary.files_scanned
        ));

        Ok(ScanResponse::new(
            outcome.records,
            summary,
            labeler.is_some(),
        ))
    }

    fn extract_block(
        &self,
        block: &SourceBlock,
        labeler: Option<&GroupLabeler>,
    ) -> Vec<InventoryRecord> {
        let group_label = labeler.and_then(|labeler| labeler.label_for(&block.location));
        self.extractor
            .extract(&block.content, &block.location, group_label)
    }
}

#[cfg(test)]
mod tests;
