use super::*;
use crate::inventory::domain::SourceLocation;
use crate::inventory::services::{FuzzyTimeParser, TimeResolver};
use crate::ports::outbound::SourceFailure;
use crate::shared::error::GrabberError;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockSourceReader {
    events: Vec<SourceEvent>,
}

impl MockSourceReader {
    fn new(events: Vec<SourceEvent>) -> Self {
        Self { events }
    }
}

impl SourceReader for MockSourceReader {
    fn read_sources(&self, _root: &Path, sink: &mut dyn FnMut(SourceEvent)) -> Result<()> {
        for event in &self.events {
            sink(event.clone());
        }
        Ok(())
    }
}

struct MissingRootReader;

impl SourceReader for MissingRootReader {
    fn read_sources(&self, root: &Path, _sink: &mut dyn FnMut(SourceEvent)) -> Result<()> {
        Err(GrabberError::InvalidRootPath {
            path: root.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _processed: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn extractor() -> RecordExtractor {
    RecordExtractor::new(TimeResolver::new(FuzzyTimeParser::with_default_date(
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    )))
}

fn file_block(path: &str, content: &str) -> SourceEvent {
    SourceEvent::Block(SourceBlock::new(
        content.to_string(),
        SourceLocation::file(path),
    ))
}

const DENVER_CORE: &str = r#"core-sw1#show clock
10:15:32 UTC Mon Mar 4 2024
core-sw1#show inventory
NAME: "c93xx Stack", DESCR: "Cisco Catalyst 9300 Series 48-port PoE+"
PID: C9300-48P , VID: V02 , SN: FOC1234X0AB
NAME: "Switch 1", DESCR: "C9300-48P"
PID: C9300-48P , VID: V02 , SN: FOC1234X0AB
NAME: "Switch 1 - Power Supply A", DESCR: "Switch 1 - Power Supply A"
PID: PWR-C1-715WAC , VID: V01 , SN: DCB2222Z0CD
"#;

const UNNAMED_CAPTURE: &str = r#"
NAME: "Chassis", DESCR: "A very long and detailed chassis description for the stack"
PID: C9300-48P , VID: V02 , SN: FOC1234X0AB
"#;

#[test]
fn test_execute_collects_and_deduplicates() {
    let reader = MockSourceReader::new(vec![
        file_block("Sites/Denver/core.log", DENVER_CORE),
        file_block("misc/unnamed.txt", UNNAMED_CAPTURE),
    ]);
    let reporter = MockProgressReporter::default();
    let use_case = ScanInventoryUseCase::new(reader, &reporter, extractor());

    let response = use_case
        .execute(ScanRequest::new(PathBuf::from("/logs"), None))
        .unwrap();

    assert_eq!(response.summary.files_scanned, 2);
    assert_eq!(response.summary.total_found, 4);
    assert_eq!(response.summary.duplicates_removed, 2);
    assert_eq!(response.summary.unique_kept, 2);
    assert!(!response.grouped);

    let chassis = response
        .records
        .iter()
        .find(|r| r.serial_number() == "FOC1234X0AB")
        .unwrap();
    // Prompt hostname outranks the longer description from the unnamed capture
    assert_eq!(chassis.hostname(), "core-sw1");
    assert_eq!(chassis.name(), "c93xx Stack");
}

#[test]
fn test_execute_counts_archives_and_reports_failures() {
    let reader = MockSourceReader::new(vec![
        SourceEvent::ArchiveOpened("batch.zip".to_string()),
        SourceEvent::Block(SourceBlock::new(
            DENVER_CORE.to_string(),
            SourceLocation::archive_member("batch.zip", "core.log"),
        )),
        SourceEvent::Failed(SourceFailure::new("broken.zip", "invalid Zip archive")),
    ]);
    let reporter = MockProgressReporter::default();
    let use_case = ScanInventoryUseCase::new(reader, &reporter, extractor());

    let response = use_case
        .execute(ScanRequest::new(PathBuf::from("/logs"), None))
        .unwrap();

    assert_eq!(response.summary.archives_scanned, 1);
    assert_eq!(response.summary.files_scanned, 1);
    assert_eq!(response.summary.sources_failed, 1);
    assert_eq!(
        reporter.errors.borrow().as_slice(),
        ["⚠️  Error reading broken.zip: invalid Zip archive"]
    );
    assert_eq!(
        response.records[0].source_identifier(),
        "batch.zip > core.log"
    );
}

#[test]
fn test_execute_applies_group_labels() {
    let reader = MockSourceReader::new(vec![
        file_block("Sites/Denver/core.log", DENVER_CORE),
        file_block("loose/unnamed.txt", UNNAMED_CAPTURE.replace("FOC1234X0AB", "FOC9").as_str()),
    ]);
    let reporter = MockProgressReporter::default();
    let use_case = ScanInventoryUseCase::new(reader, &reporter, extractor());

    let response = use_case
        .execute(ScanRequest::new(
            PathBuf::from("/logs"),
            Some("sites".to_string()),
        ))
        .unwrap();

    assert!(response.grouped);
    let groups: Vec<Option<&str>> = response.records.iter().map(|r| r.group_label()).collect();
    assert!(groups.contains(&Some("Denver")));
    assert!(groups.contains(&None));
}

#[test]
fn test_execute_reports_scan_start() {
    let reader = MockSourceReader::new(vec![]);
    let reporter = MockProgressReporter::default();
    let use_case = ScanInventoryUseCase::new(reader, &reporter, extractor());

    let response = use_case
        .execute(ScanRequest::new(PathBuf::from("/logs"), None))
        .unwrap();

    assert!(response.is_empty());
    assert_eq!(reporter.messages.borrow()[0], "🔍 Scanning files in: /logs");
}

#[test]
fn test_execute_propagates_invalid_root() {
    let reporter = MockProgressReporter::default();
    let use_case = ScanInventoryUseCase::new(MissingRootReader, &reporter, extractor());

    let err = use_case
        .execute(ScanRequest::new(PathBuf::from("/does/not/exist"), None))
        .unwrap_err();

    assert!(err.to_string().contains("/does/not/exist"));
}
