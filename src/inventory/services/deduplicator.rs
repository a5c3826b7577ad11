use crate::inventory::domain::InventoryRecord;
use crate::inventory::policies::RecordPrecedence;
use std::collections::HashSet;

/// Result of collapsing duplicate devices
#[derive(Debug, Clone, PartialEq)]
pub struct DeduplicationOutcome {
    /// Surviving records in display order (hostname, then name)
    pub records: Vec<InventoryRecord>,
    /// Records seen before deduplication
    pub total_count: usize,
    /// Records discarded as duplicates of a kept serial number
    pub duplicate_count: usize,
}

impl DeduplicationOutcome {
    pub fn unique_count(&self) -> usize {
        self.records.len()
    }
}

/// Deduplicator service collapsing one physical device reported many times
///
/// A chassis often appears under several names in the same capture (the
/// stack entry and the switch entry share one serial), and the same device
/// appears in every capture of it. Records are keyed on serial number alone;
/// `RecordPrecedence` decides which report of a serial survives.
pub struct Deduplicator;

impl Deduplicator {
    /// Deduplicates the full record collection of a run
    ///
    /// # Arguments
    /// * `records` - Every record extracted from every source
    ///
    /// # Returns
    /// The kept records sorted for display, with before/removed counts
    pub fn deduplicate(mut records: Vec<InventoryRecord>) -> DeduplicationOutcome {
        let total_count = records.len();

        // Stable sort: equal-precedence records keep their extraction order
        records.sort_by(RecordPrecedence::compare);

        let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
        records.retain(|record| seen.insert(record.serial_number().to_string()));

        let duplicate_count = total_count - records.len();

        records.sort_by(RecordPrecedence::compare_for_display);

        DeduplicationOutcome {
            records,
            total_count,
            duplicate_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{
        CaptureContext, HostnameSource, ProductId, ResolvedCaptureTime, ResolvedHostname,
        SerialNumber,
    };
    use chrono::NaiveDate;

    struct Fixture<'a> {
        hostname: &'a str,
        source: HostnameSource,
        name: &'a str,
        description: &'a str,
        serial: &'a str,
        day: Option<u32>,
        file: &'a str,
    }

    fn record(fixture: Fixture<'_>) -> InventoryRecord {
        let time = fixture.day.map(|d| {
            NaiveDate::from_ymd_opt(2024, 1, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        });
        let context = CaptureContext::new(
            ResolvedHostname::new(fixture.hostname.to_string(), fixture.source),
            ResolvedCaptureTime::new(time, None),
            fixture.file.to_string(),
            None,
        );
        InventoryRecord::new(
            &context,
            fixture.name.to_string(),
            fixture.description.to_string(),
            ProductId::new("C9300-48P".to_string()).unwrap(),
            SerialNumber::new(fixture.serial.to_string()).unwrap(),
        )
    }

    fn base<'a>(serial: &'a str) -> Fixture<'a> {
        Fixture {
            hostname: "sw1",
            source: HostnameSource::Prompt,
            name: "Chassis",
            description: "Switch",
            serial,
            day: Some(1),
            file: "a.log",
        }
    }

    #[test]
    fn test_deduplicate_keeps_highest_priority_source() {
        let records = vec![
            record(Fixture {
                hostname: "sw1.log",
                source: HostnameSource::Fallback,
                description: "A very long and detailed chassis description text",
                day: Some(28),
                file: "sw1.log",
                ..base("FOC1")
            }),
            record(Fixture {
                description: "Short",
                day: None,
                file: "b.log",
                ..base("FOC1")
            }),
        ];

        let outcome = Deduplicator::deduplicate(records);

        assert_eq!(outcome.total_count, 2);
        assert_eq!(outcome.duplicate_count, 1);
        assert_eq!(outcome.unique_count(), 1);
        assert_eq!(outcome.records[0].hostname_priority(), 2);
        assert_eq!(outcome.records[0].source_identifier(), "b.log");
    }

    #[test]
    fn test_deduplicate_prefers_longer_description() {
        let long = "Cisco Catalyst 9300 Series 48-port PoE+ "; // 40 chars
        let short = "C9300-48P+ P"; // 12 chars
        assert_eq!(long.chars().count(), 40);
        assert_eq!(short.chars().count(), 12);

        let records = vec![
            record(Fixture {
                name: "Switch 1",
                description: short,
                day: Some(20),
                ..base("FOC1")
            }),
            record(Fixture {
                name: "c93xx Stack",
                description: long,
                day: Some(2),
                ..base("FOC1")
            }),
        ];

        let outcome = Deduplicator::deduplicate(records);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].description(), long);
    }

    #[test]
    fn test_deduplicate_prefers_newest_capture_then_known_time() {
        let records = vec![
            record(Fixture {
                day: None,
                file: "none.log",
                ..base("FOC1")
            }),
            record(Fixture {
                day: Some(3),
                file: "old.log",
                ..base("FOC1")
            }),
            record(Fixture {
                day: Some(9),
                file: "new.log",
                ..base("FOC1")
            }),
        ];

        let outcome = Deduplicator::deduplicate(records);

        assert_eq!(outcome.duplicate_count, 2);
        assert_eq!(outcome.records[0].source_identifier(), "new.log");
    }

    #[test]
    fn test_deduplicate_keeps_first_of_exact_ties() {
        let records = vec![
            record(Fixture {
                file: "first.log",
                ..base("FOC1")
            }),
            record(Fixture {
                file: "second.log",
                ..base("FOC1")
            }),
        ];

        let outcome = Deduplicator::deduplicate(records);
        assert_eq!(outcome.records[0].source_identifier(), "first.log");
    }

    #[test]
    fn test_deduplicate_sorts_by_hostname_then_name() {
        let records = vec![
            record(Fixture {
                hostname: "sw2",
                name: "Chassis",
                ..base("S3")
            }),
            record(Fixture {
                hostname: "sw1",
                name: "Power Supply",
                ..base("S2")
            }),
            record(Fixture {
                hostname: "sw1",
                name: "Fan",
                ..base("S1")
            }),
        ];

        let outcome = Deduplicator::deduplicate(records);
        let order: Vec<(&str, &str)> = outcome
            .records
            .iter()
            .map(|r| (r.hostname(), r.name()))
            .collect();

        assert_eq!(
            order,
            vec![("sw1", "Fan"), ("sw1", "Power Supply"), ("sw2", "Chassis")]
        );
        assert_eq!(outcome.duplicate_count, 0);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let records = vec![
            record(base("A")),
            record(Fixture {
                description: "longer description",
                ..base("A")
            }),
            record(base("B")),
        ];

        let first = Deduplicator::deduplicate(records);
        let second = Deduplicator::deduplicate(first.records.clone());

        assert_eq!(second.records, first.records);
        assert_eq!(second.duplicate_count, 0);
        assert_eq!(second.total_count, first.unique_count());
    }

    #[test]
    fn test_deduplicate_empty() {
        let outcome = Deduplicator::deduplicate(Vec::new());
        assert_eq!(outcome.total_count, 0);
        assert_eq!(outcome.duplicate_count, 0);
        assert!(outcome.records.is_empty());
    }
}
