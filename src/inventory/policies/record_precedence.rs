use crate::inventory::domain::InventoryRecord;
use std::cmp::Ordering;

/// RecordPrecedence policy deciding which report of a device is kept
///
/// When the same serial number shows up in several captures, the preferred
/// record is the one with, in order:
/// 1. the most trustworthy hostname source (prompt > config line > file name)
/// 2. the longer description ("Cisco Catalyst 9300 48-port" over "C9300-48P")
/// 3. the more recent capture time; an unknown time ranks below any known time
pub struct RecordPrecedence;

impl RecordPrecedence {
    /// Orders `a` before `b` when `a` should win a serial-number tie
    pub fn compare(a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
        b.hostname_priority()
            .cmp(&a.hostname_priority())
            .then_with(|| b.description_length().cmp(&a.description_length()))
            // Option orders None below Some, so reversing puts unknown times last
            .then_with(|| b.capture_time().cmp(&a.capture_time()))
    }

    /// Presentation order of the final report: hostname, then component name
    pub fn compare_for_display(a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
        a.hostname()
            .cmp(b.hostname())
            .then_with(|| a.name().cmp(b.name()))
    }
}
