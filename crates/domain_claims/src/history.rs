//! Append-only claim history

use tracing::info;

use crate::record::{ClaimRecord, RecordStanding};

/// Ordered list of submitted claims
///
/// Records are only ever appended; the whole list can be cleared with
/// `reset`. Callers sharing a history across threads serialize access
/// themselves (the API keeps it behind a mutex).
#[derive(Debug, Clone, Default)]
pub struct ClaimHistory {
    records: Vec<ClaimRecord>,
}

impl ClaimHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from previously exported records
    pub fn from_records(records: Vec<ClaimRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: ClaimRecord) {
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    /// Records sorted by timestamp, newest first; ties keep insertion order
    pub fn newest_first(&self) -> Vec<&ClaimRecord> {
        let mut sorted: Vec<&ClaimRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn approved_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.standing() == RecordStanding::Approved)
            .count()
    }

    /// Clears every record
    pub fn reset(&mut self) {
        let cleared = self.records.len();
        self.records.clear();
        info!(cleared, "Claim history cleared");
    }
}
