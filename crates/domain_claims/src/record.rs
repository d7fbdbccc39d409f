//! Submitted claim records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::InsuranceType;

/// An immutable entry in the claim history
///
/// Field order matches the columns of the history export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub description: String,
    /// Validation outcome message
    pub status: String,
    pub ai_guidance: String,
    pub document_count: usize,
}

/// Coarse reading of a record's status, used for statistics and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStanding {
    Approved,
    NeedsAttention,
    Rejected,
}

impl ClaimRecord {
    pub fn standing(&self) -> RecordStanding {
        if self.status.contains('✅') {
            RecordStanding::Approved
        } else if self.status.contains("⚠️") {
            RecordStanding::NeedsAttention
        } else {
            RecordStanding::Rejected
        }
    }

    /// Description cut to `max_chars` characters followed by `...`
    pub fn description_preview(&self, max_chars: usize) -> String {
        let preview: String = self.description.chars().take(max_chars).collect();
        format!("{preview}...")
    }
}
