//! Claims DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{ClaimRecord, Outcome, RecordStanding};

/// Free-form claim check; blank fields are reported through the outcome
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateClaimRequest {
    #[serde(default)]
    #[validate(length(max = 32))]
    pub insurance_type: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub policy_number: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub outcome: &'static str,
    pub message: String,
    pub approved: bool,
}

impl From<Outcome> for ValidationResponse {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome: outcome.tag(),
            message: outcome.message(),
            approved: outcome.is_approved(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimRecordResponse {
    #[serde(flatten)]
    pub record: ClaimRecord,
    pub standing: RecordStanding,
    pub description_preview: String,
}

impl From<ClaimRecord> for ClaimRecordResponse {
    fn from(record: ClaimRecord) -> Self {
        Self {
            standing: record.standing(),
            description_preview: record.description_preview(100),
            record,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub cleared: usize,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}
