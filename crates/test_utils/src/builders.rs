//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{InsuranceType, PolicyNumber};
use domain_claims::{Attachment, ClaimDraft, ClaimRecord, Outcome};
use domain_policy::PolicyRecord;

use crate::classifier::png_bytes;
use crate::fixtures::{DescriptionFixtures, PolicyFixtures, TemporalFixtures};

/// Builder for policy table rows
pub struct PolicyRecordBuilder {
    policy_number: i64,
    holder_name: String,
    insurance_type: InsuranceType,
}

impl Default for PolicyRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyRecordBuilder {
    pub fn new() -> Self {
        Self {
            policy_number: 10001,
            holder_name: "Asha Rao".to_string(),
            insurance_type: InsuranceType::Auto,
        }
    }

    pub fn with_policy_number(mut self, number: i64) -> Self {
        self.policy_number = number;
        self
    }

    pub fn with_holder(mut self, name: impl Into<String>) -> Self {
        self.holder_name = name.into();
        self
    }

    pub fn with_insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.insurance_type = insurance_type;
        self
    }

    pub fn build(self) -> PolicyRecord {
        PolicyRecord::new(
            PolicyNumber::new(self.policy_number),
            self.holder_name,
            self.insurance_type,
        )
    }
}

/// Builder for wizard drafts; defaults to an approvable Auto claim
pub struct ClaimDraftBuilder {
    draft: ClaimDraft,
}

impl Default for ClaimDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimDraftBuilder {
    pub fn new() -> Self {
        Self::for_type(InsuranceType::Auto)
    }

    /// Draft against the fixture policy of `insurance_type`
    pub fn for_type(insurance_type: InsuranceType) -> Self {
        Self {
            draft: ClaimDraft {
                name: "Asha Rao".to_string(),
                policy_number: PolicyFixtures::policy_for(insurance_type).to_string(),
                insurance_type: Some(insurance_type),
                description: DescriptionFixtures::approved(insurance_type).to_string(),
                attachments: Vec::new(),
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.draft.policy_number = number.into();
        self
    }

    pub fn without_insurance_type(mut self) -> Self {
        self.draft.insurance_type = None;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = description.into();
        self
    }

    /// Adds a small PNG photo
    pub fn with_photo(mut self, file_name: &str) -> Self {
        self.draft.attachments.push(Attachment {
            file_name: file_name.to_string(),
            content_type: "image/png".to_string(),
            bytes: png_bytes(32, 24),
        });
        self
    }

    /// Adds a PDF document, which is never assessed
    pub fn with_pdf(mut self, file_name: &str) -> Self {
        self.draft.attachments.push(Attachment {
            file_name: file_name.to_string(),
            content_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        });
        self
    }

    pub fn build(self) -> ClaimDraft {
        self.draft
    }
}

/// Builder for history records
pub struct ClaimRecordBuilder {
    record: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    pub fn new() -> Self {
        let insurance_type = InsuranceType::Auto;
        Self {
            record: ClaimRecord {
                timestamp: TemporalFixtures::submitted_at(),
                name: "Asha Rao".to_string(),
                policy_number: PolicyFixtures::AUTO_POLICY.to_string(),
                insurance_type,
                description: DescriptionFixtures::approved(insurance_type).to_string(),
                status: Outcome::ApprovedHighSeverity(insurance_type).message(),
                ai_guidance: "🚗 Collision detected.".to_string(),
                document_count: 0,
            },
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    /// Sets the status to the message of `outcome`
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.record.status = outcome.message();
        self
    }

    pub fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.record.ai_guidance = guidance.into();
        self
    }

    pub fn with_document_count(mut self, count: usize) -> Self {
        self.record.document_count = count;
        self
    }

    pub fn build(self) -> ClaimRecord {
        self.record
    }
}
