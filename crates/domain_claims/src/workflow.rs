//! Intake wizard
//!
//! A `ClaimSession` walks a claimant through four steps, accumulating a
//! `ClaimDraft`. Submission turns the draft into a `ClaimRecord` by running
//! the validator and attaching the guidance narrative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{InsuranceType, SessionId};

use crate::draft::{Attachment, ClaimDraft};
use crate::error::ClaimError;
use crate::guidance;
use crate::record::ClaimRecord;
use crate::validation::ClaimValidator;

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    ClaimDetails,
    Documentation,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::ClaimDetails => 2,
            WizardStep::Documentation => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::ClaimDetails => "Claim Details",
            WizardStep::Documentation => "Documentation",
            WizardStep::Review => "Review & Submit",
        }
    }

    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::BasicInfo | WizardStep::ClaimDetails => WizardStep::BasicInfo,
            WizardStep::Documentation => WizardStep::ClaimDetails,
            WizardStep::Review => WizardStep::Documentation,
        }
    }
}

/// Review-step summary of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSummary {
    pub name: String,
    pub policy_number: String,
    pub insurance_type: Option<InsuranceType>,
    pub description: String,
    pub documents: usize,
}

/// One in-progress run of the intake wizard
#[derive(Debug, Clone)]
pub struct ClaimSession {
    id: SessionId,
    step: WizardStep,
    draft: ClaimDraft,
    started_at: DateTime<Utc>,
}

impl ClaimSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new_v7(),
            step: WizardStep::BasicInfo,
            draft: ClaimDraft::default(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ClaimDraft {
        &self.draft
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Fraction of the wizard reached, from 0.25 at the first step to 1.0 at review
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / WizardStep::COUNT as f64
    }

    /// Step 1: claimant name, policy number and insurance type
    pub fn submit_basic_info(
        &mut self,
        name: &str,
        policy_number: &str,
        insurance_type: &str,
    ) -> Result<(), ClaimError> {
        self.expect_step(WizardStep::BasicInfo)?;

        if [name, policy_number, insurance_type].iter().any(|f| f.trim().is_empty()) {
            return Err(ClaimError::MissingRequiredFields);
        }
        let insurance_type = insurance_type
            .parse::<InsuranceType>()
            .map_err(|_| ClaimError::UnknownInsuranceType(insurance_type.to_string()))?;

        self.draft.name = name.to_string();
        self.draft.policy_number = policy_number.to_string();
        self.draft.insurance_type = Some(insurance_type);
        self.step = WizardStep::ClaimDetails;
        Ok(())
    }

    /// Step 2: free-text description of the incident
    pub fn submit_details(&mut self, description: &str) -> Result<(), ClaimError> {
        self.expect_step(WizardStep::ClaimDetails)?;

        if description.trim().is_empty() {
            return Err(ClaimError::MissingDescription);
        }
        self.draft.description = description.to_string();
        self.step = WizardStep::Documentation;
        Ok(())
    }

    /// Step 3: adds a supporting document
    pub fn attach(&mut self, attachment: Attachment) -> Result<(), ClaimError> {
        self.expect_step(WizardStep::Documentation)?;
        self.draft.attachments.push(attachment);
        Ok(())
    }

    /// Step 3: done uploading, documents are optional
    pub fn finish_documentation(&mut self) -> Result<(), ClaimError> {
        self.expect_step(WizardStep::Documentation)?;
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Returns to the previous step, keeping everything entered so far
    pub fn back(&mut self) {
        self.step = self.step.previous();
    }

    pub fn summary(&self) -> ClaimSummary {
        ClaimSummary {
            name: self.draft.name.clone(),
            policy_number: self.draft.policy_number.clone(),
            insurance_type: self.draft.insurance_type,
            description: self.draft.description.clone(),
            documents: self.draft.document_count(),
        }
    }

    /// Fails unless the claimant has reached review
    pub fn ensure_reviewed(&self) -> Result<(), ClaimError> {
        self.expect_step(WizardStep::Review)
    }

    /// Step 4: consumes the session and yields its draft
    pub fn into_submission(self) -> Result<ClaimDraft, ClaimError> {
        self.ensure_reviewed()?;
        Ok(self.draft)
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), ClaimError> {
        if self.step != expected {
            return Err(ClaimError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

impl Default for ClaimSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a reviewed draft and produces its history record
///
/// Returns `None` when the draft never received an insurance type, which
/// the wizard prevents by requiring one at step 1.
pub fn finalize(
    draft: &ClaimDraft,
    validator: &ClaimValidator<'_>,
    submitted_at: DateTime<Utc>,
) -> Option<ClaimRecord> {
    let insurance_type = draft.insurance_type?;
    let outcome = validator.validate_draft(draft);
    let ai_guidance = guidance::narrative(insurance_type, &draft.description);

    info!(
        policy_number = %draft.policy_number,
        insurance_type = %insurance_type,
        outcome = outcome.tag(),
        documents = draft.document_count(),
        "Claim submitted"
    );

    Some(ClaimRecord {
        timestamp: submitted_at,
        name: draft.name.clone(),
        policy_number: draft.policy_number.clone(),
        insurance_type,
        description: draft.description.clone(),
        status: outcome.message(),
        ai_guidance,
        document_count: draft.document_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_by_step() {
        let mut session = ClaimSession::new();
        assert_eq!(session.progress(), 0.25);

        session.submit_basic_info("Asha", "1001", "Auto").unwrap();
        assert_eq!(session.progress(), 0.5);
    }

    #[test]
    fn test_back_from_first_step_is_noop() {
        let mut session = ClaimSession::new();
        session.back();
        assert_eq!(session.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_back_keeps_entered_fields() {
        let mut session = ClaimSession::new();
        session.submit_basic_info("Asha", "1001", "home").unwrap();
        session.submit_details("storm damage").unwrap();
        session.back();

        assert_eq!(session.step(), WizardStep::ClaimDetails);
        assert_eq!(session.draft().description, "storm damage");
        assert_eq!(session.draft().insurance_type, Some(InsuranceType::Home));
    }

    #[test]
    fn test_submission_requires_review() {
        let mut session = ClaimSession::new();
        session.submit_basic_info("Asha", "1001", "Health").unwrap();
        assert!(matches!(
            session.ensure_reviewed(),
            Err(ClaimError::WrongStep { expected: WizardStep::Review, actual: WizardStep::ClaimDetails })
        ));

        session.submit_details("hospitalization after surgery").unwrap();
        session.finish_documentation().unwrap();
        let draft = session.into_submission().unwrap();
        assert_eq!(draft.description, "hospitalization after surgery");
    }
}
