//! Rule-based claim validation

use tracing::debug;

use core_kernel::{contains_any, InsuranceType, PolicyNumber};
use domain_policy::PolicyStore;

use crate::draft::ClaimDraft;
use crate::outcome::Outcome;
use crate::rules;

/// Validates claims against the policy store and the keyword rule tables
///
/// The validator is a pure function of its inputs, the read-only policy
/// store and the static tables. It never fails: malformed input is reported
/// through the returned `Outcome`.
#[derive(Debug, Clone, Copy)]
pub struct ClaimValidator<'a> {
    policies: &'a PolicyStore,
}

impl<'a> ClaimValidator<'a> {
    pub fn new(policies: &'a PolicyStore) -> Self {
        Self { policies }
    }

    /// Validates raw form input
    ///
    /// Checks run in a fixed order and the first match wins, so a
    /// description without a qualifying event is rejected as
    /// `NoValidEvent` even when it also mentions fraud or severity.
    pub fn validate(&self, insurance_type: &str, policy_number: &str, description: &str) -> Outcome {
        let outcome = self.evaluate(insurance_type, policy_number, description);
        debug!(
            insurance_type,
            policy_number,
            outcome = outcome.tag(),
            "Claim validated"
        );
        outcome
    }

    /// Validates an accumulated wizard draft
    pub fn validate_draft(&self, draft: &ClaimDraft) -> Outcome {
        let insurance_type = draft.insurance_type.map(|t| t.name()).unwrap_or_default();
        self.validate(insurance_type, &draft.policy_number, &draft.description)
    }

    fn evaluate(&self, insurance_type: &str, policy_number: &str, description: &str) -> Outcome {
        if policy_number.is_empty() || description.is_empty() {
            return Outcome::MissingFields;
        }

        let Ok(number) = policy_number.parse::<PolicyNumber>() else {
            return Outcome::InvalidPolicyFormat;
        };

        let Ok(insurance_type) = insurance_type.parse::<InsuranceType>() else {
            return Outcome::PolicyNotFound;
        };

        if self.policies.find_policy(number, insurance_type).is_none() {
            return Outcome::PolicyNotFound;
        }

        classify_description(insurance_type, description)
    }
}

/// Runs the keyword stages of validation on a description
///
/// Assumes the policy checks have already passed.
pub fn classify_description(insurance_type: InsuranceType, description: &str) -> Outcome {
    let desc = description.to_lowercase();

    if !contains_any(&desc, rules::valid_events(insurance_type)) {
        return Outcome::NoValidEvent(insurance_type);
    }
    if contains_any(&desc, rules::minor_issues(insurance_type)) {
        return Outcome::MinorIssue(insurance_type);
    }
    if contains_any(&desc, rules::MAINTENANCE_ISSUES) {
        return Outcome::MaintenanceIssue;
    }
    if contains_any(&desc, rules::FRAUD_PATTERNS) {
        return Outcome::FraudSuspected;
    }
    if contains_any(&desc, rules::SEVERITY_INDICATORS) {
        return Outcome::ApprovedHighSeverity(insurance_type);
    }
    Outcome::PendingReview(insurance_type)
}
