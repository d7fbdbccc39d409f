//! Validation outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::InsuranceType;

/// Result of validating a claim
///
/// Variants are listed in the priority order the validator checks them.
/// The rendered `message()` is what users see and what the claim history
/// stores; the variant itself is only the internal tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    MissingFields,
    InvalidPolicyFormat,
    PolicyNotFound,
    NoValidEvent(InsuranceType),
    MinorIssue(InsuranceType),
    MaintenanceIssue,
    FraudSuspected,
    ApprovedHighSeverity(InsuranceType),
    PendingReview(InsuranceType),
}

impl Outcome {
    /// Stable machine-readable tag
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::MissingFields => "missing_fields",
            Outcome::InvalidPolicyFormat => "invalid_policy_format",
            Outcome::PolicyNotFound => "policy_not_found",
            Outcome::NoValidEvent(_) => "no_valid_event",
            Outcome::MinorIssue(_) => "minor_issue",
            Outcome::MaintenanceIssue => "maintenance_issue",
            Outcome::FraudSuspected => "fraud_suspected",
            Outcome::ApprovedHighSeverity(_) => "approved_high_severity",
            Outcome::PendingReview(_) => "pending_review",
        }
    }

    /// Human-readable message shown to the claimant and stored as claim status
    pub fn message(&self) -> String {
        match self {
            Outcome::MissingFields => {
                "❌ Please provide all required claim details.".to_string()
            }
            Outcome::InvalidPolicyFormat => {
                "❌ Invalid policy number format. Please enter digits only.".to_string()
            }
            Outcome::PolicyNotFound => {
                "❌ Invalid policy number or mismatched insurance type.".to_string()
            }
            Outcome::NoValidEvent(t) => format!(
                "❌ Invalid {t} claim. Must specify a legitimate insurance event like accident, fire, theft, or medical emergency."
            ),
            Outcome::MinorIssue(t) => {
                format!("❌ Minor {t} issue detected. This doesn't qualify for insurance claim.")
            }
            Outcome::MaintenanceIssue => {
                "❌ Maintenance/regular issues are not covered by insurance.".to_string()
            }
            Outcome::FraudSuspected => {
                "🚨 Fraud detected! Claim flagged for investigation.".to_string()
            }
            Outcome::ApprovedHighSeverity(t) => {
                format!("✅ {t} claim APPROVED. High severity incident confirmed.")
            }
            Outcome::PendingReview(t) => format!(
                "⚠️ {t} claim PENDING REVIEW. Please provide more details about damage severity."
            ),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::ApprovedHighSeverity(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_is_rendered_in_message() {
        let msg = Outcome::ApprovedHighSeverity(InsuranceType::Home).message();
        assert_eq!(msg, "✅ Home claim APPROVED. High severity incident confirmed.");

        let msg = Outcome::PendingReview(InsuranceType::Health).to_string();
        assert!(msg.starts_with("⚠️ Health claim PENDING REVIEW."));
    }

    #[test]
    fn test_tags_are_unique() {
        let t = InsuranceType::Auto;
        let all = [
            Outcome::MissingFields,
            Outcome::InvalidPolicyFormat,
            Outcome::PolicyNotFound,
            Outcome::NoValidEvent(t),
            Outcome::MinorIssue(t),
            Outcome::MaintenanceIssue,
            Outcome::FraudSuspected,
            Outcome::ApprovedHighSeverity(t),
            Outcome::PendingReview(t),
        ];
        let mut tags: Vec<_> = all.iter().map(Outcome::tag).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), all.len());
    }
}
