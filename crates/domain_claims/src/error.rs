//! Claims domain errors

use thiserror::Error;

use crate::workflow::WizardStep;

/// Errors raised by the intake wizard
///
/// Claim validation itself never fails; invalid claims are reported as an
/// `Outcome`. These errors cover misuse of the wizard steps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please provide a claim description")]
    MissingDescription,

    #[error("Unknown insurance type: {0}")]
    UnknownInsuranceType(String),

    #[error("Unsupported file type: {0} (accepted: jpg, jpeg, png, pdf)")]
    UnsupportedFileType(String),

    #[error("Action not available at step {actual:?}, expected {expected:?}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
}
