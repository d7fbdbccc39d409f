//! Claim Intake Domain
//!
//! This crate implements the claim side of the intake workflow: the wizard
//! that accumulates a claim draft, the keyword rule engine that validates it,
//! the canned guidance attached to every submission, and the append-only
//! claim history.
//!
//! # Intake Lifecycle
//!
//! ```text
//! BasicInfo -> ClaimDetails -> Documentation -> Review -> submitted (ClaimRecord)
//! ```
//!
//! # Validation Order
//!
//! Outcomes are checked in a fixed priority order and the first match wins:
//!
//! ```text
//! MissingFields -> InvalidPolicyFormat -> PolicyNotFound -> NoValidEvent
//!   -> MinorIssue -> MaintenanceIssue -> FraudSuspected
//!   -> ApprovedHighSeverity -> PendingReview
//! ```

pub mod outcome;
pub mod rules;
pub mod validation;
pub mod guidance;
pub mod draft;
pub mod record;
pub mod history;
pub mod workflow;
pub mod error;

pub use outcome::Outcome;
pub use validation::ClaimValidator;
pub use guidance::{Guidance, CoverageSummary};
pub use draft::{ClaimDraft, Attachment};
pub use record::{ClaimRecord, RecordStanding};
pub use history::ClaimHistory;
pub use workflow::{ClaimSession, ClaimSummary, WizardStep};
pub use error::ClaimError;
