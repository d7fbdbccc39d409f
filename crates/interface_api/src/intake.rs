//! Claim intake application service
//!
//! Owns everything that outlives a single request: the policy store, the
//! image assessor, open wizard sessions, the claim history and the random
//! generator behind damage estimates. Each piece of mutable state sits
//! behind its own mutex, held only for the duration of one operation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use core_kernel::{InsuranceType, SessionId};
use domain_assessment::{Assessment, ImageAssessor, ImageClassifier};
use domain_claims::workflow::finalize;
use domain_claims::{
    Attachment, ClaimError, ClaimHistory, ClaimRecord, ClaimSession, ClaimSummary,
    ClaimValidator, Outcome, WizardStep,
};
use domain_policy::PolicyStore;
use infra_store::StoreError;

/// Errors raised by the intake service
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Point-in-time view of a wizard session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub step: WizardStep,
    pub step_number: usize,
    pub step_title: &'static str,
    pub progress: f64,
    pub summary: ClaimSummary,
}

impl From<&ClaimSession> for SessionView {
    fn from(session: &ClaimSession) -> Self {
        Self {
            id: session.id(),
            step: session.step(),
            step_number: session.step().number(),
            step_title: session.step().title(),
            progress: session.progress(),
            summary: session.summary(),
        }
    }
}

/// Assessment of one uploaded image
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAssessment {
    pub file_name: String,
    pub assessment: Assessment,
}

/// Result of submitting a reviewed claim
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub record: ClaimRecord,
    pub assessments: Vec<DocumentAssessment>,
}

/// History counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub approved: usize,
}

/// Unfinished sessions older than this are evicted unless configured otherwise
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

pub struct ClaimIntake {
    policies: Arc<PolicyStore>,
    assessor: ImageAssessor,
    history: Mutex<ClaimHistory>,
    sessions: Mutex<HashMap<SessionId, ClaimSession>>,
    rng: Mutex<StdRng>,
    session_ttl: Duration,
}

impl ClaimIntake {
    /// Creates the service; without a seed the generator is seeded from entropy
    pub fn new(
        policies: Arc<PolicyStore>,
        classifier: Arc<dyn ImageClassifier>,
        rng_seed: Option<u64>,
    ) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            policies,
            assessor: ImageAssessor::new(classifier),
            history: Mutex::new(ClaimHistory::new()),
            sessions: Mutex::new(HashMap::new()),
            rng: Mutex::new(rng),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        }
    }

    /// Sets how long an unfinished session is kept
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn policies(&self) -> &PolicyStore {
        &self.policies
    }

    /// Holder name for raw policy number input, used as a form preview
    pub fn policy_holder(&self, raw_policy_number: &str) -> Option<String> {
        self.policies
            .lookup_holder(raw_policy_number)
            .map(str::to_string)
    }

    pub fn validate(&self, insurance_type: &str, policy_number: &str, description: &str) -> Outcome {
        ClaimValidator::new(&self.policies).validate(insurance_type, policy_number, description)
    }

    // ------------------------------------------------------------------
    // Wizard sessions
    // ------------------------------------------------------------------

    pub fn start_session(&self) -> SessionView {
        let session = ClaimSession::new();
        self.evict_expired_sessions(session.started_at());
        let view = SessionView::from(&session);
        lock(&self.sessions).insert(session.id(), session);
        info!(session_id = %view.id, "Intake session started");
        view
    }

    /// Discards an unfinished session and its attachments
    pub fn abandon_session(&self, id: SessionId) -> Result<(), IntakeError> {
        lock(&self.sessions)
            .remove(&id)
            .ok_or(IntakeError::SessionNotFound(id))?;
        info!(session_id = %id, "Intake session abandoned");
        Ok(())
    }

    /// Drops sessions started more than the session TTL before `now`
    pub fn evict_expired_sessions(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.session_ttl;
        let mut sessions = lock(&self.sessions);
        let before = sessions.len();
        sessions.retain(|_, session| session.started_at() > cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "Expired intake sessions evicted");
        }
        evicted
    }

    pub fn open_sessions(&self) -> usize {
        lock(&self.sessions).len()
    }

    pub fn session(&self, id: SessionId) -> Result<SessionView, IntakeError> {
        self.with_session(id, |_| Ok(()))
    }

    pub fn submit_basic_info(
        &self,
        id: SessionId,
        name: &str,
        policy_number: &str,
        insurance_type: &str,
    ) -> Result<SessionView, IntakeError> {
        self.with_session(id, |s| s.submit_basic_info(name, policy_number, insurance_type))
    }

    pub fn submit_details(&self, id: SessionId, description: &str) -> Result<SessionView, IntakeError> {
        self.with_session(id, |s| s.submit_details(description))
    }

    pub fn attach(&self, id: SessionId, attachment: Attachment) -> Result<SessionView, IntakeError> {
        self.with_session(id, |s| s.attach(attachment))
    }

    pub fn finish_documentation(&self, id: SessionId) -> Result<SessionView, IntakeError> {
        self.with_session(id, ClaimSession::finish_documentation)
    }

    pub fn back(&self, id: SessionId) -> Result<SessionView, IntakeError> {
        self.with_session(id, |s| {
            s.back();
            Ok(())
        })
    }

    /// Validates and records a reviewed claim, then assesses its images
    ///
    /// The session is closed on success. Image inference is blocking; async
    /// callers should run this on a blocking thread.
    pub fn submit(&self, id: SessionId, submitted_at: DateTime<Utc>) -> Result<Submission, IntakeError> {
        let draft = {
            let mut sessions = lock(&self.sessions);
            sessions
                .get(&id)
                .ok_or(IntakeError::SessionNotFound(id))?
                .ensure_reviewed()?;
            sessions
                .remove(&id)
                .ok_or(IntakeError::SessionNotFound(id))?
                .into_submission()?
        };

        let validator = ClaimValidator::new(&self.policies);
        let record = finalize(&draft, &validator, submitted_at)
            .ok_or(ClaimError::MissingRequiredFields)?;
        let insurance_type = record.insurance_type;
        lock(&self.history).append(record.clone());

        let assessments = draft
            .images()
            .map(|image| DocumentAssessment {
                file_name: image.file_name.clone(),
                assessment: self.assess(&image.bytes, insurance_type),
            })
            .collect();

        info!(session_id = %id, standing = ?record.standing(), "Claim recorded");
        Ok(Submission {
            record,
            assessments,
        })
    }

    /// Assesses a single image outside any wizard session
    pub fn assess(&self, image_bytes: &[u8], insurance_type: InsuranceType) -> Assessment {
        let mut rng = lock(&self.rng);
        self.assessor.assess(image_bytes, insurance_type, &mut *rng)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Submitted claims, newest first
    pub fn history(&self) -> Vec<ClaimRecord> {
        lock(&self.history)
            .newest_first()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> HistoryStats {
        let history = lock(&self.history);
        HistoryStats {
            total: history.len(),
            approved: history.approved_count(),
        }
    }

    /// Clears the history, returning how many records were dropped
    pub fn reset_history(&self) -> usize {
        let mut history = lock(&self.history);
        let cleared = history.len();
        history.reset();
        cleared
    }

    /// History as CSV in insertion order
    pub fn export_history(&self) -> Result<String, IntakeError> {
        let history = lock(&self.history);
        Ok(infra_store::export_history(history.records())?)
    }

    /// Replaces the history with records read from exported CSV
    ///
    /// Returns the number of records imported. On a parse error the current
    /// history is left untouched.
    pub fn import_history<R: std::io::Read>(&self, csv: R) -> Result<usize, IntakeError> {
        let records = infra_store::read_history(csv)?;
        Ok(self.replace_history(records))
    }

    /// Restores the history from a file written by `save_history`
    pub fn load_history(&self, path: impl AsRef<Path>) -> Result<usize, IntakeError> {
        let records = infra_store::load_history(path)?;
        Ok(self.replace_history(records))
    }

    pub fn save_history(&self, path: impl AsRef<Path>) -> Result<(), IntakeError> {
        let history = lock(&self.history);
        Ok(infra_store::save_history(path, history.records())?)
    }

    fn replace_history(&self, records: Vec<ClaimRecord>) -> usize {
        let imported = records.len();
        *lock(&self.history) = ClaimHistory::from_records(records);
        info!(claims = imported, "Claim history restored");
        imported
    }

    fn with_session<F>(&self, id: SessionId, action: F) -> Result<SessionView, IntakeError>
    where
        F: FnOnce(&mut ClaimSession) -> Result<(), ClaimError>,
    {
        let mut sessions = lock(&self.sessions);
        let session = sessions
            .get_mut(&id)
            .ok_or(IntakeError::SessionNotFound(id))?;
        action(session)?;
        Ok(SessionView::from(&*session))
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
