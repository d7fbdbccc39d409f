//! Request handlers

pub mod health;
pub mod policy;
pub mod claims;
pub mod guidance;
pub mod sessions;
pub mod assessments;

use core_kernel::{InsuranceType, SessionId};

use crate::error::ApiError;

/// Parses an insurance type from a path or query segment
pub(crate) fn parse_insurance_type(raw: &str) -> Result<InsuranceType, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown insurance type: {raw}")))
}

/// Parses a session id, with or without its `SES-` prefix
pub(crate) fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid session id: {raw}")))
}
