//! Claims handlers

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use infra_store::StoreError;

use crate::dto::claims::*;
use crate::intake::{HistoryStats, IntakeError};
use crate::{error::ApiError, AppState};

/// Validates a claim without recording it
pub async fn validate_claim(
    State(state): State<AppState>,
    Json(request): Json<ValidateClaimRequest>,
) -> Result<Json<ValidationResponse>, ApiError> {
    request.validate()?;
    let outcome = state.intake.validate(
        &request.insurance_type,
        &request.policy_number,
        &request.description,
    );
    Ok(Json(outcome.into()))
}

/// Lists submitted claims, newest first
pub async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimRecordResponse>> {
    Json(
        state
            .intake
            .history()
            .into_iter()
            .map(ClaimRecordResponse::from)
            .collect(),
    )
}

pub async fn claim_stats(State(state): State<AppState>) -> Json<HistoryStats> {
    Json(state.intake.stats())
}

/// Clears the claim history
pub async fn reset_claims(State(state): State<AppState>) -> Json<ResetResponse> {
    Json(ResetResponse {
        cleared: state.intake.reset_history(),
    })
}

/// Downloads the claim history as CSV
pub async fn export_claims(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = state.intake.export_history()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"claim_history.csv\"",
            ),
        ],
        csv,
    ))
}

/// Replaces the claim history with an uploaded CSV export
pub async fn import_claims(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportResponse>, ApiError> {
    let imported = state
        .intake
        .import_history(&body[..])
        .map_err(|e| match e {
            IntakeError::Store(StoreError::Csv(err)) => {
                ApiError::Validation(format!("Invalid claim history CSV: {err}"))
            }
            other => other.into(),
        })?;
    Ok(Json(ImportResponse { imported }))
}
