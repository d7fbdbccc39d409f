//! Image assessment handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};

use domain_assessment::Assessment;

use crate::dto::assessments::AssessmentQuery;
use crate::handlers::parse_insurance_type;
use crate::{error::ApiError, AppState};

/// Assesses a single image sent as the raw request body
pub async fn assess_image(
    State(state): State<AppState>,
    Query(query): Query<AssessmentQuery>,
    body: Bytes,
) -> Result<Json<Assessment>, ApiError> {
    let insurance_type = parse_insurance_type(&query.insurance_type)?;
    let intake = state.intake.clone();
    let assessment = tokio::task::spawn_blocking(move || intake.assess(&body, insurance_type))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(assessment))
}
