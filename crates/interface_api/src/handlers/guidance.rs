//! Guidance handlers

use axum::{extract::Path, Json};
use validator::Validate;

use domain_claims::guidance;

use crate::dto::guidance::*;
use crate::error::ApiError;
use crate::handlers::parse_insurance_type;

/// Structured guidance, coverage and the rendered guide for a type
pub async fn get_guidance(
    Path(insurance_type): Path<String>,
) -> Result<Json<GuidanceResponse>, ApiError> {
    let insurance_type = parse_insurance_type(&insurance_type)?;
    Ok(Json(GuidanceResponse {
        insurance_type,
        context_label: guidance::context_label(insurance_type),
        guidance: guidance::guidance(insurance_type),
        coverage: guidance::coverage(insurance_type),
        markdown: guidance::render_markdown(insurance_type),
    }))
}

/// Short narrative for a described incident
pub async fn narrative(
    Path(insurance_type): Path<String>,
    Json(request): Json<NarrativeRequest>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    request.validate()?;
    let insurance_type = parse_insurance_type(&insurance_type)?;
    Ok(Json(NarrativeResponse {
        narrative: guidance::narrative(insurance_type, &request.description),
    }))
}
