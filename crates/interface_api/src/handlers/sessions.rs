//! Intake wizard handlers

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use validator::Validate;

use domain_claims::Attachment;

use crate::dto::sessions::*;
use crate::handlers::parse_session_id;
use crate::intake::{SessionView, Submission};
use crate::{error::ApiError, AppState};

/// Opens a new wizard session
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.intake.start_session()))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.intake.session(id)?))
}

/// Discards an unfinished session
pub async fn abandon_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_session_id(&id)?;
    state.intake.abandon_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Step 1
pub async fn submit_basic_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<BasicInfoRequest>,
) -> Result<Json<SessionView>, ApiError> {
    request.validate()?;
    let id = parse_session_id(&id)?;
    let view = state.intake.submit_basic_info(
        id,
        &request.name,
        &request.policy_number,
        &request.insurance_type,
    )?;
    Ok(Json(view))
}

/// Step 2
pub async fn submit_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<DetailsRequest>,
) -> Result<Json<SessionView>, ApiError> {
    request.validate()?;
    let id = parse_session_id(&id)?;
    Ok(Json(state.intake.submit_details(id, &request.description)?))
}

/// Step 3: uploads one document as the raw request body
pub async fn upload_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DocumentQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SessionView>, ApiError> {
    query.validate()?;
    let id = parse_session_id(&id)?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    let attachment = Attachment::new(query.file_name, content_type, body.to_vec())?;
    Ok(Json(state.intake.attach(id, attachment)?))
}

/// Step 3: no more documents
pub async fn complete_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.intake.finish_documentation(id)?))
}

pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.intake.back(id)?))
}

/// Step 4: records the claim and assesses its images
pub async fn submit_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError> {
    let id = parse_session_id(&id)?;
    let intake = state.intake.clone();
    let submission = tokio::task::spawn_blocking(move || intake.submit(id, Utc::now()))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;
    Ok(Json(submission))
}
