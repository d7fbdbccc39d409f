//! HTTP API Layer
//!
//! This crate exposes the claim intake workflow as a REST API using Axum.
//!
//! # Architecture
//!
//! - **Intake**: Application service owning sessions, history and the assessor
//! - **Handlers**: Request handlers per resource
//! - **Middleware**: Request ids, tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(intake, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod intake;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{assessments, claims, guidance, health, policy, sessions};
use crate::intake::ClaimIntake;
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<ClaimIntake>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `intake` - Claim intake service
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(intake: Arc<ClaimIntake>, config: ApiConfig) -> Router {
    let body_limit = config.max_upload_bytes;
    let state = AppState { intake, config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let policy_routes = Router::new().route("/:policy_number/holder", get(policy::get_holder));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).delete(claims::reset_claims))
        .route("/validate", post(claims::validate_claim))
        .route("/stats", get(claims::claim_stats))
        .route("/export", get(claims::export_claims))
        .route("/import", post(claims::import_claims));

    let guidance_routes = Router::new()
        .route("/:insurance_type", get(guidance::get_guidance))
        .route("/:insurance_type/narrative", post(guidance::narrative));

    let session_routes = Router::new()
        .route("/", post(sessions::create_session))
        .route(
            "/:id",
            get(sessions::get_session).delete(sessions::abandon_session),
        )
        .route("/:id/basic-info", put(sessions::submit_basic_info))
        .route("/:id/details", put(sessions::submit_details))
        .route("/:id/documents", post(sessions::upload_document))
        .route("/:id/documents/complete", post(sessions::complete_documents))
        .route("/:id/back", post(sessions::go_back))
        .route("/:id/submit", post(sessions::submit_claim));

    let assessment_routes = Router::new().route("/", post(assessments::assess_image));

    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .nest("/claims", claims_routes)
        .nest("/guidance", guidance_routes)
        .nest("/sessions", session_routes)
        .nest("/assessments", assessment_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
