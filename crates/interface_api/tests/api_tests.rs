//! End-to-end tests for the HTTP API
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`;
//! the image classifier is a fixed fake.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::InsuranceType;
use interface_api::{config::ApiConfig, create_router, intake::ClaimIntake};
use test_utils::{png_bytes, DescriptionFixtures, FixedClassifier, PolicyFixtures};

fn router_with(classifier: FixedClassifier) -> Router {
    let intake = ClaimIntake::new(
        Arc::new(PolicyFixtures::store()),
        Arc::new(classifier),
        Some(42),
    );
    create_router(Arc::new(intake), ApiConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// Reference Data Tests
// ============================================================================

mod reference_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let app = router_with(FixedClassifier::irrelevant());
        let (status, body) = send_json(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["policies"], 5);
    }

    #[tokio::test]
    async fn test_policy_holder_lookup() {
        let app = router_with(FixedClassifier::irrelevant());

        let (status, body) =
            send_json(&app, Method::GET, "/api/v1/policies/10002/holder", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["holder"], "Vikram Shah");

        let (status, body) =
            send_json(&app, Method::GET, "/api/v1/policies/99999/holder", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, _) = send_json(&app, Method::GET, "/api/v1/policies/12ab/holder", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_guidance() {
        let app = router_with(FixedClassifier::irrelevant());

        let (status, body) = send_json(&app, Method::GET, "/api/v1/guidance/home", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["insurance_type"], "Home");
        assert_eq!(body["context_label"], "Home Insurance Claim Guidance");
        assert_eq!(body["guidance"]["next_steps"].as_array().unwrap().len(), 6);

        let (status, _) = send_json(&app, Method::GET, "/api/v1/guidance/travel", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_narrative() {
        let app = router_with(FixedClassifier::irrelevant());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/v1/guidance/Health/narrative",
            Some(json!({ "description": "Emergency admission" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["narrative"]
            .as_str()
            .unwrap()
            .starts_with("🚨 Emergency medical situation."));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_endpoint() {
        let app = router_with(FixedClassifier::irrelevant());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/v1/claims/validate",
            Some(json!({
                "insurance_type": "Auto",
                "policy_number": "12345abc",
                "description": "accident"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "invalid_policy_format");
        assert_eq!(body["approved"], false);
    }

    #[tokio::test]
    async fn test_validate_missing_fields_is_an_outcome() {
        let app = router_with(FixedClassifier::irrelevant());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/v1/claims/validate",
            Some(json!({ "insurance_type": "Auto" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "missing_fields");
    }

    #[tokio::test]
    async fn test_validate_oversized_input() {
        let app = router_with(FixedClassifier::irrelevant());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/v1/claims/validate",
            Some(json!({
                "insurance_type": "Auto",
                "policy_number": "1".repeat(100),
                "description": "accident"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }
}

// ============================================================================
// Wizard Tests
// ============================================================================

mod wizard_tests {
    use super::*;

    async fn start(app: &Router) -> String {
        let (status, body) = send_json(app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["step"], "basic_info");
        body["id"].as_str().unwrap().to_string()
    }

    async fn upload(
        app: &Router,
        id: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("/api/v1/sessions/{id}/documents?file_name={file_name}"))
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(bytes))
            .unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_full_claim_submission() {
        let app = router_with(FixedClassifier::favoring("sports car"));
        let id = start(&app).await;

        let (status, body) = send_json(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/basic-info"),
            Some(json!({
                "name": "Asha Rao",
                "policy_number": "10001",
                "insurance_type": "Auto"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "claim_details");
        assert_eq!(body["progress"], 0.5);

        let (status, _) = send_json(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/details"),
            Some(json!({ "description": DescriptionFixtures::approved(InsuranceType::Auto) })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = upload(&app, &id, "front.png", "image/png", png_bytes(32, 32)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["documents"], 1);

        let (status, _) = upload(&app, &id, "notes.txt", "text/plain", b"hello".to_vec()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/documents/complete"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "review");

        let (status, body) =
            send_json(&app, Method::POST, &format!("/api/v1/sessions/{id}/submit"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["record"]["status"],
            "✅ Auto claim APPROVED. High severity incident confirmed."
        );
        assert_eq!(body["assessments"].as_array().unwrap().len(), 1);
        assert!(body["assessments"][0]["assessment"]["estimate"].is_object());

        let (status, body) = send_json(&app, Method::GET, "/api/v1/claims/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "total": 1, "approved": 1 }));

        let (status, _) =
            send_json(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_step_errors() {
        let app = router_with(FixedClassifier::irrelevant());
        let id = start(&app).await;

        let (status, body) = send_json(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/basic-info"),
            Some(json!({ "name": "", "policy_number": "10001", "insurance_type": "Auto" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Please fill in all required fields");

        let (status, _) = send_json(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/details"),
            Some(json!({ "description": "accident" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) =
            send_json(&app, Method::POST, &format!("/api/v1/sessions/{id}/submit"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) =
            send_json(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "basic_info");
    }

    #[tokio::test]
    async fn test_back_returns_to_previous_step() {
        let app = router_with(FixedClassifier::irrelevant());
        let id = start(&app).await;

        send_json(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/basic-info"),
            Some(json!({
                "name": "Kavya Nair",
                "policy_number": "10003",
                "insurance_type": "health"
            })),
        )
        .await;

        let (status, body) =
            send_json(&app, Method::POST, &format!("/api/v1/sessions/{id}/back"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "basic_info");
        assert_eq!(body["summary"]["name"], "Kavya Nair");
    }

    #[tokio::test]
    async fn test_abandon_session() {
        let app = router_with(FixedClassifier::irrelevant());
        let id = start(&app).await;

        let (status, _) =
            send_json(&app, Method::DELETE, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) =
            send_json(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send_json(&app, Method::DELETE, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_sessions() {
        let app = router_with(FixedClassifier::irrelevant());

        let (status, _) = send_json(&app, Method::GET, "/api/v1/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send_json(
            &app,
            Method::GET,
            "/api/v1/sessions/SES-00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Assessment and History Tests
// ============================================================================

mod assessment_and_history_tests {
    use super::*;

    #[tokio::test]
    async fn test_assess_irrelevant_image() {
        let app = router_with(FixedClassifier::irrelevant());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/assessments?insurance_type=Home")
            .header(header::CONTENT_TYPE, "image/png")
            .body(Body::from(png_bytes(16, 16)))
            .unwrap();

        let (status, bytes) = send(&app, request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "⚠️ Image doesn't match the insurance type. Please upload a relevant image."
        );
        assert_eq!(body["debug_lines"].as_array().unwrap().len(), 5);
        assert!(body["estimate"].is_null());
    }

    #[tokio::test]
    async fn test_assess_garbage_bytes() {
        let app = router_with(FixedClassifier::irrelevant());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/assessments?insurance_type=Auto")
            .body(Body::from("definitely not a png"))
            .unwrap();

        let (status, bytes) = send(&app, request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("⚠️ Error processing image: "));
    }

    #[tokio::test]
    async fn test_assess_unknown_type() {
        let app = router_with(FixedClassifier::irrelevant());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/assessments?insurance_type=Pet")
            .body(Body::from(png_bytes(8, 8)))
            .unwrap();

        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_and_reset_history() {
        let app = router_with(FixedClassifier::irrelevant());

        let request = Request::builder()
            .uri("/api/v1/claims/export")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"timestamp,name,policy_number"));

        let (status, body) = send_json(&app, Method::DELETE, "/api/v1/claims", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cleared"], 0);

        let (status, body) = send_json(&app, Method::GET, "/api/v1/claims", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_import_replaces_history() {
        let app = router_with(FixedClassifier::irrelevant());
        let csv = "timestamp,name,policy_number,insurance_type,description,status,ai_guidance,document_count\n\
                   2024-03-15T10:30:00Z,Asha Rao,10001,Auto,\"Major collision, front destroyed\",\
                   ✅ Auto claim APPROVED. High severity incident confirmed.,\"line one\nline two\",2\n";
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/claims/import")
            .header(header::CONTENT_TYPE, "text/csv")
            .body(Body::from(csv))
            .unwrap();

        let (status, bytes) = send(&app, request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["imported"], 1);

        let (_, body) = send_json(&app, Method::GET, "/api/v1/claims/stats", None).await;
        assert_eq!(body, json!({ "total": 1, "approved": 1 }));

        let (_, body) = send_json(&app, Method::GET, "/api/v1/claims", None).await;
        assert_eq!(body[0]["description"], "Major collision, front destroyed");
        assert_eq!(body[0]["ai_guidance"], "line one\nline two");
    }

    #[tokio::test]
    async fn test_malformed_import_is_rejected() {
        let app = router_with(FixedClassifier::irrelevant());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/claims/import")
            .body(Body::from("timestamp,name\nyesterday,Asha\n"))
            .unwrap();

        let (status, bytes) = send(&app, request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let app = router_with(FixedClassifier::irrelevant());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }
}
