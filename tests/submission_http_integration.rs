//! Integration tests for the submission HTTP API.
//!
//! Drives the full router against an in-memory SQLite database with stub
//! document and email ports:
//! 1. Stored submissions come back unchanged from the admin listing
//! 2. The admin listing is guarded by the admin key
//! 3. Invalid payloads are rejected without side effects
//! 4. Coach notification carries the rendered report

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use wheel_of_life::adapters::http::{build_router, RouterOptions, SubmissionAppState};
use wheel_of_life::adapters::sqlite::{self, SqliteSubmissionRepository};
use wheel_of_life::application::CoachNotifier;
use wheel_of_life::ports::{
    ChartAttachment, DocumentRenderer, EmailError, EmailSender, ExportError, OutgoingEmail,
    ScoreReport,
};

const ADMIN_KEY: &str = "integration-key";

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Default)]
struct RecordingDocuments {
    reports: Mutex<Vec<ScoreReport>>,
}

#[async_trait]
impl DocumentRenderer for RecordingDocuments {
    async fn render_pdf(&self, report: &ScoreReport) -> Result<Vec<u8>, ExportError> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(b"%PDF-1.5".to_vec())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

struct TestApp {
    router: Router,
    documents: Arc<RecordingDocuments>,
    mailer: Arc<RecordingMailer>,
}

async fn test_app(db_name: &str) -> TestApp {
    let url = format!("sqlite:file:{}?mode=memory&cache=shared", db_name);
    let pool = sqlite::connect(&url, 1).await.unwrap();
    sqlite::migrate(&pool).await.unwrap();

    let documents = Arc::new(RecordingDocuments::default());
    let mailer = Arc::new(RecordingMailer::default());
    let state = SubmissionAppState::new(
        Arc::new(SqliteSubmissionRepository::new(pool)),
        documents.clone(),
        Some(CoachNotifier::new(mailer.clone(), "coach@example.com")),
        SecretString::new(ADMIN_KEY.to_string()),
    );

    TestApp {
        router: build_router(state, &RouterOptions::default()),
        documents,
        mailer,
    }
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn get(router: &Router, uri: &str, key: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::get(uri);
    if let Some(key) = key {
        request = request.header("x-admin-key", key);
    }
    let response = router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Round trip
// =============================================================================

#[tokio::test]
async fn posted_submission_is_listed_unchanged() {
    let app = test_app("itest_round_trip").await;

    let (status, body) = post(
        &app.router,
        "/api/submissions",
        json!({
            "clientEmail": "ada@example.com",
            "clientName": "Ada",
            "categories": ["A", "B"],
            "values": [3, 7]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let id = body["id"].as_i64().unwrap();

    let (status, rows) = get(&app.router, "/api/submissions", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id);
    assert_eq!(rows[0]["categories"], json!(["A", "B"]));
    assert_eq!(rows[0]["values"], json!([3, 7]));
    assert_eq!(rows[0]["clientEmail"], "ada@example.com");
    assert_eq!(rows[0]["clientName"], "Ada");
    assert!(rows[0]["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn listing_is_newest_first() {
    let app = test_app("itest_newest_first").await;
    for value in [1, 2, 3] {
        let (status, _) = post(
            &app.router,
            "/api/submissions",
            json!({ "categories": ["A"], "values": [value] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, rows) = get(&app.router, "/api/submissions", Some(ADMIN_KEY)).await;
    let values: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["values"][0].as_i64().unwrap())
        .collect();
    assert_eq!(values, vec![3, 2, 1]);
}

#[tokio::test]
async fn unprefixed_routes_share_storage() {
    let app = test_app("itest_unprefixed").await;

    let (status, _) = post(
        &app.router,
        "/submissions",
        json!({ "categories": ["Health"], "values": [6] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, rows) = get(&app.router, "/api/submissions", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);

    let (status, _) = get(&app.router, "/submissions", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Admin key
// =============================================================================

#[tokio::test]
async fn listing_without_correct_key_is_unauthorized() {
    let app = test_app("itest_unauthorized").await;

    for key in [None, Some(""), Some("wrong"), Some("integration-key ")] {
        let (status, body) = get(&app.router, "/api/submissions", key).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "key {:?}", key);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn invalid_payloads_are_rejected_without_side_effects() {
    let app = test_app("itest_invalid").await;

    let payloads = [
        json!({ "categories": ["A", "B"], "values": [1] }),
        json!({ "categories": ["A"], "values": [11] }),
        json!({ "categories": ["A"], "values": [-1] }),
        json!({ "categories": ["A"] }),
        json!({ "values": [1] }),
        json!({ "categories": "A", "values": [1] }),
    ];
    for payload in payloads {
        let (status, body) = post(&app.router, "/api/submissions", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body, json!({ "error": "Invalid payload" }));
    }

    let (_, rows) = get(&app.router, "/api/submissions", Some(ADMIN_KEY)).await;
    assert!(rows.as_array().unwrap().is_empty());
    assert!(app.mailer.sent.lock().unwrap().is_empty());
}

// =============================================================================
// Report and notification
// =============================================================================

#[tokio::test]
async fn coach_receives_report_for_each_submission() {
    let app = test_app("itest_notify").await;

    let (status, _) = post(
        &app.router,
        "/api/submissions",
        json!({
            "clientName": "Ada",
            "categories": ["A", "B"],
            "values": [3, 7],
            "chartImage": "data:image/png;base64,AQID"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let reports = app.documents.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].chart, ChartAttachment::Image(vec![1, 2, 3]));

    let sent = app.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "coach@example.com");
    assert_eq!(sent[0].subject, "New Wheel of Life Submission");
    assert_eq!(sent[0].text, "Client: Ada\nEmail: -\nScores: 3, 7");
    assert_eq!(sent[0].attachments[0].filename, "wheel-of-life.pdf");
    assert_eq!(sent[0].attachments[0].content, b"%PDF-1.5".to_vec());
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app("itest_health").await;
    let (status, body) = get(&app.router, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
