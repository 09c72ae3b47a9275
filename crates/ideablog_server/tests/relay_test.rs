//! Relay routes exercised in-process.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ideablog_core::{GenerateRequest, GenerateResponse, IdeaBlogConfig};
use ideablog_error::{GeminiError, GeminiErrorKind, IdeaBlogResult};
use ideablog_interface::IdeaBlogDriver;
use ideablog_pipeline::PipelineOrchestrator;
use ideablog_server::{AppState, SharedDriver, create_router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Answers narrative prompts and style prompts with fixed tagged text.
struct StageDriver {
    narrative_reply: String,
    style_reply: String,
    fail: bool,
    calls: AtomicUsize,
}

impl StageDriver {
    fn new(narrative_reply: &str, style_reply: &str) -> Self {
        Self {
            narrative_reply: narrative_reply.to_string(),
            style_reply: style_reply.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("", "")
        }
    }
}

#[async_trait]
impl IdeaBlogDriver for StageDriver {
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 503,
                message: "model overloaded".to_string(),
            })
            .into());
        }
        let last = req.messages.last().map(|m| m.content.as_str()).unwrap_or_default();
        let text = if last.starts_with("<draft>") {
            &self.style_reply
        } else {
            &self.narrative_reply
        };
        Ok(GenerateResponse::new(text.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "stage"
    }

    fn model_name(&self) -> &str {
        "stage-model"
    }
}

const NARRATIVE: &str = "<connected_narrative>N</connected_narrative>\
                         <growth_points>G</growth_points>\
                         <ai_contributions>C</ai_contributions>";

fn app_with(driver: StageDriver) -> Router {
    let driver: SharedDriver = Arc::new(driver);
    let pipeline = PipelineOrchestrator::from_config(driver, &IdeaBlogConfig::default());
    create_router(AppState::new(pipeline))
}

fn app() -> Router {
    app_with(StageDriver::new(NARRATIVE, "<styled_draft>S</styled_draft>"))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn process_refine_finalize_flow() {
    let app = app();

    let (status, body) = send(&app, post_json("/process", json!({"idea": "hello"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"connected_narrative": "N", "growth_points": "G", "ai_contributions": "C"})
    );

    let (status, body) = send(&app, post_json("/refine", json!({"refinement": "more"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connected_narrative"], "N");

    let (status, body) = send(&app, post_empty("/finalize")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"blog_post": "S"}));
}

#[tokio::test]
async fn refine_and_finalize_before_process_conflict() {
    let app = app();

    let (status, body) = send(&app, post_json("/refine", json!({"refinement": "x"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"detail": "No content to refine"}));

    let (status, body) = send(&app, post_empty("/finalize")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"detail": "No content to finalize"}));
}

#[tokio::test]
async fn malformed_model_output_is_bad_gateway() {
    let app = app_with(StageDriver::new("no sections here", "<styled_draft>S</styled_draft>"));

    let (status, body) = send(&app, post_json("/process", json!({"idea": "hello"}))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("connected_narrative"));

    let (status, _) = send(&app, post_empty("/finalize")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn remote_failure_is_bad_gateway() {
    let app = app_with(StageDriver::failing());

    let (status, body) = send(&app, post_json("/process", json!({"idea": "hello"}))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("model overloaded"));
}

#[tokio::test]
async fn missing_field_is_rejected_before_the_model() {
    let driver = Arc::new(StageDriver::new(NARRATIVE, "<styled_draft>S</styled_draft>"));
    let shared: SharedDriver = driver.clone();
    let app = create_router(AppState::new(PipelineOrchestrator::from_config(
        shared,
        &IdeaBlogConfig::default(),
    )));

    let (status, _) = send(&app, post_json("/process", json!({"text": "hello"}))).await;
    assert!(status.is_client_error());
    assert_eq!(driver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn health_reports_healthy_with_timestamp() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn index_serves_front_end() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Idea to Blog Pipeline"));
    assert!(html.contains("/finalize"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/process")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
