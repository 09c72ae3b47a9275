//! Route handlers.

use crate::{ApiError, AppState};
use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use chrono::{DateTime, Local};
use ideablog_core::ParsedSections;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::instrument;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Body of `POST /process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    /// Brain dump to expand
    pub idea: String,
}

/// Body of `POST /refine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementRequest {
    /// What to develop next
    pub refinement: String,
}

/// Response of `POST /finalize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeResponse {
    /// Styled blog post
    pub blog_post: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: String,
    /// Time of the check
    pub timestamp: DateTime<Local>,
}

/// Build the relay router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/process", post(process_idea))
        .route("/refine", post(refine_content))
        .route("/finalize", post(finalize_to_blog))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Local::now(),
    })
}

#[instrument(skip_all, fields(idea_len = request.idea.len()))]
async fn process_idea(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<ParsedSections>, ApiError> {
    let mut pipeline = state.pipeline.lock().await;
    let sections = pipeline.process_initial_idea(&request.idea).await?;
    Ok(Json(sections))
}

#[instrument(skip_all, fields(refinement_len = request.refinement.len()))]
async fn refine_content(
    State(state): State<AppState>,
    Json(request): Json<RefinementRequest>,
) -> Result<Json<ParsedSections>, ApiError> {
    let mut pipeline = state.pipeline.lock().await;
    let sections = pipeline.refine_content(&request.refinement).await?;
    Ok(Json(sections))
}

#[instrument(skip_all)]
async fn finalize_to_blog(State(state): State<AppState>) -> Result<Json<FinalizeResponse>, ApiError> {
    let mut pipeline = state.pipeline.lock().await;
    let blog_post = pipeline.finalize_to_blog().await?;
    Ok(Json(FinalizeResponse { blog_post }))
}
