//! HTTP relay for the ideablog content pipeline.
//!
//! Exposes one shared [`PipelineOrchestrator`](ideablog_pipeline::PipelineOrchestrator)
//! over HTTP:
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `POST /process` | `{"idea": ...}` | narrative sections |
//! | `POST /refine` | `{"refinement": ...}` | narrative sections |
//! | `POST /finalize` | none | `{"blog_post": ...}` |
//! | `GET /health` | none | `{"status": "healthy", "timestamp": ...}` |
//! | `GET /` | none | browser front end |
//!
//! Failures come back as `{"detail": <message>}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod routes;
mod server;
mod state;

pub use error::ApiError;
pub use routes::{FinalizeResponse, HealthResponse, IdeaRequest, RefinementRequest, create_router};
pub use server::{serve, shutdown_signal};
pub use state::{AppState, SharedDriver, SharedPipeline};
