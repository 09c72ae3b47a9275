//! ideablog - raw idea to expanded narrative to styled blog post.
//!
//! Each stage is one call to a hosted Gemini model. A brain dump becomes a
//! connected narrative with growth points, the narrative can be refined as
//! many times as needed, and the result is rewritten as a blog post.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ideablog::{GeminiClient, IdeaBlogConfig, PipelineOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = IdeaBlogConfig::load()?;
//!     let client = GeminiClient::from_env(&config.gemini, config.narrative.model_name())?;
//!     let mut pipeline = PipelineOrchestrator::from_config(client, &config);
//!
//!     let sections = pipeline.process_initial_idea("Cities after remote work").await?;
//!     println!("{}", sections.growth_points);
//!
//!     let post = pipeline.finalize_to_blog().await?;
//!     println!("{post}");
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - bridge tracing spans to OpenTelemetry
//!
//! # Architecture
//!
//! - `ideablog_error` - error types
//! - `ideablog_core` - data types and configuration
//! - `ideablog_interface` - `IdeaBlogDriver` trait
//! - `ideablog_models` - Gemini client
//! - `ideablog_pipeline` - narrative processor, style transformer, orchestrator
//! - `ideablog_server` - HTTP relay
//!
//! This crate re-exports everything for convenience.

pub use ideablog_core::*;
pub use ideablog_error::*;
pub use ideablog_interface::*;
pub use ideablog_models::*;
pub use ideablog_pipeline::*;
pub use ideablog_server::{
    ApiError, AppState, SharedDriver, SharedPipeline, create_router, serve, shutdown_signal,
};

pub mod logging;
pub mod session;

#[cfg(feature = "observability")]
pub mod observability;
