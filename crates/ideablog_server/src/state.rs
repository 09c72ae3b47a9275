//! Shared relay state.

use ideablog_interface::IdeaBlogDriver;
use ideablog_pipeline::PipelineOrchestrator;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Driver type held by the relay.
pub type SharedDriver = Arc<dyn IdeaBlogDriver>;

/// The single orchestrator every request works on.
pub type SharedPipeline = Arc<Mutex<PipelineOrchestrator<SharedDriver>>>;

/// Application state shared across handlers.
///
/// All requests use one orchestrator. The mutex serializes them, so a
/// request waits while another is talking to the model.
#[derive(Clone)]
pub struct AppState {
    /// The shared pipeline
    pub pipeline: SharedPipeline,
}

impl AppState {
    /// Wrap an orchestrator for sharing.
    pub fn new(pipeline: PipelineOrchestrator<SharedDriver>) -> Self {
        Self {
            pipeline: Arc::new(Mutex::new(pipeline)),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
