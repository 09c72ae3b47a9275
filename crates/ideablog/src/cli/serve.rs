//! `serve` command handler.

use ideablog::{
    AppState, GeminiClient, IdeaBlogConfig, IdeaBlogResult, PipelineOrchestrator, SharedDriver,
    serve, shutdown_signal,
};
use std::sync::Arc;

/// Run the relay until Ctrl-C.
pub async fn run_serve(
    mut config: IdeaBlogConfig,
    host: Option<String>,
    port: Option<u16>,
) -> IdeaBlogResult<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let client = GeminiClient::from_env(&config.gemini, config.narrative.model_name())?;
    let driver: SharedDriver = Arc::new(client);
    let pipeline = PipelineOrchestrator::from_config(driver, &config);

    tracing::info!(
        narrative_model = %config.narrative.model_name(),
        style_model = %config.style.model_name(),
        "Starting relay. Press Ctrl+C to stop."
    );

    serve(AppState::new(pipeline), &config.server.address(), shutdown_signal()).await
}
