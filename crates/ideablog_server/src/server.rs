//! Listener and serve loop.

use crate::{AppState, create_router};
use ideablog_error::{IdeaBlogResult, ServerError, ServerErrorKind};
use tracing::{info, instrument};

/// Serve the relay on `addr` until `shutdown` resolves.
#[instrument(skip(state, shutdown))]
pub async fn serve<F>(state: AppState, addr: &str, shutdown: F) -> IdeaBlogResult<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", addr, e);
        ServerError::new(ServerErrorKind::Bind(format!("{}: {}", addr, e)))
    })?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Relay stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
    }
}
