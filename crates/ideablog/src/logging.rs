//! Console logging setup.

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::MakeWriter,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// `fmt` layer writing to `writer`, as text or JSON lines.
pub fn console_layer<S, W>(json: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(writer)
            .boxed()
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Log lines go to stderr so stdout carries only session output.
/// `verbose` raises the fallback level to debug. `json` switches to
/// structured JSON lines.
pub fn init_logging(verbose: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer(json, std::io::stderr))
        .try_init()?;

    Ok(())
}
