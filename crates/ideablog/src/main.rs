//! ideablog CLI binary.
//!
//! - `serve` runs the HTTP relay
//! - `think` expands and refines an idea in the terminal
//! - `blog` styles a draft read from stdin

use clap::Parser;
use ideablog::IdeaBlogConfig;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, run_blog, run_serve, run_think};

    // GEMINI_API_KEY may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    #[cfg(feature = "observability")]
    let provider = ideablog::observability::init_observability(
        ideablog::observability::ObservabilityConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize observability: {}", e))?;

    #[cfg(not(feature = "observability"))]
    ideablog::logging::init_logging(cli.verbose, cli.json_logs)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = IdeaBlogConfig::load_with(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Serve { host, port } => run_serve(config, host, port).await.map_err(Into::into),
        Commands::Think { output, history } => run_think(config, output, history).await,
        Commands::Blog { history } => run_blog(config, history).await,
    };

    #[cfg(feature = "observability")]
    ideablog::observability::shutdown_observability(provider);

    result
}
