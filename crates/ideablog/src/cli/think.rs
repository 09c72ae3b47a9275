//! `think` command handler.

use ideablog::session::{ThinkOutcome, think_session};
use ideablog::{GeminiClient, IdeaBlogConfig, NarrativeProcessor};
use std::path::PathBuf;

/// Interactive narrative session on stdin/stdout.
pub async fn run_think(
    config: IdeaBlogConfig,
    output: Option<PathBuf>,
    history: Option<PathBuf>,
) -> anyhow::Result<()> {
    let client = GeminiClient::from_env(&config.gemini, config.narrative.model_name())?;
    let mut processor = NarrativeProcessor::new(client, config.narrative.clone());

    let export_path = output.unwrap_or(config.export.narrative_file);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let outcome = think_session(&mut processor, stdin.lock(), &mut stdout, &export_path).await?;
    if outcome == ThinkOutcome::Abandoned {
        tracing::info!("Session ended without export");
    }

    if let Some(path) = history {
        processor.export_history(&path)?;
        println!("Interaction history exported to {}", path.display());
    }
    Ok(())
}
