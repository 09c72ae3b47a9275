//! `blog` command handler.

use ideablog::session::blog_session;
use ideablog::{GeminiClient, IdeaBlogConfig, StyleTransformer};
use std::path::PathBuf;

/// Style one draft read from stdin.
pub async fn run_blog(config: IdeaBlogConfig, history: Option<PathBuf>) -> anyhow::Result<()> {
    let client = GeminiClient::from_env(&config.gemini, config.style.model_name())?;
    let mut transformer = StyleTransformer::new(client, config.style.clone());

    let history_path = history.unwrap_or(config.export.blog_history_file);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    blog_session(&mut transformer, stdin.lock(), &mut stdout, &history_path).await?;
    Ok(())
}
