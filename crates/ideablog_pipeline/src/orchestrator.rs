//! Pipeline orchestration.

use crate::{NarrativeProcessor, StyleTransformer};
use ideablog_core::{IdeaBlogConfig, ParsedSections};
use ideablog_error::{IdeaBlogResult, PipelineError, PipelineErrorKind};
use ideablog_interface::IdeaBlogDriver;
use std::path::Path;
use tracing::instrument;

/// What the orchestrator currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// No idea processed yet
    #[default]
    Empty,
    /// Sections from the last successful process or refine
    HasNarrative(ParsedSections),
}

impl PipelineState {
    /// Current sections, if any.
    pub fn sections(&self) -> Option<&ParsedSections> {
        match self {
            PipelineState::Empty => None,
            PipelineState::HasNarrative(sections) => Some(sections),
        }
    }
}

/// Drives an idea through narrative expansion, refinement and styling.
///
/// # Example
///
/// ```no_run
/// use ideablog_core::IdeaBlogConfig;
/// use ideablog_models::GeminiClient;
/// use ideablog_pipeline::PipelineOrchestrator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IdeaBlogConfig::load()?;
/// let client = GeminiClient::from_env(&config.gemini, config.narrative.model_name())?;
/// let mut pipeline = PipelineOrchestrator::from_config(client, &config);
///
/// pipeline.process_initial_idea("Remote work changes city planning").await?;
/// pipeline.refine_content("Focus on transit").await?;
/// let post = pipeline.finalize_to_blog().await?;
/// println!("{post}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PipelineOrchestrator<D> {
    narrative: NarrativeProcessor<D>,
    style: StyleTransformer<D>,
    state: PipelineState,
}

impl<D: IdeaBlogDriver> PipelineOrchestrator<D> {
    /// Assemble an orchestrator from its two stages.
    pub fn new(narrative: NarrativeProcessor<D>, style: StyleTransformer<D>) -> Self {
        Self {
            narrative,
            style,
            state: PipelineState::Empty,
        }
    }

    /// Both stages sharing one driver, configured from `config`.
    pub fn from_config(driver: D, config: &IdeaBlogConfig) -> Self
    where
        D: Clone,
    {
        Self::new(
            NarrativeProcessor::new(driver.clone(), config.narrative.clone()),
            StyleTransformer::new(driver, config.style.clone()),
        )
    }

    /// Expand a fresh idea, replacing any current narrative.
    #[instrument(skip(self, idea), fields(idea_len = idea.len()))]
    pub async fn process_initial_idea(&mut self, idea: &str) -> IdeaBlogResult<ParsedSections> {
        let sections = self.narrative.process(idea).await?;
        self.state = PipelineState::HasNarrative(sections.clone());
        tracing::info!("Pipeline holds a narrative");
        Ok(sections)
    }

    /// Refine the current narrative.
    #[instrument(skip(self, request), fields(request_len = request.len()))]
    pub async fn refine_content(&mut self, request: &str) -> IdeaBlogResult<ParsedSections> {
        if self.state == PipelineState::Empty {
            tracing::warn!("Refine requested with no narrative");
            return Err(PipelineError::new(PipelineErrorKind::NoContentToRefine).into());
        }
        let sections = self.narrative.refine(request).await?;
        self.state = PipelineState::HasNarrative(sections.clone());
        Ok(sections)
    }

    /// Style the current narrative as a blog post. State is unchanged.
    #[instrument(skip(self))]
    pub async fn finalize_to_blog(&mut self) -> IdeaBlogResult<String> {
        let narrative = match &self.state {
            PipelineState::HasNarrative(sections) => sections.connected_narrative.clone(),
            PipelineState::Empty => {
                tracing::warn!("Finalize requested with no narrative");
                return Err(PipelineError::new(PipelineErrorKind::NoContentToFinalize).into());
            }
        };
        self.style.convert(&narrative).await
    }

    /// Current state.
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// The narrative stage.
    pub fn narrative_processor(&self) -> &NarrativeProcessor<D> {
        &self.narrative
    }

    /// The style stage.
    pub fn style_transformer(&self) -> &StyleTransformer<D> {
        &self.style
    }

    /// Write the current narrative snapshot to `path`.
    pub fn export_narrative(&self, path: &Path) -> IdeaBlogResult<()> {
        self.narrative.export(path)
    }

    /// Write the narrative interaction log to `path`.
    pub fn export_narrative_history(&self, path: &Path) -> IdeaBlogResult<()> {
        self.narrative.export_history(path)
    }

    /// Write the blog conversion history to `path`.
    pub fn export_blog_history(&self, path: &Path) -> IdeaBlogResult<()> {
        self.style.export_history(path)
    }
}
