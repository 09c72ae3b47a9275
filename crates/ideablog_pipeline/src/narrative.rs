//! Brain dump to connected narrative.

use crate::extract::extract_sections;
use crate::memory::{SessionMemory, write_json};
use crate::prompts::{processing_prompt, refinement_prompt};
use chrono::{DateTime, Local};
use ideablog_core::{GenerateRequest, GenerationConfig, InteractionRecord, ParsedSections};
use ideablog_error::{IdeaBlogResult, PipelineError, PipelineErrorKind};
use ideablog_interface::IdeaBlogDriver;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// Snapshot written by [`NarrativeProcessor::export`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeExport {
    /// Current narrative, empty before the first successful call
    pub connected_narrative: String,
    /// Current growth points, empty before the first successful call
    pub growth_points: String,
    /// Export time
    pub timestamp: DateTime<Local>,
}

/// Expands brain dumps into narratives and refines them.
///
/// Retains the narrative and growth points of the last successful call.
/// A failed call leaves both untouched.
#[derive(Debug)]
pub struct NarrativeProcessor<D> {
    driver: D,
    config: GenerationConfig,
    memory: SessionMemory<InteractionRecord>,
    current_narrative: Option<String>,
    current_growth_points: Option<String>,
}

impl<D: IdeaBlogDriver> NarrativeProcessor<D> {
    /// Create a processor issuing requests with `config`.
    pub fn new(driver: D, config: GenerationConfig) -> Self {
        Self {
            driver,
            config,
            memory: SessionMemory::new("interactions"),
            current_narrative: None,
            current_growth_points: None,
        }
    }

    /// Expand a brain dump into the three narrative sections.
    #[instrument(skip(self, brain_dump), fields(model = %self.config.model_name(), input_len = brain_dump.len()))]
    pub async fn process(&mut self, brain_dump: &str) -> IdeaBlogResult<ParsedSections> {
        let prompt = processing_prompt(brain_dump);
        self.complete(prompt).await
    }

    /// Evolve the current narrative toward `refinement_request`.
    ///
    /// # Errors
    ///
    /// Fails with "no content to refine" before the first successful
    /// [`process`](Self::process), without calling the model.
    #[instrument(skip(self, refinement_request), fields(model = %self.config.model_name(), input_len = refinement_request.len()))]
    pub async fn refine(&mut self, refinement_request: &str) -> IdeaBlogResult<ParsedSections> {
        let current = self.current_narrative.as_deref().ok_or_else(|| {
            tracing::warn!("Refinement requested before any narrative exists");
            PipelineError::new(PipelineErrorKind::NoContentToRefine)
        })?;
        let prompt = refinement_prompt(current, refinement_request);
        self.complete(prompt).await
    }

    async fn complete(&mut self, prompt: String) -> IdeaBlogResult<ParsedSections> {
        tracing::debug!(prompt_len = prompt.len(), "Sending narrative prompt");
        let request = GenerateRequest::prompt(&self.config, prompt);
        let response = self.driver.generate(&request).await?;
        tracing::debug!(response_len = response.text.len(), "Received narrative response");

        let sections = extract_sections(&response.text)?;

        self.memory.record(InteractionRecord::now(response.text));
        self.current_narrative = Some(sections.connected_narrative.clone());
        self.current_growth_points = Some(sections.growth_points.clone());
        tracing::info!(interactions = self.memory.len(), "Narrative updated");

        Ok(sections)
    }

    /// Narrative from the last successful call.
    pub fn current_narrative(&self) -> Option<&str> {
        self.current_narrative.as_deref()
    }

    /// Growth points from the last successful call.
    pub fn current_growth_points(&self) -> Option<&str> {
        self.current_growth_points.as_deref()
    }

    /// Raw responses of every successful call.
    pub fn memory(&self) -> &SessionMemory<InteractionRecord> {
        &self.memory
    }

    /// Generation settings.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Current narrative and growth points, stamped now.
    pub fn snapshot(&self) -> NarrativeExport {
        NarrativeExport {
            connected_narrative: self.current_narrative.clone().unwrap_or_default(),
            growth_points: self.current_growth_points.clone().unwrap_or_default(),
            timestamp: Local::now(),
        }
    }

    /// Write `{connected_narrative, growth_points, timestamp}` to `path`.
    #[instrument(skip(self))]
    pub fn export(&self, path: &Path) -> IdeaBlogResult<()> {
        write_json(path, &self.snapshot())
    }

    /// Write the interaction log to `path`.
    pub fn export_history(&self, path: &Path) -> IdeaBlogResult<()> {
        self.memory.export(path)
    }

    /// The interaction log as numbered, timestamped blocks.
    ///
    /// ```text
    /// <interaction timestamp="...">
    ///     <response1>
    ///     ...
    ///     </response1>
    /// </interaction>
    /// ```
    pub fn memory_transcript(&self) -> String {
        self.memory
            .history()
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let k = idx + 1;
                format!(
                    "\n<interaction timestamp=\"{}\">\n    <response{k}>\n    {}\n    </response{k}>\n</interaction>\n",
                    record.timestamp.to_rfc3339(),
                    record.raw_response,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
