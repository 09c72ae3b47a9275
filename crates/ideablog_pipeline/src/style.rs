//! Draft to styled blog post.

use crate::extract::{STYLED_DRAFT, extract};
use crate::memory::SessionMemory;
use crate::prompts::STYLE_INSTRUCTION;
use ideablog_core::{DraftRecord, GenerateRequest, GenerationConfig, Message};
use ideablog_error::IdeaBlogResult;
use ideablog_interface::IdeaBlogDriver;
use std::path::Path;
use tracing::instrument;

const DRAFT_OPEN: &str = "<draft>";

/// Wrap `draft` in `<draft>` tags unless it already starts with one.
///
/// # Examples
///
/// ```
/// use ideablog_pipeline::wrap_draft;
///
/// assert_eq!(wrap_draft("hello"), "<draft>hello</draft>");
/// assert_eq!(wrap_draft("<draft>hello</draft>"), "<draft>hello</draft>");
/// ```
pub fn wrap_draft(draft: &str) -> String {
    if draft.trim_start().starts_with(DRAFT_OPEN) {
        draft.to_string()
    } else {
        format!("<draft>{}</draft>", draft)
    }
}

/// Rewrites drafts as blog posts in a single running conversation.
///
/// The conversation opens with the style instruction as a user turn. Every
/// successful call appends the draft and the model's raw reply, so later
/// conversions see all earlier exchanges.
#[derive(Debug)]
pub struct StyleTransformer<D> {
    driver: D,
    config: GenerationConfig,
    context: Vec<Message>,
    memory: SessionMemory<DraftRecord>,
}

impl<D: IdeaBlogDriver> StyleTransformer<D> {
    /// Create a transformer using the standard style instruction.
    pub fn new(driver: D, config: GenerationConfig) -> Self {
        Self::with_instruction(driver, config, STYLE_INSTRUCTION)
    }

    /// Create a transformer with a custom opening instruction.
    pub fn with_instruction(
        driver: D,
        config: GenerationConfig,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            config,
            context: vec![Message::user(instruction)],
            memory: SessionMemory::new("drafts"),
        }
    }

    /// Convert a draft into a styled blog post.
    #[instrument(skip(self, draft), fields(model = %self.config.model_name(), input_len = draft.len(), turns = self.context.len()))]
    pub async fn convert(&mut self, draft: &str) -> IdeaBlogResult<String> {
        let wrapped = wrap_draft(draft);
        let turn = Message::user(wrapped.clone());

        let mut messages = self.context.clone();
        messages.push(turn.clone());
        let request = GenerateRequest::from_config(&self.config, messages);

        let response = self.driver.generate(&request).await?;
        tracing::debug!(response_len = response.text.len(), "Received style response");

        self.context.push(turn);
        self.context.push(Message::assistant(response.text.clone()));

        let styled = extract(&response.text, STYLED_DRAFT)?;
        self.memory.record(DraftRecord::now(wrapped, styled.clone()));
        tracing::info!(conversions = self.memory.len(), "Draft styled");

        Ok(styled)
    }

    /// Conversation turns so far, instruction first.
    pub fn context(&self) -> &[Message] {
        &self.context
    }

    /// Every successful conversion, oldest first.
    pub fn history(&self) -> &[DraftRecord] {
        self.memory.history()
    }

    /// The conversion log.
    pub fn memory(&self) -> &SessionMemory<DraftRecord> {
        &self.memory
    }

    /// Generation settings.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Write `{"drafts": [...]}` to `path`.
    pub fn export_history(&self, path: &Path) -> IdeaBlogResult<()> {
        self.memory.export(path)
    }
}
