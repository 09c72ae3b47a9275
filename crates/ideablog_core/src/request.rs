//! Request and response types for one completion call.

use crate::{GenerationConfig, Message};
use serde::{Deserialize, Serialize};

/// A completion request: an ordered conversation plus sampling parameters.
///
/// # Examples
///
/// ```
/// use ideablog_core::{GenerateRequest, GenerationConfig, Message};
///
/// let config = GenerationConfig::style_default();
/// let request = GenerateRequest::from_config(&config, vec![Message::user("Hello!")]);
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.top_k, Some(64));
/// assert_eq!(request.model.as_deref(), Some("gemini-exp-1206"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Model identifier to use
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Nucleus-sampling threshold
    pub top_p: Option<f32>,
    /// Top-k sampling
    pub top_k: Option<u32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Requested MIME type of the completion
    pub response_mime_type: Option<String>,
}

impl GenerateRequest {
    /// Build a request carrying every parameter of `config`.
    pub fn from_config(config: &GenerationConfig, messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: Some(config.model_name().clone()),
            temperature: *config.temperature(),
            top_p: *config.top_p(),
            top_k: *config.top_k(),
            max_tokens: *config.max_output_tokens(),
            response_mime_type: config.response_mime_type().clone(),
        }
    }

    /// Single-turn user prompt.
    pub fn prompt(config: &GenerationConfig, prompt: impl Into<String>) -> Self {
        Self::from_config(config, vec![Message::user(prompt)])
    }
}

/// The text completion returned by a model.
///
/// # Examples
///
/// ```
/// use ideablog_core::GenerateResponse;
///
/// let response = GenerateResponse::new("<styled_draft>S</styled_draft>");
/// assert!(response.text.contains("styled_draft"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}

impl GenerateResponse {
    /// Wrap a completion string.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
