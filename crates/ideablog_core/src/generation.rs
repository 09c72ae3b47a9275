//! Generation parameters for one text-completion capability.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Model identifier and sampling parameters for a completion call.
///
/// Unset sampling fields are left to the provider's defaults.
///
/// # Examples
///
/// ```
/// use ideablog_core::GenerationConfig;
///
/// let style = GenerationConfig::builder()
///     .model_name("gemini-exp-1206")
///     .temperature(0.7)
///     .top_p(0.95)
///     .top_k(64)
///     .max_output_tokens(8192)
///     .response_mime_type("text/plain")
///     .build()
///     .unwrap();
///
/// assert_eq!(style.model_name(), "gemini-exp-1206");
/// assert_eq!(*style.top_k(), Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct GenerationConfig {
    /// Target model identifier
    #[builder(setter(into))]
    model_name: String,

    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Nucleus-sampling threshold
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,

    /// Top-k sampling
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,

    /// Maximum output length in tokens
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,

    /// Requested MIME type of the completion
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

impl GenerationConfig {
    /// Creates a new builder.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Config with only a model identifier.
    pub fn for_model(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: None,
            top_p: None,
            top_k: None,
            max_output_tokens: None,
            response_mime_type: None,
        }
    }

    /// Defaults used by the narrative processor.
    pub fn narrative_default() -> Self {
        Self::for_model("gemini-2.0-flash-thinking-exp-01-21")
    }

    /// Defaults used by the style transformer.
    pub fn style_default() -> Self {
        Self {
            model_name: "gemini-exp-1206".to_string(),
            temperature: Some(0.7),
            top_p: Some(0.95),
            top_k: Some(64),
            max_output_tokens: Some(8192),
            response_mime_type: Some("text/plain".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_model_name() {
        assert!(GenerationConfig::builder().temperature(0.2).build().is_err());
    }

    #[test]
    fn builder_accepts_plain_integer_literals() {
        let config = GenerationConfig::builder()
            .model_name("m")
            .top_k(64)
            .max_output_tokens(8192)
            .temperature(0.7)
            .build()
            .unwrap();
        assert_eq!(*config.top_k(), Some(64u32));
        assert_eq!(*config.max_output_tokens(), Some(8192u32));
        assert_eq!(*config.temperature(), Some(0.7f32));
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let json = serde_json::to_value(GenerationConfig::for_model("m")).unwrap();
        assert_eq!(json, serde_json::json!({"model_name": "m"}));
    }
}
