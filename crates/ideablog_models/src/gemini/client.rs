//! Google Gemini `generateContent` client.
//!
//! # Example
//!
//! ```no_run
//! use ideablog_core::{GenerateRequest, GenerationConfig, GeminiSettings};
//! use ideablog_interface::IdeaBlogDriver;
//! use ideablog_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenerationConfig::style_default();
//! let client = GeminiClient::from_env(&GeminiSettings::default(), config.model_name())?;
//!
//! let request = GenerateRequest::prompt(&config, "Hello!");
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

use super::GeminiResult;
use super::conversion::to_gemini_request;
use super::dto::{ErrorEnvelope, GeminiResponse};
use async_trait::async_trait;
use ideablog_core::{GeminiSettings, GenerateRequest, GenerateResponse};
use ideablog_error::{GeminiError, GeminiErrorKind, IdeaBlogResult};
use ideablog_interface::IdeaBlogDriver;
use std::env;
use tracing::instrument;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// REST client for the Gemini API.
///
/// Requests that name a model use it; otherwise the client's default model
/// is used.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    pub fn from_env(settings: &GeminiSettings, model_name: &str) -> IdeaBlogResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key, settings, model_name))
    }

    /// Create a client with an explicit API key.
    #[instrument(skip(api_key, settings), fields(base_url = %settings.base_url))]
    pub fn new(api_key: impl Into<String>, settings: &GeminiSettings, model_name: &str) -> Self {
        tracing::debug!("Creating Gemini client");
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model_name: model_name.to_string(),
        }
    }

    /// Same credentials and endpoint with a different default model.
    pub fn with_model(&self, model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            ..self.clone()
        }
    }

    /// Endpoint URL for a model.
    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    #[instrument(skip(self, req), fields(model = tracing::field::Empty, messages = req.messages.len()))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model);

        let url = self.endpoint(model);
        let body = to_gemini_request(req);
        tracing::debug!("Sending generateContent request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            tracing::error!(status = status.as_u16(), "Gemini returned error: {}", message);
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GeminiError::new(GeminiErrorKind::Deserialization(e.to_string()))
        })?;

        let text = parsed.text().ok_or_else(|| {
            let reason = parsed.empty_reason();
            tracing::warn!("Gemini returned no text: {}", reason);
            GeminiError::new(GeminiErrorKind::EmptyResponse(reason))
        })?;

        tracing::debug!(chars = text.len(), "generateContent successful");
        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl IdeaBlogDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
