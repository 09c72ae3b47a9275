//! Google Gemini REST client.

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{Content, GeminiRequest, GeminiResponse, GenerationParams, Part};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, ideablog_error::GeminiError>;
