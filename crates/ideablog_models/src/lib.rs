//! Text-generation drivers for the ideablog content pipeline.
//!
//! Only Google Gemini is supported. [`GeminiClient`] talks to the
//! `generateContent` REST endpoint and implements
//! [`IdeaBlogDriver`](ideablog_interface::IdeaBlogDriver).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Content, GeminiClient, GeminiRequest, GeminiResponse, GeminiResult, GenerationParams, Part,
};
