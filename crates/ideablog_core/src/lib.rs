//! Core data types for the ideablog content pipeline.
//!
//! This crate holds the plain data shared by every other crate: conversation
//! turns, generation requests, parsed narrative sections, interaction records
//! and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod generation;
mod message;
mod record;
mod request;
mod role;
mod sections;

pub use config::{ExportSettings, GeminiSettings, IdeaBlogConfig, ServerSettings};
pub use generation::{GenerationConfig, GenerationConfigBuilder};
pub use message::Message;
pub use record::{DraftRecord, InteractionRecord};
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use sections::ParsedSections;
