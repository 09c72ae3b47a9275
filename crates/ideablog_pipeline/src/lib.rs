//! The ideablog content pipeline.
//!
//! Raw idea, then expanded narrative, then styled blog post. Each stage is
//! one completion call against an [`IdeaBlogDriver`](ideablog_interface::IdeaBlogDriver):
//!
//! - [`NarrativeProcessor`] turns a brain dump into [`ParsedSections`] and
//!   refines the current narrative on request.
//! - [`StyleTransformer`] rewrites a draft as a blog post, carrying its
//!   conversation across calls.
//! - [`PipelineOrchestrator`] holds the latest result and exposes the three
//!   user-facing operations.
//!
//! Sections are pulled out of model output by the tag extractor in
//! [`extract`], and every successful call is logged in a [`SessionMemory`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod memory;
mod narrative;
mod orchestrator;
pub mod prompts;
mod style;

pub use extract::{extract, extract_sections};
pub use memory::SessionMemory;
pub use narrative::{NarrativeExport, NarrativeProcessor};
pub use orchestrator::{PipelineOrchestrator, PipelineState};
pub use style::{StyleTransformer, wrap_draft};

pub use ideablog_core::ParsedSections;
