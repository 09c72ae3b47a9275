//! Trait definitions for the ideablog text-generation capability.
//!
//! The pipeline stages never talk to a vendor SDK directly. They hold an
//! [`IdeaBlogDriver`] and send it [`GenerateRequest`]s, so tests can swap in a
//! deterministic stub.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::IdeaBlogDriver;

pub use ideablog_core::{GenerateRequest, GenerateResponse};
