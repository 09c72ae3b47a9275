//! Error types for the ideablog pipeline.
//!
//! Every error family follows the same shape:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that raised it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! All families convert into [`IdeaBlogError`], the single error type returned
//! by public operations.
//!
//! # Examples
//!
//! ```
//! use ideablog_error::{IdeaBlogResult, PipelineError, PipelineErrorKind};
//!
//! fn finalize() -> IdeaBlogResult<String> {
//!     Err(PipelineError::new(PipelineErrorKind::NoContentToFinalize))?
//! }
//!
//! let err = finalize().unwrap_err();
//! assert!(err.to_string().contains("No content to finalize"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod pipeline;
mod server;
mod storage;

pub use config::ConfigError;
pub use error::{ErrorCategory, IdeaBlogError, IdeaBlogErrorKind, IdeaBlogResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
