//! Pipeline error types: malformed model output and out-of-order operations.

/// Specific error conditions raised by the content pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// A required tag pair is absent from a model response
    #[display("Missing section: no <{}>...</{}> pair in response", _0, _0)]
    MissingSection(String),
    /// Refinement requested before any idea was processed
    #[display("No content to refine")]
    NoContentToRefine,
    /// Finalization requested before any idea was processed
    #[display("No content to finalize")]
    NoContentToFinalize,
}

impl PipelineErrorKind {
    /// Whether this error means an operation was invoked in the wrong state.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PipelineErrorKind::NoContentToRefine | PipelineErrorKind::NoContentToFinalize
        )
    }
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use ideablog_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::MissingSection("styled_draft".into()));
/// assert!(format!("{}", err).contains("<styled_draft>"));
/// assert!(!err.kind.is_precondition());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
