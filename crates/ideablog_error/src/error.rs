//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, PipelineError, ServerError, StorageError};

/// Every error family the pipeline can surface.
///
/// # Examples
///
/// ```
/// use ideablog_error::{IdeaBlogError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::FileWrite("out.json".into()));
/// let err: IdeaBlogError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum IdeaBlogErrorKind {
    /// Malformed model output or out-of-order pipeline call
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Remote text-generation call failed
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Export I/O failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Relay error
    #[from(ServerError)]
    Server(ServerError),
}

/// Coarse classification used by callers that react to failures uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// A required tag pair was absent from a model response
    #[display("missing-section")]
    MissingSection,
    /// An operation was invoked in the wrong orchestrator state
    #[display("precondition-violation")]
    PreconditionViolation,
    /// The text-generation capability failed
    #[display("remote-call-failure")]
    RemoteCallFailure,
    /// Export I/O failed
    #[display("persistence-failure")]
    PersistenceFailure,
    /// Configuration could not be loaded
    #[display("configuration-failure")]
    ConfigurationFailure,
    /// The relay itself failed
    #[display("server-failure")]
    ServerFailure,
}

/// ideablog error with kind discrimination.
///
/// # Examples
///
/// ```
/// use ideablog_error::{ErrorCategory, IdeaBlogResult, PipelineError, PipelineErrorKind};
///
/// fn refine() -> IdeaBlogResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::NoContentToRefine))?
/// }
///
/// let err = refine().unwrap_err();
/// assert_eq!(err.category(), ErrorCategory::PreconditionViolation);
/// assert_eq!(err.message(), "No content to refine");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("IdeaBlog Error: {}", _0)]
pub struct IdeaBlogError(Box<IdeaBlogErrorKind>);

impl IdeaBlogError {
    /// Create a new error from a kind.
    pub fn new(kind: IdeaBlogErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IdeaBlogErrorKind {
        &self.0
    }

    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            IdeaBlogErrorKind::Pipeline(e) if e.kind.is_precondition() => {
                ErrorCategory::PreconditionViolation
            }
            IdeaBlogErrorKind::Pipeline(_) => ErrorCategory::MissingSection,
            IdeaBlogErrorKind::Gemini(_) => ErrorCategory::RemoteCallFailure,
            IdeaBlogErrorKind::Storage(_) => ErrorCategory::PersistenceFailure,
            IdeaBlogErrorKind::Config(_) => ErrorCategory::ConfigurationFailure,
            IdeaBlogErrorKind::Server(_) => ErrorCategory::ServerFailure,
        }
    }

    /// Human-readable message without the source location.
    pub fn message(&self) -> String {
        match self.kind() {
            IdeaBlogErrorKind::Pipeline(e) => e.kind.to_string(),
            IdeaBlogErrorKind::Gemini(e) => e.kind.to_string(),
            IdeaBlogErrorKind::Storage(e) => e.kind.to_string(),
            IdeaBlogErrorKind::Config(e) => e.message.clone(),
            IdeaBlogErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to IdeaBlogErrorKind
impl<T> From<T> for IdeaBlogError
where
    T: Into<IdeaBlogErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ideablog operations.
pub type IdeaBlogResult<T> = std::result::Result<T, IdeaBlogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeminiErrorKind, PipelineErrorKind, StorageErrorKind};

    #[test]
    fn categories_follow_error_family() {
        let missing: IdeaBlogError =
            PipelineError::new(PipelineErrorKind::MissingSection("growth_points".into())).into();
        assert_eq!(missing.category(), ErrorCategory::MissingSection);

        let finalize: IdeaBlogError =
            PipelineError::new(PipelineErrorKind::NoContentToFinalize).into();
        assert_eq!(finalize.category(), ErrorCategory::PreconditionViolation);

        let remote: IdeaBlogError = GeminiError::new(GeminiErrorKind::MissingApiKey).into();
        assert_eq!(remote.category(), ErrorCategory::RemoteCallFailure);

        let io: IdeaBlogError =
            StorageError::new(StorageErrorKind::FileWrite("x".into())).into();
        assert_eq!(io.category(), ErrorCategory::PersistenceFailure);
    }

    #[test]
    fn message_omits_location() {
        let err: IdeaBlogError =
            PipelineError::new(PipelineErrorKind::MissingSection("styled_draft".into())).into();
        let message = err.message();
        assert!(message.contains("styled_draft"));
        assert!(!message.contains("line"));
        assert!(err.to_string().contains("line"));
    }

    #[test]
    fn location_points_at_constructor_call() {
        let err = ConfigError::new("bad");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
