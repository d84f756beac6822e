//! Error types for postsmith.
//!
//! Uses thiserror for derive macros. Generation failures at request time are
//! not errors: the model handler reports them as `None` and the caller falls
//! back to a template post. The variants here are the failures that end a run.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for postsmith operations.
#[derive(Error, Debug)]
pub enum PostError {
    /// The configuration file could not be read, parsed, or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// A filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The generation client could not be constructed.
    #[error("model client unavailable: {0}")]
    Generation(String),

    /// Topic selection was asked to pick from an empty list.
    #[error("no topics configured")]
    NoTopics,

    /// The user interrupted the run.
    #[error("cancelled by user")]
    Cancelled,
}

impl PostError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PostError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PostError::Config(_)
            | PostError::Io { .. }
            | PostError::Generation(_)
            | PostError::NoTopics
            | PostError::Cancelled => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for postsmith operations.
pub type Result<T> = std::result::Result<T, PostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_exits_non_zero() {
        assert_eq!(PostError::Cancelled.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn config_error_exits_non_zero() {
        let err = PostError::Config("topics must not be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn io_error_keeps_context_and_source() {
        let err = PostError::io(
            "failed to create 'content/tech'",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to create 'content/tech': denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(PostError::NoTopics.to_string(), "no topics configured");
        assert_eq!(PostError::Cancelled.to_string(), "cancelled by user");
        let err = PostError::Generation("model name is empty".to_string());
        assert_eq!(
            err.to_string(),
            "model client unavailable: model name is empty"
        );
    }
}
