//! # Error Types
//!
//! Structured error types for topic_core. Field-level input problems that the
//! form swallows never become errors; these variants cover the conditions a
//! front end is expected to report to the user.
//!
//! ## Example
//!
//! ```rust
//! use topic_core::errors::TopicError;
//! use topic_core::form::TopicForm;
//!
//! let mut form = TopicForm::new();
//! let err = form.add_subtopic("Algebra").unwrap_err();
//! assert_eq!(err.error_code(), "NO_TOPIC_SELECTED");
//! assert!(matches!(err, TopicError::NoTopicSelected { .. }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for topic_core operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Structured error type for form and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TopicError {
    /// A subtopic was submitted before any topic
    #[error("No topic selected: enter a topic before adding subtopic '{subtopic}'")]
    NoTopicSelected { subtopic: String },

    /// A subject was submitted before any subtopic under the current topic
    #[error("No subtopic open: add a subtopic before adding subject '{subject}'")]
    NoSubtopicOpen { subject: String },

    /// Export was requested with nothing entered
    #[error("Nothing to export: the topic outline is empty")]
    EmptyDocument,

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Typst compilation or PDF rendering failed
    #[error("Rendering failed during {stage}: {reason}")]
    RenderFailed { stage: String, reason: String },
}

impl TopicError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        TopicError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        TopicError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TopicError::NoTopicSelected { .. } => "NO_TOPIC_SELECTED",
            TopicError::NoSubtopicOpen { .. } => "NO_SUBTOPIC_OPEN",
            TopicError::EmptyDocument => "EMPTY_DOCUMENT",
            TopicError::FileError { .. } => "FILE_ERROR",
            TopicError::RenderFailed { .. } => "RENDER_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TopicError::file_error("write", "/readonly/topic_document.pdf", "permission denied");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"FileError\""));
        let roundtrip: TopicError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TopicError::EmptyDocument.error_code(), "EMPTY_DOCUMENT");
        assert_eq!(
            TopicError::NoTopicSelected { subtopic: "Algebra".into() }.error_code(),
            "NO_TOPIC_SELECTED"
        );
        assert_eq!(
            TopicError::NoSubtopicOpen { subject: "Equations".into() }.error_code(),
            "NO_SUBTOPIC_OPEN"
        );
        assert_eq!(TopicError::file_error("write", "p", "r").error_code(), "FILE_ERROR");
        assert_eq!(TopicError::render_failed("compile", "bad").error_code(), "RENDER_FAILED");
    }

    #[test]
    fn test_error_display_names_the_value() {
        let error = TopicError::NoSubtopicOpen { subject: "Equations".into() };
        assert!(error.to_string().contains("Equations"));
    }
}
