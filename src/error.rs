//! Error handling module for examplan
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Note that the wizard core itself has no failure paths: disallowed actions
//! are gated, never attempted-then-rejected. These types cover the shell
//! around it (IO, catalog files, terminal lifecycle).

use thiserror::Error;

/// Main error type for examplan
#[derive(Error, Debug)]
pub enum ExamPlanError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog errors (loading, parsing, validation)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (user input, catalog values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for examplan operations
pub type Result<T> = std::result::Result<T, ExamPlanError>;

// Convenient error constructors
impl ExamPlanError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> ExamPlanError {
    ExamPlanError::General(msg.into())
}
