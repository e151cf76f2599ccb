//! Core error types and traits for Thicket

use thiserror::Error;

use super::syntax::CommandSyntaxError;

/// Result type alias for Thicket operations
pub type ThicketResult<T> = Result<T, ThicketError>;

/// Unified error trait that all Thicket errors implement.
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> String;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for Thicket
///
/// Syntax errors raised while parsing user input are wrapped by the
/// [`Syntax`](ThicketError::Syntax) variant; everything else is a problem with
/// how the tree was built or configured.
#[derive(Error, Debug, Clone)]
pub enum ThicketError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A tree invariant was violated while building or registering nodes
    #[error("Registration error: {message}")]
    Registration {
        message: String,
        node: Option<String>,
    },

    /// An argument lookup on a parsed context failed
    #[error("Argument error: {name}: {message}")]
    Argument { name: String, message: String },

    /// The suggestion cursor was outside the parsed range
    #[error("Suggestion error: {message}")]
    Suggestion { message: String },

    /// Parsing user input failed
    #[error(transparent)]
    Syntax(#[from] CommandSyntaxError),

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}
