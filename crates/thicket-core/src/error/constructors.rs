//! Constructor methods for ThicketError

use super::types::ThicketError;

impl ThicketError {
    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new registration error
    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
            node: None,
        }
    }

    /// Create a registration error naming the offending node
    pub fn registration_for(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
            node: Some(node.into()),
        }
    }

    /// Create a new argument lookup error
    pub fn argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Argument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new suggestion error
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::Suggestion {
            message: message.into(),
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
