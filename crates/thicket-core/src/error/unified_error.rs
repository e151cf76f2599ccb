//! UnifiedError trait implementations

use super::syntax::CommandSyntaxError;
use super::types::{ThicketError, UnifiedError};

impl UnifiedError for ThicketError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "THICKET_CONFIG",
            Self::Registration { .. } => "THICKET_REGISTRATION",
            Self::Argument { .. } => "THICKET_ARGUMENT",
            Self::Suggestion { .. } => "THICKET_SUGGESTION",
            Self::Syntax(error) => error.kind().error_code(),
            Self::Io { .. } => "THICKET_IO",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Config { message, .. } => message.clone(),
            Self::Registration { message, .. } => message.clone(),
            Self::Argument { message, .. } => message.clone(),
            Self::Suggestion { message } => message.clone(),
            Self::Syntax(error) => error.raw_message(),
            Self::Io { message, .. } => message.clone(),
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Registration { node, .. } => node.as_deref(),
            Self::Argument { name, .. } => Some(name),
            Self::Suggestion { .. } => None,
            Self::Syntax(error) => error.input(),
            Self::Io { path, .. } => path.as_deref(),
        }
    }
}

impl UnifiedError for CommandSyntaxError {
    fn error_code(&self) -> &str {
        self.kind().error_code()
    }

    fn message(&self) -> String {
        self.raw_message()
    }

    fn context(&self) -> Option<&str> {
        self.input()
    }
}
