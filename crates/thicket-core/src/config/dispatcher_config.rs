//! Dispatcher configuration

use serde::{Deserialize, Serialize};

use super::logging_config::LoggingConfig;
use crate::error::CONTEXT_AMOUNT;

/// Tunables for a [`CommandDispatcher`](crate::dispatcher::CommandDispatcher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Upper bound on merged completion lists (None = unlimited)
    pub max_suggestions: Option<usize>,
    /// Characters of input shown before the cursor in rendered errors
    pub error_context: usize,
    /// Hide nodes the sender cannot use from usage listings
    pub restricted_usage: bool,
    /// Logging settings for binaries embedding the dispatcher
    pub logging: LoggingConfig,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            error_context: CONTEXT_AMOUNT,
            restricted_usage: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl DispatcherConfig {
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = Some(max);
        self
    }

    pub fn with_error_context(mut self, amount: usize) -> Self {
        self.error_context = amount;
        self
    }

    pub fn with_restricted_usage(mut self, restricted: bool) -> Self {
        self.restricted_usage = restricted;
        self
    }

    /// Overlay `other` on top of this config
    pub fn merge(&mut self, other: DispatcherConfig) {
        if other.max_suggestions.is_some() {
            self.max_suggestions = other.max_suggestions;
        }

        if other.error_context != CONTEXT_AMOUNT {
            self.error_context = other.error_context;
        }

        self.restricted_usage = other.restricted_usage;
        self.logging.merge(other.logging);
    }
}
