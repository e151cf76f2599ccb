//! Command execution result types

use serde::{Deserialize, Serialize};

/// Result returned by an executor callback
///
/// Results from forked executions are combined with [`merge`](Self::merge),
/// so the value is additive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Numeric outcome, usually the number of successful executions
    pub value: i32,
    /// Messages produced for the sender
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl CommandResult {
    /// A result with value 0 and no messages
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result carrying `value`
    pub fn of(value: i32) -> Self {
        Self {
            value,
            messages: Vec::new(),
        }
    }

    /// A single successful execution
    pub fn success() -> Self {
        Self::of(1)
    }

    /// Add a message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Combine two results, summing values and concatenating messages
    pub fn merge(mut self, other: CommandResult) -> Self {
        self.value = self.value.saturating_add(other.value);
        self.messages.extend(other.messages);
        self
    }

    pub fn is_success(&self) -> bool {
        self.value > 0
    }
}
