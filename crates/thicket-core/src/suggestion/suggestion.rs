//! A single completion candidate

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::range::TextRange;

/// Text that would replace `range` of the input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    range: TextRange,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<String>,
    #[serde(skip)]
    int_value: Option<i32>,
}

impl Suggestion {
    pub fn new(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
            tooltip: None,
            int_value: None,
        }
    }

    /// A numeric suggestion; these order numerically among themselves
    pub fn integer(range: TextRange, value: i32) -> Self {
        Self {
            range,
            text: value.to_string(),
            tooltip: None,
            int_value: Some(value),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The value of an integer suggestion
    pub fn int_value(&self) -> Option<i32> {
        self.int_value
    }

    /// Replace this suggestion's range of `input` with its text
    pub fn apply(&self, input: &str) -> String {
        if self.range.start() == 0 && self.range.end() == input.len() {
            return self.text.clone();
        }
        let before = input.get(..self.range.start()).unwrap_or(input);
        let after = input.get(self.range.end()..).unwrap_or("");
        format!("{}{}{}", before, self.text, after)
    }

    /// Re-express this suggestion against a wider `range` of `command`,
    /// pulling in the surrounding input so the replacement stays the same
    pub fn expand(&self, command: &str, range: TextRange) -> Self {
        if range == self.range {
            return self.clone();
        }
        let mut text = String::new();
        if range.start() < self.range.start() {
            text.push_str(TextRange::between(range.start(), self.range.start()).get(command));
        }
        text.push_str(&self.text);
        if range.end() > self.range.end() {
            text.push_str(TextRange::between(self.range.end(), range.end()).get(command));
        }
        Self {
            range,
            text,
            tooltip: self.tooltip.clone(),
            int_value: None,
        }
    }

    /// Display ordering: integers numerically and ahead of text, text
    /// case-insensitively
    pub fn compare_ignore_case(&self, other: &Self) -> Ordering {
        match (self.int_value, other.int_value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.to_lowercase().cmp(&other.text.to_lowercase()),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
