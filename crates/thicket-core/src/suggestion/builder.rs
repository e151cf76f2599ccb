//! Accumulator handed to nodes while collecting suggestions

use std::sync::Arc;

use super::suggestion::Suggestion;
use super::suggestions::Suggestions;
use crate::range::TextRange;

/// Collects suggestions that replace `input[start..]`
#[derive(Debug, Clone)]
pub struct SuggestionsBuilder {
    input: Arc<str>,
    start: usize,
    result: Vec<Suggestion>,
}

impl SuggestionsBuilder {
    pub fn new(input: impl Into<Arc<str>>, start: usize) -> Self {
        let input = input.into();
        let mut start = start.min(input.len());
        while !input.is_char_boundary(start) {
            start -= 1;
        }
        Self {
            input,
            start,
            result: Vec::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// The text being completed
    pub fn remaining(&self) -> &str {
        &self.input[self.start..]
    }

    pub fn remaining_lowercase(&self) -> String {
        self.remaining().to_lowercase()
    }

    fn replace_range(&self) -> TextRange {
        TextRange::between(self.start, self.input.len())
    }

    /// Suggest `text`, unless it is exactly what was already typed
    pub fn suggest(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text != self.remaining() {
            self.result.push(Suggestion::new(self.replace_range(), text));
        }
        self
    }

    pub fn suggest_with_tooltip(
        &mut self,
        text: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> &mut Self {
        let text = text.into();
        if text != self.remaining() {
            self.result
                .push(Suggestion::new(self.replace_range(), text).with_tooltip(tooltip));
        }
        self
    }

    pub fn suggest_int(&mut self, value: i32) -> &mut Self {
        self.result.push(Suggestion::integer(self.replace_range(), value));
        self
    }

    pub fn suggest_int_with_tooltip(&mut self, value: i32, tooltip: impl Into<String>) -> &mut Self {
        self.result
            .push(Suggestion::integer(self.replace_range(), value).with_tooltip(tooltip));
        self
    }

    /// Take over everything another builder collected
    pub fn add(&mut self, other: &SuggestionsBuilder) -> &mut Self {
        self.result.extend(other.result.iter().cloned());
        self
    }

    /// A fresh builder over the same input starting at `start`
    pub fn create_offset(&self, start: usize) -> Self {
        Self::new(Arc::clone(&self.input), start)
    }

    /// A fresh builder with the same input and start
    pub fn restart(&self) -> Self {
        self.create_offset(self.start)
    }

    pub fn build(&self) -> Suggestions {
        Suggestions::create(&self.input, self.result.iter().cloned())
    }
}
