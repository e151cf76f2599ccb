//! Merged, ranked completion lists

use indexmap::IndexSet;
use serde::Serialize;

use super::suggestion::Suggestion;
use crate::range::TextRange;

/// An immutable, deduplicated and sorted list of suggestions sharing one range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    range: TextRange,
    suggestions: Vec<Suggestion>,
}

impl Suggestions {
    pub fn new(range: TextRange, suggestions: Vec<Suggestion>) -> Self {
        Self { range, suggestions }
    }

    /// The canonical empty result
    pub fn empty() -> Self {
        Self::new(TextRange::at(0), Vec::new())
    }

    /// Unify `suggestions` against `command`
    ///
    /// Every suggestion is expanded to the union of all ranges, duplicates are
    /// dropped keeping the first occurrence, and the rest is stably sorted.
    pub fn create(command: &str, suggestions: impl IntoIterator<Item = Suggestion>) -> Self {
        let suggestions: Vec<Suggestion> = suggestions.into_iter().collect();
        let Some(range) = suggestions
            .iter()
            .map(Suggestion::range)
            .reduce(TextRange::encompassing)
        else {
            return Self::empty();
        };
        let unique: IndexSet<Suggestion> = suggestions
            .iter()
            .map(|suggestion| suggestion.expand(command, range))
            .collect();
        let mut sorted: Vec<Suggestion> = unique.into_iter().collect();
        sorted.sort_by(Suggestion::compare_ignore_case);
        Self::new(range, sorted)
    }

    /// Combine several results computed against the same `command`
    pub fn merge(command: &str, input: impl IntoIterator<Item = Suggestions>) -> Self {
        let mut input: Vec<Suggestions> = input.into_iter().collect();
        match input.len() {
            0 => Self::empty(),
            1 => input.pop().unwrap_or_default(),
            _ => Self::create(command, input.into_iter().flat_map(|s| s.suggestions)),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn list(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.suggestions.iter()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Keep at most `limit` suggestions
    pub fn truncate(&mut self, limit: usize) {
        self.suggestions.truncate(limit);
    }

    /// The suggestion texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.suggestions.iter().map(Suggestion::text).collect()
    }
}

impl IntoIterator for Suggestions {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}
