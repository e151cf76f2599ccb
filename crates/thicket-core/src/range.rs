//! Half-open byte ranges over command input

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `[start, end)` byte range of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Empty range at `position`
    pub const fn at(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Range covering `start..end`
    pub const fn between(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest range covering both `a` and `b`
    pub fn encompassing(a: TextRange, b: TextRange) -> Self {
        Self {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether `position` lies inside the range, both ends included
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }

    /// The slice of `text` covered by this range, clamped to the text
    pub fn get<'a>(&self, text: &'a str) -> &'a str {
        let end = self.end.min(text.len());
        let start = self.start.min(end);
        text.get(start..end).unwrap_or("")
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encompassing() {
        let range = TextRange::encompassing(TextRange::between(2, 4), TextRange::between(3, 7));
        assert_eq!(range, TextRange::between(2, 7));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_get() {
        assert_eq!(TextRange::between(3, 6).get("tp abc"), "abc");
        assert_eq!(TextRange::at(2).get("tp"), "");
        assert_eq!(TextRange::between(4, 20).get("tp abc"), "bc");
    }

    #[test]
    fn test_contains() {
        let range = TextRange::between(3, 6);
        assert!(range.contains(3));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert!(TextRange::at(4).is_empty());
    }
}
