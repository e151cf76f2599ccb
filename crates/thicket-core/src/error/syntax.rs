//! Cursor-addressed syntax errors

use std::fmt;
use std::sync::Arc;

use super::kind::ErrorKind;
use crate::reader::TextReader;

/// Number of characters shown before the cursor when rendering an error
pub const CONTEXT_AMOUNT: usize = 10;

/// Marker placed at the cursor by [`CommandSyntaxError::highlight`]
pub const HERE_MARKER: &str = "<--[HERE]";

/// A syntax error at a known position of a known input
///
/// This is plain data: the kind, the input it was raised against and the
/// byte offset of the offending token. Errors built without context (for
/// example by an argument type that has no reader at hand) render as the bare
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSyntaxError {
    kind: ErrorKind,
    input: Option<Arc<str>>,
    cursor: Option<usize>,
}

impl CommandSyntaxError {
    /// Create an error with no position information
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            input: None,
            cursor: None,
        }
    }

    /// Create an error positioned at the reader's current cursor
    pub fn with_context(kind: ErrorKind, reader: &TextReader) -> Self {
        Self::at(kind, reader.shared_text(), reader.cursor())
    }

    /// Create an error positioned at an explicit offset of `input`
    pub fn at(kind: ErrorKind, input: Arc<str>, cursor: usize) -> Self {
        Self {
            kind,
            input: Some(input),
            cursor: Some(cursor),
        }
    }

    /// The identifying kind
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset of the offending token, if known
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The input the error was raised against, if known
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The message without position information
    pub fn raw_message(&self) -> String {
        self.kind.to_string()
    }

    /// Up to [`CONTEXT_AMOUNT`] characters preceding the cursor
    pub fn context(&self) -> Option<String> {
        self.context_with(CONTEXT_AMOUNT)
    }

    /// Up to `amount` characters preceding the cursor, prefixed with `...`
    /// when the input was cut
    pub fn context_with(&self, amount: usize) -> Option<String> {
        let (input, cursor) = self.position()?;
        let before = &input[..cursor];
        let count = before.chars().count();
        if count > amount {
            let skip = before
                .char_indices()
                .nth(count - amount)
                .map_or(cursor, |(index, _)| index);
            Some(format!("...{}", &before[skip..]))
        } else {
            Some(before.to_string())
        }
    }

    /// The full input with [`HERE_MARKER`] inserted at the cursor
    pub fn highlight(&self) -> Option<String> {
        let (input, cursor) = self.position()?;
        Some(format!("{}{}{}", &input[..cursor], HERE_MARKER, &input[cursor..]))
    }

    /// Render the message using a custom context window
    pub fn render(&self, amount: usize) -> String {
        match (self.context_with(amount), self.cursor) {
            (Some(context), Some(cursor)) => {
                format!("{} at position {}: {}{}", self.kind, cursor, context, HERE_MARKER)
            }
            _ => self.kind.to_string(),
        }
    }

    fn position(&self) -> Option<(&str, usize)> {
        let input = self.input.as_deref()?;
        let mut cursor = self.cursor?.min(input.len());
        while !input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Some((input, cursor))
    }
}

impl fmt::Display for CommandSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CONTEXT_AMOUNT))
    }
}

impl std::error::Error for CommandSyntaxError {}

/// Result type for parsing operations
pub type SyntaxResult<T> = Result<T, CommandSyntaxError>;
