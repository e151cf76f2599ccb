//! Cursor-addressed reader over command input
//!
//! The reader owns a shared, immutable copy of the input and a byte cursor.
//! Cloning is O(1), so every parse attempt that may fail works on a private
//! clone and a failed branch cannot disturb its siblings.
//!
//! Every typed scanner that fails on a malformed token puts the cursor back at
//! the start of that token before returning the error. The parse loop and the
//! error renderer both depend on this.

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{CommandSyntaxError, ErrorKind, SyntaxResult};

const SYNTAX_ESCAPE: char = '\\';
const SYNTAX_DOUBLE_QUOTE: char = '"';
const SYNTAX_SINGLE_QUOTE: char = '\'';

/// A cursor over an immutable input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReader {
    text: Arc<str>,
    cursor: usize,
}

impl TextReader {
    /// Create a reader positioned at the start of `text`
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Characters accepted by [`read_unquoted_text`](Self::read_unquoted_text)
    pub fn is_allowed_in_unquoted(ch: char) -> bool {
        Self::is_allowed_integer(ch) || ch.is_ascii_alphabetic() || ch == '_' || ch == '.'
    }

    /// Characters that open a quoted string
    pub fn is_quoted_text_start(ch: char) -> bool {
        ch == SYNTAX_DOUBLE_QUOTE || ch == SYNTAX_SINGLE_QUOTE
    }

    fn is_allowed_integer(ch: char) -> bool {
        ch.is_ascii_digit() || ch == '+' || ch == '-'
    }

    fn is_allowed_number(ch: char) -> bool {
        Self::is_allowed_integer(ch) || ch == '.' || ch == 'e' || ch == 'E'
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the input and snapped back to a char boundary
    pub fn set_cursor(&mut self, cursor: usize) {
        let mut cursor = cursor.min(self.text.len());
        while !self.text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    pub fn total_len(&self) -> usize {
        self.text.len()
    }

    pub fn remaining_len(&self) -> usize {
        self.text.len() - self.cursor
    }

    /// Everything before the cursor
    pub fn consumed(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Everything from the cursor on
    pub fn remaining(&self) -> &str {
        &self.text[self.cursor..]
    }

    pub fn can_read(&self) -> bool {
        self.can_read_n(1)
    }

    /// Whether at least `length` more bytes are available
    pub fn can_read_n(&self, length: usize) -> bool {
        self.cursor + length <= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character `offset` characters past the cursor
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Consume and return the next character
    pub fn read(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.cursor += ch.len_utf8();
        Some(ch)
    }

    pub fn skip(&mut self) {
        if let Some(ch) = self.peek() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.skip();
        }
    }

    /// The token from the cursor up to the next space, without moving
    pub fn peek_token(&self) -> &str {
        let remaining = self.remaining();
        match remaining.find(' ') {
            Some(end) => &remaining[..end],
            None => remaining,
        }
    }

    /// Consume `ch` or fail at the cursor
    pub fn expect(&mut self, ch: char) -> SyntaxResult<()> {
        if self.peek() != Some(ch) {
            return Err(self.error(ErrorKind::ReaderExpectedSymbol { symbol: ch }));
        }
        self.skip();
        Ok(())
    }

    /// Scan a run of letters, digits, signs, `_` and `.`
    pub fn read_unquoted_text(&mut self) -> String {
        let start = self.cursor;
        while self.peek().is_some_and(Self::is_allowed_in_unquoted) {
            self.skip();
        }
        self.text[start..self.cursor].to_string()
    }

    /// Read a `"` or `'` delimited string, resolving `\` escapes
    pub fn read_quoted_text(&mut self) -> SyntaxResult<String> {
        let Some(next) = self.peek() else {
            return Ok(String::new());
        };
        if !Self::is_quoted_text_start(next) {
            return Err(self.error(ErrorKind::ReaderExpectedStartOfQuote));
        }
        let start = self.cursor;
        self.skip();
        self.read_text_until(next, start)
    }

    /// Read a quoted string if one starts here, otherwise unquoted text
    pub fn read_text(&mut self) -> SyntaxResult<String> {
        let Some(next) = self.peek() else {
            return Ok(String::new());
        };
        if Self::is_quoted_text_start(next) {
            let start = self.cursor;
            self.skip();
            return self.read_text_until(next, start);
        }
        Ok(self.read_unquoted_text())
    }

    pub fn read_boolean(&mut self) -> SyntaxResult<bool> {
        let start = self.cursor;
        let value = self.read_unquoted_text();
        match value.as_str() {
            "" => Err(self.error(ErrorKind::ReaderExpectedBool)),
            "true" => Ok(true),
            "false" => Ok(false),
            _ => {
                self.cursor = start;
                Err(self.error(ErrorKind::ReaderInvalidBool { value }))
            }
        }
    }

    pub fn read_byte(&mut self) -> SyntaxResult<i8> {
        self.read_number(Self::is_allowed_integer, ErrorKind::ReaderExpectedByte, |value| {
            ErrorKind::ReaderInvalidByte { value }
        })
    }

    pub fn read_short(&mut self) -> SyntaxResult<i16> {
        self.read_number(Self::is_allowed_integer, ErrorKind::ReaderExpectedShort, |value| {
            ErrorKind::ReaderInvalidShort { value }
        })
    }

    pub fn read_int(&mut self) -> SyntaxResult<i32> {
        self.read_number(Self::is_allowed_integer, ErrorKind::ReaderExpectedInt, |value| {
            ErrorKind::ReaderInvalidInt { value }
        })
    }

    pub fn read_long(&mut self) -> SyntaxResult<i64> {
        self.read_number(Self::is_allowed_integer, ErrorKind::ReaderExpectedLong, |value| {
            ErrorKind::ReaderInvalidLong { value }
        })
    }

    pub fn read_float(&mut self) -> SyntaxResult<f32> {
        self.read_number(Self::is_allowed_number, ErrorKind::ReaderExpectedFloat, |value| {
            ErrorKind::ReaderInvalidFloat { value }
        })
    }

    pub fn read_double(&mut self) -> SyntaxResult<f64> {
        self.read_number(Self::is_allowed_number, ErrorKind::ReaderExpectedDouble, |value| {
            ErrorKind::ReaderInvalidDouble { value }
        })
    }

    /// Build an error positioned at the current cursor
    pub fn error(&self, kind: ErrorKind) -> CommandSyntaxError {
        CommandSyntaxError::with_context(kind, self)
    }

    fn read_number<T: FromStr>(
        &mut self,
        allowed: fn(char) -> bool,
        expected: ErrorKind,
        invalid: fn(String) -> ErrorKind,
    ) -> SyntaxResult<T> {
        let start = self.cursor;
        while self.peek().is_some_and(allowed) {
            self.skip();
        }
        let number = &self.text[start..self.cursor];
        if number.is_empty() {
            return Err(self.error(expected));
        }
        match number.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => {
                let number = number.to_string();
                self.cursor = start;
                Err(self.error(invalid(number)))
            }
        }
    }

    /// `start` is the offset of the opening quote; the cursor returns there
    /// on failure while the error points at the offending character
    fn read_text_until(&mut self, terminator: char, start: usize) -> SyntaxResult<String> {
        let mut result = String::new();
        let mut escaped = false;
        while let Some(ch) = self.read() {
            if escaped {
                if ch == terminator || ch == SYNTAX_ESCAPE {
                    result.push(ch);
                    escaped = false;
                } else {
                    let at = self.cursor - ch.len_utf8();
                    self.cursor = start;
                    return Err(CommandSyntaxError::at(
                        ErrorKind::ReaderInvalidEscape { character: ch },
                        self.shared_text(),
                        at,
                    ));
                }
            } else if ch == SYNTAX_ESCAPE {
                escaped = true;
            } else if ch == terminator {
                return Ok(result);
            } else {
                result.push(ch);
            }
        }
        let at = self.cursor;
        self.cursor = start;
        Err(CommandSyntaxError::at(
            ErrorKind::ReaderExpectedEndOfQuote,
            self.shared_text(),
            at,
        ))
    }
}

impl From<&str> for TextReader {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextReader {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests;
