//! String argument types

use futures::FutureExt;

use super::{ArgumentType, to_strings};
use crate::command::CommandSender;
use crate::context::CommandContext;
use crate::error::{ErrorKind, SyntaxResult};
use crate::reader::TextReader;
use crate::suggestion::{SuggestionFuture, SuggestionsBuilder, suggest_matching};

/// How much input a [`StringArgument`] consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// One unquoted word
    Word,
    /// One word, or a quoted phrase
    Quotable,
    /// Everything left in the input
    Greedy,
}

impl StringKind {
    fn examples(self) -> &'static [&'static str] {
        match self {
            Self::Word => &["word", "words_with_underscores"],
            Self::Quotable => &["\"quoted phrase\"", "word", "\"\""],
            Self::Greedy => &["word", "words with spaces", "\"and symbols\""],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringArgument {
    kind: StringKind,
}

impl StringArgument {
    pub fn new(kind: StringKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> StringKind {
        self.kind
    }
}

pub fn word() -> StringArgument {
    StringArgument::new(StringKind::Word)
}

pub fn string() -> StringArgument {
    StringArgument::new(StringKind::Quotable)
}

pub fn greedy_string() -> StringArgument {
    StringArgument::new(StringKind::Greedy)
}

impl ArgumentType for StringArgument {
    type Value = String;

    fn parse(&self, reader: &mut TextReader) -> SyntaxResult<String> {
        match self.kind {
            StringKind::Greedy => {
                let text = reader.remaining().to_string();
                reader.set_cursor(reader.total_len());
                Ok(text)
            }
            StringKind::Word => Ok(reader.read_unquoted_text()),
            StringKind::Quotable => reader.read_text(),
        }
    }

    fn examples(&self) -> Vec<String> {
        to_strings(self.kind.examples())
    }
}

/// One of a fixed set of unquoted tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermArgument {
    options: Vec<String>,
}

impl TermArgument {
    pub fn new<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

pub fn term<I, T>(options: I) -> TermArgument
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    TermArgument::new(options)
}

impl ArgumentType for TermArgument {
    type Value = String;

    fn parse(&self, reader: &mut TextReader) -> SyntaxResult<String> {
        let start = reader.cursor();
        let term = reader.read_unquoted_text();
        if !self.options.contains(&term) {
            reader.set_cursor(start);
            return Err(reader.error(ErrorKind::TermInvalid { term }));
        }
        Ok(term)
    }

    fn suggestions<'a, S: CommandSender>(
        &'a self,
        _context: &'a CommandContext<S>,
        mut builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a> {
        let suggestions = suggest_matching(&self.options, &mut builder);
        futures::future::ready(Ok(suggestions)).boxed()
    }

    fn examples(&self) -> Vec<String> {
        self.options.clone()
    }
}

/// Quote `input` when it would not survive [`TextReader::read_unquoted_text`]
pub fn escape_if_required(input: &str) -> String {
    if input.chars().all(TextReader::is_allowed_in_unquoted) {
        return input.to_string();
    }
    let mut result = String::with_capacity(input.len() + 2);
    result.push('"');
    for ch in input.chars() {
        if ch == '\\' || ch == '"' {
            result.push('\\');
        }
        result.push(ch);
    }
    result.push('"');
    result
}
