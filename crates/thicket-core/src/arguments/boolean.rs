use futures::FutureExt;

use super::{ArgumentType, to_strings};
use crate::command::CommandSender;
use crate::context::CommandContext;
use crate::error::SyntaxResult;
use crate::reader::TextReader;
use crate::suggestion::{SuggestionFuture, SuggestionsBuilder};

/// `true` or `false`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolArgument;

pub fn boolean() -> BoolArgument {
    BoolArgument
}

impl ArgumentType for BoolArgument {
    type Value = bool;

    fn parse(&self, reader: &mut TextReader) -> SyntaxResult<bool> {
        reader.read_boolean()
    }

    fn suggestions<'a, S: CommandSender>(
        &'a self,
        _context: &'a CommandContext<S>,
        mut builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a> {
        let remaining = builder.remaining_lowercase();
        for value in ["true", "false"] {
            if value.starts_with(&remaining) {
                builder.suggest(value);
            }
        }
        futures::future::ready(Ok(builder.build())).boxed()
    }

    fn examples(&self) -> Vec<String> {
        to_strings(&["true", "false"])
    }
}
