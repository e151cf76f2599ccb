//! Argument types
//!
//! An [`ArgumentType`] reads one typed value from a [`TextReader`] and can
//! offer completions for it. Argument nodes store their type behind the
//! object-safe [`ArgumentParser`] so values of different types can sit in one
//! tree; parsed values are kept as [`ArgumentValue`] and recovered with
//! [`CommandContext::argument`](crate::context::CommandContext::argument).

mod boolean;
mod numeric;
mod string;

pub use boolean::{BoolArgument, boolean};
pub use numeric::{
    ByteArgument, DoubleArgument, FloatArgument, IntegerArgument, LongArgument, ShortArgument,
    byte, byte_between, double, double_between, double_min, float, float_between, float_min,
    integer, integer_between, integer_min, long, long_between, long_min, short, short_between,
};
pub use string::{
    StringArgument, StringKind, TermArgument, escape_if_required, greedy_string, string, term,
    word,
};

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use futures::FutureExt;

use crate::command::CommandSender;
use crate::context::CommandContext;
use crate::error::SyntaxResult;
use crate::reader::TextReader;
use crate::suggestion::{SuggestionFuture, Suggestions, SuggestionsBuilder};

/// A parsed argument value with its concrete type erased
pub type ArgumentValue = Arc<dyn Any + Send + Sync>;

/// Strategy for reading and completing one kind of argument
pub trait ArgumentType: fmt::Debug + Send + Sync + 'static {
    type Value: Any + Send + Sync;

    /// Read a value, leaving the cursor on the offending token on failure
    fn parse(&self, reader: &mut TextReader) -> SyntaxResult<Self::Value>;

    fn suggestions<'a, S: CommandSender>(
        &'a self,
        _context: &'a CommandContext<S>,
        _builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a> {
        futures::future::ready(Ok(Suggestions::empty())).boxed()
    }

    /// Sample inputs used for help text and ambiguity checks
    fn examples(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Object-safe view of an [`ArgumentType`] for senders of type `S`
pub trait ArgumentParser<S>: fmt::Debug + Send + Sync {
    fn parse_value(&self, reader: &mut TextReader) -> SyntaxResult<ArgumentValue>;

    fn list_suggestions<'a>(
        &'a self,
        context: &'a CommandContext<S>,
        builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a>;

    fn argument_examples(&self) -> Vec<String>;

    /// Name of the produced value type, used in lookup errors
    fn value_type_name(&self) -> &'static str;
}

impl<S: CommandSender, T: ArgumentType> ArgumentParser<S> for T {
    fn parse_value(&self, reader: &mut TextReader) -> SyntaxResult<ArgumentValue> {
        let value = ArgumentType::parse(self, reader)?;
        Ok(Arc::new(value))
    }

    fn list_suggestions<'a>(
        &'a self,
        context: &'a CommandContext<S>,
        builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a> {
        ArgumentType::suggestions(self, context, builder)
    }

    fn argument_examples(&self) -> Vec<String> {
        ArgumentType::examples(self)
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T::Value>()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
