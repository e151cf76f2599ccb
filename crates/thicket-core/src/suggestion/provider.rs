//! Per-node suggestion overrides

use async_trait::async_trait;

use super::builder::SuggestionsBuilder;
use super::suggestions::Suggestions;
use crate::command::CommandSender;
use crate::context::CommandContext;
use crate::error::SyntaxResult;

/// Computes suggestions for an argument node in place of its type
#[async_trait]
pub trait SuggestionProvider<S: CommandSender>: Send + Sync {
    async fn suggestions(
        &self,
        context: &CommandContext<S>,
        builder: SuggestionsBuilder,
    ) -> SyntaxResult<Suggestions>;
}

/// Suggests a fixed set of values that start with what was typed
#[derive(Debug, Clone, Default)]
pub struct ListSuggestions {
    values: Vec<String>,
}

impl ListSuggestions {
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl<S: CommandSender> SuggestionProvider<S> for ListSuggestions {
    async fn suggestions(
        &self,
        _context: &CommandContext<S>,
        mut builder: SuggestionsBuilder,
    ) -> SyntaxResult<Suggestions> {
        Ok(suggest_matching(&self.values, &mut builder))
    }
}

/// Suggest every value whose lowercase form starts with the lowercase
/// remaining input
pub fn suggest_matching<I, T>(values: I, builder: &mut SuggestionsBuilder) -> Suggestions
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let remaining = builder.remaining_lowercase();
    for value in values {
        let value = value.as_ref();
        if value.to_lowercase().starts_with(&remaining) {
            builder.suggest(value);
        }
    }
    builder.build()
}
