//! Completion suggestions
//!
//! Nodes produce [`Suggestions`] asynchronously through a
//! [`SuggestionsBuilder`]; the dispatcher merges the per-node results into one
//! list whose range covers every constituent suggestion.

mod builder;
mod provider;
mod suggestion;
mod suggestions;

pub use builder::SuggestionsBuilder;
pub use provider::{ListSuggestions, SuggestionProvider, suggest_matching};
pub use suggestion::Suggestion;
pub use suggestions::Suggestions;

use futures::future::BoxFuture;

use crate::error::SyntaxResult;

/// Pending suggestions for one node
pub type SuggestionFuture<'a> = BoxFuture<'a, SyntaxResult<Suggestions>>;
