//! Completion suggestions for partial input

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, trace};

use super::CommandDispatcher;
use super::results::ParseResults;
use crate::command::CommandSender;
use crate::error::{ThicketError, ThicketResult};
use crate::suggestion::{Suggestions, SuggestionsBuilder};

/// Ask every usable child of the node before `cursor` for completions and
/// merge the answers
pub(super) async fn completion_suggestions<S: CommandSender>(
    dispatcher: &CommandDispatcher<S>,
    parse: &ParseResults<S>,
    cursor: usize,
) -> ThicketResult<Suggestions> {
    let context = parse.context();
    let full_input = parse.reader().text();
    if cursor > full_input.len() {
        return Err(ThicketError::suggestion(format!(
            "Cursor {} is outside the input of length {}",
            cursor,
            full_input.len()
        )));
    }
    let truncated: Arc<str> = full_input.get(..cursor).map(Arc::<str>::from).ok_or_else(|| {
        ThicketError::suggestion(format!("Cursor {} is inside a multi-byte character", cursor))
    })?;

    let anchor = context.find_suggestion_context(cursor)?;
    let start = anchor.start.min(cursor);
    let built = context.build(&truncated);

    let candidates: Vec<_> = anchor
        .parent
        .children()
        .into_iter()
        .filter(|child| child.can_use(context.sender()))
        .collect();
    debug!(
        parent = %anchor.parent,
        start,
        candidates = candidates.len(),
        "collecting suggestions"
    );

    let pending = candidates.iter().map(|child| {
        child.suggestions(&built, SuggestionsBuilder::new(Arc::clone(&truncated), start))
    });
    let results = join_all(pending).await;

    let collected = results
        .into_iter()
        .zip(&candidates)
        .filter_map(|(result, child)| match result {
            Ok(suggestions) => Some(suggestions),
            Err(error) => {
                trace!(node = %child, %error, "suggestion provider failed");
                None
            }
        });
    let mut merged = Suggestions::merge(full_input, collected);
    if let Some(max) = dispatcher.config().max_suggestions {
        merged.truncate(max);
    }
    Ok(merged)
}
