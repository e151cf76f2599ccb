//! Recursive descent over the command tree

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

use super::results::{ParseFailure, ParseResults};
use crate::command::CommandSender;
use crate::context::CommandContextBuilder;
use crate::error::{ErrorKind, SyntaxResult};
use crate::reader::TextReader;
use crate::tree::CommandNode;

/// Try the relevant children of `node` against the input at `original`
///
/// Every candidate works on its own reader and builder. A failure is recorded
/// and the next candidate is tried; the first candidate that matches is
/// followed and its outcome returned, whatever happens deeper down.
pub(super) fn parse_nodes<S: CommandSender>(
    node: &Arc<CommandNode<S>>,
    original: &TextReader,
    context_so_far: &CommandContextBuilder<S>,
) -> ParseResults<S> {
    let sender = context_so_far.sender();
    let mut errors = IndexMap::new();

    for child in node.relevant_nodes(original) {
        if !child.can_use(sender) {
            trace!(node = %child, "skipping candidate the sender cannot use");
            continue;
        }

        let mut context = context_so_far.clone();
        let mut reader = original.clone();
        if let Err(error) = parse_candidate(&child, &mut reader, &mut context) {
            trace!(node = %child, cursor = original.cursor(), %error, "candidate failed");
            errors.insert(
                child.id(),
                ParseFailure {
                    node: Arc::clone(&child),
                    error,
                },
            );
            continue;
        }
        trace!(node = %child, cursor = reader.cursor(), "candidate matched");

        context.with_command(child.command());
        let required = if child.redirect().is_some() { 1 } else { 2 };
        if !reader.can_read_n(required) && child.default_child().is_none() {
            return ParseResults {
                context,
                reader,
                exceptions: errors,
            };
        }

        if reader.can_read() {
            reader.skip();
        }
        let mut results = match child.redirect() {
            Some(target) => {
                let child_context =
                    CommandContextBuilder::new(context.sender().clone(), Arc::clone(target), reader.cursor());
                let parsed = parse_nodes(target, &reader, &child_context);
                context.with_child(parsed.context);
                ParseResults {
                    context,
                    reader: parsed.reader,
                    exceptions: parsed.exceptions,
                }
            }
            None => parse_nodes(&child, &reader, &context),
        };
        errors.extend(results.exceptions);
        results.exceptions = errors;
        return results;
    }

    ParseResults {
        context: context_so_far.clone(),
        reader: original.clone(),
        exceptions: errors,
    }
}

fn parse_candidate<S: CommandSender>(
    child: &Arc<CommandNode<S>>,
    reader: &mut TextReader,
    context: &mut CommandContextBuilder<S>,
) -> SyntaxResult<()> {
    child.parse(reader, context)?;
    if reader.can_read() && reader.peek() != Some(' ') {
        return Err(reader.error(ErrorKind::DispatcherExpectedArgumentSeparator));
    }
    Ok(())
}
