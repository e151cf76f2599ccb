//! Turning a parse into a runnable context or one error

use indexmap::IndexMap;
use tracing::debug;

use super::results::{ParseFailure, ParseResults};
use crate::command::CommandSender;
use crate::context::CommandContext;
use crate::error::{CommandSyntaxError, ErrorKind, SyntaxResult};
use crate::tree::NodeId;

/// Resolve `parse` to the context whose command should run
///
/// Leftover non-whitespace input is reported through the most specific
/// failure available: the only one recorded, or the one that got furthest
/// into the input, provided it reached at least as far as the parse did.
/// Otherwise the error is an unknown command when nothing matched at all and
/// an unknown argument at the leftover input. Input that was fully consumed
/// but ended on a node without a command fails the same way at the end of
/// the input.
pub(super) fn resolve<S: CommandSender>(parse: &ParseResults<S>) -> SyntaxResult<CommandContext<S>> {
    let reader = parse.reader();
    if parse.has_residual_input() {
        let reached = deepest_failure(parse.exceptions())
            .filter(|failure| failure.error.cursor().is_some_and(|cursor| cursor >= reader.cursor()));
        if let Some(failure) = reached {
            debug!(error = %failure.error, node = %failure.node, "resolution failed on candidate");
            return Err(failure.error.clone());
        }
        let kind = if parse.context().range().is_empty() {
            ErrorKind::DispatcherUnknownCommand
        } else {
            ErrorKind::DispatcherUnknownArgument
        };
        debug!(cursor = reader.cursor(), %kind, "unconsumed input");
        return Err(reader.error(kind));
    }

    let terminal = parse.context().last_child();
    if terminal.command().is_none() {
        let kind = if terminal.nodes().is_empty() {
            ErrorKind::DispatcherUnknownCommand
        } else {
            ErrorKind::DispatcherUnknownArgument
        };
        debug!(cursor = reader.cursor(), %kind, "no command at end of input");
        return Err(CommandSyntaxError::with_context(kind, reader));
    }

    Ok(parse.context().build(reader.text()))
}

fn deepest_failure<S>(exceptions: &IndexMap<NodeId, ParseFailure<S>>) -> Option<&ParseFailure<S>> {
    if exceptions.len() == 1 {
        return exceptions.values().next();
    }
    let deepest = exceptions
        .values()
        .filter_map(|failure| failure.error.cursor())
        .max()?;
    let mut at_deepest = exceptions
        .values()
        .filter(|failure| failure.error.cursor() == Some(deepest));
    let first = at_deepest.next()?;
    match at_deepest.next() {
        Some(_) => None,
        None => Some(first),
    }
}
