//! Parse outcome

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::context::CommandContextBuilder;
use crate::error::CommandSyntaxError;
use crate::reader::TextReader;
use crate::tree::{CommandNode, NodeId};

/// A candidate node that failed to match, and why
pub struct ParseFailure<S> {
    pub node: Arc<CommandNode<S>>,
    pub error: CommandSyntaxError,
}

impl<S> Clone for ParseFailure<S> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            error: self.error.clone(),
        }
    }
}

impl<S> fmt::Debug for ParseFailure<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node, self.error)
    }
}

/// Result of [`CommandDispatcher::parse`](super::CommandDispatcher::parse)
///
/// Holds the context reached by the deepest successful descent, the reader
/// positioned after it, and every candidate failure seen along the way.
pub struct ParseResults<S> {
    pub(super) context: CommandContextBuilder<S>,
    pub(super) reader: TextReader,
    pub(super) exceptions: IndexMap<NodeId, ParseFailure<S>>,
}

impl<S> ParseResults<S> {
    pub fn context(&self) -> &CommandContextBuilder<S> {
        &self.context
    }

    /// The reader left where parsing stopped
    pub fn reader(&self) -> &TextReader {
        &self.reader
    }

    pub fn exceptions(&self) -> &IndexMap<NodeId, ParseFailure<S>> {
        &self.exceptions
    }

    /// Whether input is left over after the deepest match
    pub fn has_residual_input(&self) -> bool {
        !self.reader.remaining().trim().is_empty()
    }
}

impl<S: fmt::Debug> fmt::Debug for ParseResults<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseResults")
            .field("context", &self.context)
            .field("reader", &self.reader)
            .field("exceptions", &self.exceptions)
            .finish()
    }
}
