//! Resolved command contexts

use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::parsed::{ParsedArgument, ParsedNode};
use crate::command::{Command, CommandSender, RedirectModifier};
use crate::error::{ThicketError, ThicketResult};
use crate::range::TextRange;
use crate::tree::CommandNode;

/// Immutable snapshot of one parse, handed to executor callbacks
///
/// When a redirect was followed the rest of the parse lives in
/// [`child`](Self::child); [`last_child`](Self::last_child) is the context
/// whose command should run.
pub struct CommandContext<S> {
    pub(super) sender: S,
    pub(super) input: Arc<str>,
    pub(super) arguments: Arc<IndexMap<String, ParsedArgument>>,
    pub(super) command: Option<Command<S>>,
    pub(super) root: Arc<CommandNode<S>>,
    pub(super) nodes: Vec<ParsedNode<S>>,
    pub(super) range: TextRange,
    pub(super) child: Option<Box<CommandContext<S>>>,
    pub(super) modifier: Option<RedirectModifier<S>>,
    pub(super) fork: bool,
}

impl<S: CommandSender> CommandContext<S> {
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// The full input this context was built against
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The argument `name` as a `T`
    pub fn argument<T: Any>(&self, name: &str) -> ThicketResult<&T> {
        let parsed = self.arguments.get(name).ok_or_else(|| {
            ThicketError::argument(name, format!("No such argument '{}' exists on this command", name))
        })?;
        parsed.get::<T>().ok_or_else(|| {
            ThicketError::argument(
                name,
                format!(
                    "Argument '{}' is defined as {}, not {}",
                    name,
                    parsed.type_name(),
                    std::any::type_name::<T>()
                ),
            )
        })
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn parsed_argument(&self, name: &str) -> Option<&ParsedArgument> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ParsedArgument> {
        &self.arguments
    }

    pub fn command(&self) -> Option<&Command<S>> {
        self.command.as_ref()
    }

    /// The node parsing started from: the tree root, or a redirect target
    pub fn root_node(&self) -> &Arc<CommandNode<S>> {
        &self.root
    }

    pub fn nodes(&self) -> &[ParsedNode<S>] {
        &self.nodes
    }

    pub fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn child(&self) -> Option<&CommandContext<S>> {
        self.child.as_deref()
    }

    pub fn last_child(&self) -> &CommandContext<S> {
        let mut result = self;
        while let Some(child) = result.child() {
            result = child;
        }
        result
    }

    pub fn redirect_modifier(&self) -> Option<&RedirectModifier<S>> {
        self.modifier.as_ref()
    }

    /// Whether the redirect leaving this context runs once per sender
    pub fn is_forked(&self) -> bool {
        self.fork
    }

    /// Matched nodes across the whole redirect chain
    pub fn flatten_nodes(&self) -> Vec<ParsedNode<S>> {
        let mut nodes = self.nodes.clone();
        let mut current = self.child();
        while let Some(child) = current {
            nodes.extend(child.nodes.iter().cloned());
            current = child.child();
        }
        nodes
    }

    /// The same context issued by `sender`
    pub fn copy_for(&self, sender: S) -> Self {
        Self {
            sender,
            ..self.clone()
        }
    }
}

impl<S: CommandSender> Clone for CommandContext<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            input: Arc::clone(&self.input),
            arguments: Arc::clone(&self.arguments),
            command: self.command.clone(),
            root: Arc::clone(&self.root),
            nodes: self.nodes.clone(),
            range: self.range,
            child: self.child.clone(),
            modifier: self.modifier.clone(),
            fork: self.fork,
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CommandContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("sender", &self.sender)
            .field("input", &self.input)
            .field("nodes", &self.nodes)
            .field("arguments", &self.arguments)
            .field("range", &self.range)
            .field("has_command", &self.command.is_some())
            .field("fork", &self.fork)
            .field("child", &self.child)
            .finish()
    }
}
