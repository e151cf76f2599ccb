//! Mutable parse accumulator

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use super::command_context::CommandContext;
use super::parsed::{ParsedArgument, ParsedNode};
use crate::command::{Command, CommandSender, RedirectModifier};
use crate::error::{ThicketError, ThicketResult};
use crate::range::TextRange;
use crate::tree::CommandNode;

/// Where completions should be asked for
pub struct SuggestionContext<S> {
    /// Node whose children are asked
    pub parent: Arc<CommandNode<S>>,
    /// Offset the completions replace from
    pub start: usize,
}

impl<S> fmt::Debug for SuggestionContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionContext")
            .field("parent", &format_args!("{}", self.parent))
            .field("start", &self.start)
            .finish()
    }
}

/// Collects matched nodes and bound arguments while a parse descends
///
/// Each parse attempt works on its own clone; `range` always covers every
/// recorded node range. `child` is set exactly when a redirect was followed.
pub struct CommandContextBuilder<S> {
    sender: S,
    root: Arc<CommandNode<S>>,
    range: TextRange,
    nodes: Vec<ParsedNode<S>>,
    arguments: IndexMap<String, ParsedArgument>,
    command: Option<Command<S>>,
    modifier: Option<RedirectModifier<S>>,
    fork: bool,
    child: Option<Box<CommandContextBuilder<S>>>,
}

impl<S: CommandSender> CommandContextBuilder<S> {
    pub fn new(sender: S, root: Arc<CommandNode<S>>, start: usize) -> Self {
        Self {
            sender,
            root,
            range: TextRange::at(start),
            nodes: Vec::new(),
            arguments: IndexMap::new(),
            command: None,
            modifier: None,
            fork: false,
            child: None,
        }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn with_sender(&mut self, sender: S) -> &mut Self {
        self.sender = sender;
        self
    }

    pub fn root_node(&self) -> &Arc<CommandNode<S>> {
        &self.root
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn nodes(&self) -> &[ParsedNode<S>] {
        &self.nodes
    }

    pub fn arguments(&self) -> &IndexMap<String, ParsedArgument> {
        &self.arguments
    }

    pub fn command(&self) -> Option<&Command<S>> {
        self.command.as_ref()
    }

    pub fn is_forked(&self) -> bool {
        self.fork
    }

    pub fn with_argument(&mut self, name: &str, argument: ParsedArgument) -> &mut Self {
        self.arguments.insert(name.to_string(), argument);
        self
    }

    /// Record a matched node; its redirect settings become the builder's
    pub fn with_node(&mut self, node: Arc<CommandNode<S>>, range: TextRange) -> &mut Self {
        self.range = TextRange::encompassing(self.range, range);
        self.modifier = node.redirect_modifier().cloned();
        self.fork = node.is_fork();
        self.nodes.push(ParsedNode::new(node, range));
        self
    }

    pub fn with_command(&mut self, command: Option<Command<S>>) -> &mut Self {
        self.command = command;
        self
    }

    pub fn with_child(&mut self, child: CommandContextBuilder<S>) -> &mut Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn child(&self) -> Option<&CommandContextBuilder<S>> {
        self.child.as_deref()
    }

    /// The builder at the end of the redirect chain
    pub fn last_child(&self) -> &CommandContextBuilder<S> {
        let mut result = self;
        while let Some(child) = result.child() {
            result = child;
        }
        result
    }

    /// Freeze into a context over `input`
    pub fn build(&self, input: &str) -> CommandContext<S> {
        self.build_shared(&Arc::from(input))
    }

    fn build_shared(&self, input: &Arc<str>) -> CommandContext<S> {
        CommandContext {
            sender: self.sender.clone(),
            input: Arc::clone(input),
            arguments: Arc::new(self.arguments.clone()),
            command: self.command.clone(),
            root: Arc::clone(&self.root),
            nodes: self.nodes.clone(),
            range: self.range,
            child: self
                .child
                .as_ref()
                .map(|child| Box::new(child.build_shared(input))),
            modifier: self.modifier.clone(),
            fork: self.fork,
        }
    }

    /// Locate the node whose children complete the input at `cursor`
    pub fn find_suggestion_context(&self, cursor: usize) -> ThicketResult<SuggestionContext<S>> {
        if self.range.start() > cursor {
            return Err(ThicketError::suggestion(format!(
                "Can't find node before cursor {} (context starts at {})",
                cursor,
                self.range.start()
            )));
        }
        if self.range.end() < cursor {
            if let Some(child) = self.child() {
                return child.find_suggestion_context(cursor);
            }
            if let Some(last) = self.nodes.last() {
                return Ok(SuggestionContext {
                    parent: Arc::clone(last.node()),
                    start: last.range().end() + 1,
                });
            }
            return Ok(SuggestionContext {
                parent: Arc::clone(&self.root),
                start: self.range.start(),
            });
        }
        let mut previous = &self.root;
        for parsed in &self.nodes {
            if parsed.range().contains(cursor) {
                return Ok(SuggestionContext {
                    parent: Arc::clone(previous),
                    start: parsed.range().start(),
                });
            }
            previous = parsed.node();
        }
        Ok(SuggestionContext {
            parent: Arc::clone(previous),
            start: self.range.start(),
        })
    }
}

impl<S: CommandSender> Clone for CommandContextBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            root: Arc::clone(&self.root),
            range: self.range,
            nodes: self.nodes.clone(),
            arguments: self.arguments.clone(),
            command: self.command.clone(),
            modifier: self.modifier.clone(),
            fork: self.fork,
            child: self.child.clone(),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CommandContextBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContextBuilder")
            .field("sender", &self.sender)
            .field("root", &format_args!("{}", self.root))
            .field("range", &self.range)
            .field("nodes", &self.nodes)
            .field("arguments", &self.arguments)
            .field("has_command", &self.command.is_some())
            .field("fork", &self.fork)
            .field("child", &self.child)
            .finish()
    }
}
