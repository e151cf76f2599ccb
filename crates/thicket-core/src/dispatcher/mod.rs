//! The command dispatcher
//!
//! Owns the root of a command tree and drives parsing, resolution, completion
//! and usage listing against it. Commands bound to the tree are never run
//! here: [`CommandDispatcher::dispatch`] hands back the resolved context and
//! the caller decides how to execute it.

mod complete;
mod parse;
mod resolve;
mod results;
mod usage;


pub use results::{ParseFailure, ParseResults};

use std::sync::Arc;
use tracing::debug;

use crate::command::CommandSender;
use crate::config::DispatcherConfig;
use crate::context::{CommandContext, CommandContextBuilder};
use crate::error::{SyntaxResult, ThicketError, ThicketResult};
use crate::reader::TextReader;
use crate::suggestion::Suggestions;
use crate::tree::{CommandNode, NodeBuilder};

/// Parses and completes input against a shared command tree
pub struct CommandDispatcher<S> {
    root: Arc<CommandNode<S>>,
    config: DispatcherConfig,
}

impl<S: CommandSender> CommandDispatcher<S> {
    /// Create a dispatcher over an empty tree
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            root: CommandNode::root(),
            config,
        }
    }

    /// Create a dispatcher over an existing root
    pub fn with_root(root: Arc<CommandNode<S>>, config: DispatcherConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Arc<CommandNode<S>> {
        &self.root
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Build `builder` and register the result at the root
    ///
    /// Returns the node now stored under the builder's name, which is an
    /// earlier registration when the two were merged.
    pub fn register<B: NodeBuilder<S>>(&self, builder: B) -> ThicketResult<Arc<CommandNode<S>>> {
        let node = builder.build()?;
        self.register_node(node)
    }

    pub fn register_node(&self, node: Arc<CommandNode<S>>) -> ThicketResult<Arc<CommandNode<S>>> {
        if node.is_default_node() {
            return Err(ThicketError::registration_for(
                node.name(),
                "Cannot register a default node at the root",
            ));
        }
        let key = node.key().to_string();
        self.root.add_child(node)?;
        debug!(command = %key, "registered command");
        self.root.child(&key).ok_or_else(|| {
            ThicketError::registration_for(&key, "Command vanished while it was being registered")
        })
    }

    /// Remove the top-level command `name`
    pub fn unregister(&self, name: &str) -> Option<Arc<CommandNode<S>>> {
        let removed = self.root.remove_child(name);
        if removed.is_some() {
            debug!(command = %name, "unregistered command");
        }
        removed
    }

    /// Parse `input` on behalf of `sender`
    ///
    /// Parsing never fails outright; the returned results describe how far
    /// the input got and why each rejected candidate was rejected.
    pub fn parse(&self, input: &str, sender: S) -> ParseResults<S> {
        self.parse_reader(TextReader::new(input), sender)
    }

    /// Parse from the reader's current position
    pub fn parse_reader(&self, reader: TextReader, sender: S) -> ParseResults<S> {
        let context = CommandContextBuilder::new(sender, Arc::clone(&self.root), reader.cursor());
        parse::parse_nodes(&self.root, &reader, &context)
    }

    /// Turn a parse into the context whose command should run
    pub fn resolve(&self, parse: &ParseResults<S>) -> SyntaxResult<CommandContext<S>> {
        resolve::resolve(parse)
    }

    /// Parse and resolve in one step
    pub fn dispatch(&self, input: &str, sender: S) -> SyntaxResult<CommandContext<S>> {
        let parse = self.parse(input, sender);
        self.resolve(&parse)
    }

    /// Completions for the end of the parsed input
    pub async fn completion_suggestions(&self, parse: &ParseResults<S>) -> ThicketResult<Suggestions> {
        let cursor = parse.reader().total_len();
        self.completion_suggestions_at(parse, cursor).await
    }

    /// Completions for the input as it stands at `cursor`
    pub async fn completion_suggestions_at(
        &self,
        parse: &ParseResults<S>,
        cursor: usize,
    ) -> ThicketResult<Suggestions> {
        complete::completion_suggestions(self, parse, cursor).await
    }

    /// Every command path under `node` the sender can run, one per line
    pub fn all_usage(&self, node: &Arc<CommandNode<S>>, sender: &S, restricted: bool) -> Vec<String> {
        usage::all_usage(&self.root, node, sender, restricted)
    }

    /// A condensed usage line for each child of `node`
    pub fn smart_usage(&self, node: &Arc<CommandNode<S>>, sender: &S) -> Vec<(Arc<CommandNode<S>>, String)> {
        usage::smart_usage(&self.root, node, sender)
    }

    /// Follow `path` from the root one child at a time
    pub fn find_node(&self, path: &[&str]) -> Option<Arc<CommandNode<S>>> {
        let mut node = Arc::clone(&self.root);
        for name in path {
            node = node.child(name)?;
        }
        Some(node)
    }

    /// Names leading from the root to `target`, empty if it is not in the tree
    pub fn path_of(&self, target: &CommandNode<S>) -> Vec<String> {
        let mut path = Vec::new();
        if find_path(&self.root, target, &mut path) {
            path
        } else {
            Vec::new()
        }
    }
}

fn find_path<S: CommandSender>(node: &CommandNode<S>, target: &CommandNode<S>, path: &mut Vec<String>) -> bool {
    if node.id() == target.id() {
        return true;
    }
    for child in node.children() {
        path.push(child.name().to_string());
        if find_path(&child, target, path) {
            return true;
        }
        path.pop();
    }
    false
}

impl<S: CommandSender> Default for CommandDispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}
