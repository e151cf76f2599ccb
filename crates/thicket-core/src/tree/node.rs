//! Command tree nodes

use futures::FutureExt;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::children::Children;
use crate::arguments::{ArgumentParser, ArgumentValue};
use crate::command::{Command, CommandSender, RedirectModifier, Requirement};
use crate::context::{CommandContext, CommandContextBuilder, ParsedArgument};
use crate::error::{ErrorKind, SyntaxResult, ThicketError, ThicketResult};
use crate::range::TextRange;
use crate::reader::TextReader;
use crate::suggestion::{SuggestionFuture, SuggestionProvider, Suggestions, SuggestionsBuilder};

const USAGE_ARGUMENT_OPEN: &str = "<";
const USAGE_ARGUMENT_CLOSE: &str = ">";

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique node identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Literal payload
pub struct LiteralNode<S> {
    literal: String,
    aliases: Vec<Arc<CommandNode<S>>>,
}

impl<S> LiteralNode<S> {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Sibling nodes registered next to this one under other names
    pub fn aliases(&self) -> &[Arc<CommandNode<S>>] {
        &self.aliases
    }
}

/// Argument payload
pub struct ArgumentNode<S> {
    name: String,
    parser: Arc<dyn ArgumentParser<S>>,
    default_value: Option<ArgumentValue>,
    suggestions: Option<Arc<dyn SuggestionProvider<S>>>,
}

impl<S> ArgumentNode<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parser(&self) -> &Arc<dyn ArgumentParser<S>> {
        &self.parser
    }

    pub fn default_value(&self) -> Option<&ArgumentValue> {
        self.default_value.as_ref()
    }

    pub fn has_custom_suggestions(&self) -> bool {
        self.suggestions.is_some()
    }
}

/// What a node matches
pub enum NodeKind<S> {
    Root,
    Literal(LiteralNode<S>),
    Argument(ArgumentNode<S>),
}

/// Everything a builder decides about a node apart from its kind and children
pub(crate) struct NodeSettings<S> {
    pub(crate) command: Option<Command<S>>,
    pub(crate) requirements: Vec<Requirement<S>>,
    pub(crate) redirect: Option<Arc<CommandNode<S>>>,
    pub(crate) modifier: Option<RedirectModifier<S>>,
    pub(crate) fork: bool,
    pub(crate) is_default: bool,
    pub(crate) description: Option<String>,
}

impl<S> Clone for NodeSettings<S> {
    fn clone(&self) -> Self {
        Self {
            command: self.command.clone(),
            requirements: self.requirements.clone(),
            redirect: self.redirect.clone(),
            modifier: self.modifier.clone(),
            fork: self.fork,
            is_default: self.is_default,
            description: self.description.clone(),
        }
    }
}

impl<S> Default for NodeSettings<S> {
    fn default() -> Self {
        Self {
            command: None,
            requirements: Vec::new(),
            redirect: None,
            modifier: None,
            fork: false,
            is_default: false,
            description: None,
        }
    }
}

/// A node of the command tree
///
/// Nodes are shared behind `Arc` and only ever grow or shrink through
/// [`add_child`](Self::add_child) and [`remove_child`](Self::remove_child),
/// which are safe to call while other threads parse against the same tree.
pub struct CommandNode<S> {
    id: NodeId,
    kind: NodeKind<S>,
    children: RwLock<Arc<Children<S>>>,
    command: RwLock<Option<Command<S>>>,
    requirements: Vec<Requirement<S>>,
    redirect: Option<Arc<CommandNode<S>>>,
    modifier: Option<RedirectModifier<S>>,
    fork: bool,
    is_default: bool,
    description: Option<String>,
}

impl<S: CommandSender> CommandNode<S> {
    /// A fresh tree root
    pub fn root() -> Arc<Self> {
        Arc::new(Self::with_settings(NodeKind::Root, NodeSettings::default()))
    }

    pub(crate) fn literal(
        literal: &str,
        aliases: Vec<Arc<CommandNode<S>>>,
        settings: NodeSettings<S>,
    ) -> Self {
        let kind = NodeKind::Literal(LiteralNode {
            literal: literal.to_lowercase(),
            aliases,
        });
        Self::with_settings(kind, settings)
    }

    pub(crate) fn argument(
        name: String,
        parser: Arc<dyn ArgumentParser<S>>,
        default_value: Option<ArgumentValue>,
        suggestions: Option<Arc<dyn SuggestionProvider<S>>>,
        settings: NodeSettings<S>,
    ) -> Self {
        let kind = NodeKind::Argument(ArgumentNode {
            name,
            parser,
            default_value,
            suggestions,
        });
        Self::with_settings(kind, settings)
    }

    fn with_settings(kind: NodeKind<S>, settings: NodeSettings<S>) -> Self {
        Self {
            id: NodeId::next(),
            kind,
            children: RwLock::new(Arc::new(Children::default())),
            command: RwLock::new(settings.command),
            requirements: settings.requirements,
            redirect: settings.redirect,
            modifier: settings.modifier,
            fork: settings.fork,
            is_default: settings.is_default,
            description: settings.description,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    /// The literal text, the argument name, or `""` for the root
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Root => "",
            NodeKind::Literal(literal) => &literal.literal,
            NodeKind::Argument(argument) => &argument.name,
        }
    }

    /// Key under which the node is stored by its parent
    pub fn key(&self) -> &str {
        self.name()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal(_))
    }

    pub fn is_argument(&self) -> bool {
        matches!(self.kind, NodeKind::Argument(_))
    }

    pub fn as_literal(&self) -> Option<&LiteralNode<S>> {
        match &self.kind {
            NodeKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_argument(&self) -> Option<&ArgumentNode<S>> {
        match &self.kind {
            NodeKind::Argument(argument) => Some(argument),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn command(&self) -> Option<Command<S>> {
        self.command.read().clone()
    }

    pub fn has_command(&self) -> bool {
        self.command.read().is_some()
    }

    pub fn set_command(&self, command: Option<Command<S>>) {
        *self.command.write() = command;
    }

    pub fn requirements(&self) -> &[Requirement<S>] {
        &self.requirements
    }

    /// Whether every requirement accepts `sender`
    pub fn can_use(&self, sender: &S) -> bool {
        self.requirements.iter().all(|requirement| requirement(sender))
    }

    pub fn redirect(&self) -> Option<&Arc<CommandNode<S>>> {
        self.redirect.as_ref()
    }

    pub fn redirect_modifier(&self) -> Option<&RedirectModifier<S>> {
        self.modifier.as_ref()
    }

    pub fn is_fork(&self) -> bool {
        self.fork
    }

    /// Whether this node may match when the input is already exhausted
    pub fn is_default_node(&self) -> bool {
        self.is_default
    }

    pub(crate) fn snapshot(&self) -> Arc<Children<S>> {
        self.children.read().clone()
    }

    /// Current children in registration order
    pub fn children(&self) -> Vec<Arc<CommandNode<S>>> {
        self.snapshot().values().cloned().collect()
    }

    pub fn child(&self, key: &str) -> Option<Arc<CommandNode<S>>> {
        self.snapshot().get(key).cloned()
    }

    pub fn has_children(&self) -> bool {
        !self.snapshot().is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.snapshot().len()
    }

    /// The child used when the input runs out here
    pub fn default_child(&self) -> Option<Arc<CommandNode<S>>> {
        self.snapshot().default_child().cloned()
    }

    /// Register `node` below this one
    ///
    /// A literal's aliases are registered alongside it. A child with the same
    /// key is merged instead of replaced: it takes over the new command when
    /// there is one and absorbs the new children recursively.
    pub fn add_child(&self, node: Arc<CommandNode<S>>) -> ThicketResult<()> {
        if node.is_root() {
            return Err(ThicketError::registration(
                "Cannot add a root node as a child of another node",
            ));
        }
        if self.redirect.is_some() {
            return Err(ThicketError::registration_for(
                self.name(),
                "Cannot add children to a redirected node",
            ));
        }
        if let NodeKind::Literal(literal) = &node.kind {
            for alias in &literal.aliases {
                self.add_child(Arc::clone(alias))?;
            }
        }

        let existing = {
            let mut guard = self.children.write();
            match guard.get(node.key()) {
                Some(existing) => Some(Arc::clone(existing)),
                None => {
                    if node.is_default_node() && guard.default_child().is_some() {
                        return Err(ThicketError::registration_for(
                            node.name(),
                            "Cannot add multiple default nodes as child of one node",
                        ));
                    }
                    let mut next = Children::clone(&**guard);
                    next.insert(Arc::clone(&node));
                    *guard = Arc::new(next);
                    None
                }
            }
        };

        match existing {
            Some(existing) => {
                debug!(parent = %self.name(), child = %node.name(), "merging into existing child");
                existing.absorb(&node)
            }
            None => {
                debug!(parent = %self.name(), child = %node.name(), "registered child");
                Ok(())
            }
        }
    }

    fn absorb(&self, other: &CommandNode<S>) -> ThicketResult<()> {
        if std::ptr::eq(self, other) {
            return Ok(());
        }
        if let Some(command) = other.command() {
            self.set_command(Some(command));
        }
        for child in other.children() {
            self.add_child(child)?;
        }
        Ok(())
    }

    /// Remove the child stored under `key`
    pub fn remove_child(&self, key: &str) -> Option<Arc<CommandNode<S>>> {
        let mut guard = self.children.write();
        guard.get(key)?;
        let mut next = Children::clone(&**guard);
        let removed = next.remove(key);
        *guard = Arc::new(next);
        debug!(parent = %self.name(), child = %key, "removed child");
        removed
    }

    /// Children worth attempting at the reader's position
    ///
    /// An exhausted reader selects the default child alone. Otherwise an
    /// exact literal match on the next token wins outright, and only without
    /// one are the argument children tried, in registration order.
    pub fn relevant_nodes(&self, reader: &TextReader) -> Vec<Arc<CommandNode<S>>> {
        let children = self.snapshot();
        if !reader.can_read() {
            if let Some(default) = children.default_child() {
                return vec![Arc::clone(default)];
            }
        }
        if children.has_literals() {
            if let Some(literal) = children.literal(reader.peek_token()) {
                return vec![Arc::clone(literal)];
            }
        }
        children.arguments().cloned().collect()
    }

    /// Dry-run match of `input` against this node alone
    pub fn is_valid_input(&self, input: &str) -> bool {
        let mut reader = TextReader::new(input);
        match &self.kind {
            NodeKind::Root => false,
            NodeKind::Literal(literal) => self.match_literal(&literal.literal, &mut reader).is_some(),
            NodeKind::Argument(argument) => {
                argument.parser.parse_value(&mut reader).is_ok()
                    && (!reader.can_read() || reader.peek() == Some(' '))
            }
        }
    }

    /// Consume this node's token and record it in `builder`
    pub fn parse(
        self: &Arc<Self>,
        reader: &mut TextReader,
        builder: &mut CommandContextBuilder<S>,
    ) -> SyntaxResult<()> {
        let start = reader.cursor();
        match &self.kind {
            NodeKind::Root => Ok(()),
            NodeKind::Literal(literal) => match self.match_literal(&literal.literal, reader) {
                Some(end) => {
                    builder.with_node(Arc::clone(self), TextRange::between(start, end));
                    Ok(())
                }
                None => Err(reader.error(ErrorKind::LiteralIncorrect {
                    expected: literal.literal.clone(),
                })),
            },
            NodeKind::Argument(argument) => {
                let value = if reader.can_read() || !self.is_default {
                    argument.parser.parse_value(reader)?
                } else {
                    argument.default_value.clone().ok_or_else(|| {
                        reader.error(ErrorKind::DispatcherParseException {
                            message: format!("no value given for '{}'", argument.name),
                        })
                    })?
                };
                let range = TextRange::between(start, reader.cursor());
                builder.with_argument(
                    &argument.name,
                    ParsedArgument::new(range, value, argument.parser.value_type_name()),
                );
                builder.with_node(Arc::clone(self), range);
                Ok(())
            }
        }
    }

    /// Offset just past the literal when it matches at the cursor
    fn match_literal(&self, literal: &str, reader: &mut TextReader) -> Option<usize> {
        let start = reader.cursor();
        if reader.remaining().starts_with(literal) {
            let end = start + literal.len();
            reader.set_cursor(end);
            if !reader.can_read() || reader.peek() == Some(' ') {
                return Some(end);
            }
            reader.set_cursor(start);
        } else if !reader.can_read() && self.is_default {
            return Some(start);
        }
        None
    }

    /// Completions this node offers for `builder`'s remaining input
    pub fn suggestions<'a>(
        &'a self,
        context: &'a CommandContext<S>,
        mut builder: SuggestionsBuilder,
    ) -> SuggestionFuture<'a> {
        match &self.kind {
            NodeKind::Root => futures::future::ready(Ok(Suggestions::empty())).boxed(),
            NodeKind::Literal(literal) => {
                let suggestions = if literal.literal.starts_with(&builder.remaining_lowercase()) {
                    builder.suggest(literal.literal.as_str()).build()
                } else {
                    Suggestions::empty()
                };
                futures::future::ready(Ok(suggestions)).boxed()
            }
            NodeKind::Argument(argument) => match &argument.suggestions {
                Some(provider) => provider.suggestions(context, builder),
                None => argument.parser.list_suggestions(context, builder),
            },
        }
    }

    /// How the node is shown in usage strings
    pub fn usage_text(&self) -> String {
        match &self.kind {
            NodeKind::Root => String::new(),
            NodeKind::Literal(literal) => literal.literal.clone(),
            NodeKind::Argument(argument) => {
                format!("{}{}{}", USAGE_ARGUMENT_OPEN, argument.name, USAGE_ARGUMENT_CLOSE)
            }
        }
    }

    /// Sample inputs this node accepts
    pub fn examples(&self) -> Vec<String> {
        match &self.kind {
            NodeKind::Root => Vec::new(),
            NodeKind::Literal(literal) => vec![literal.literal.clone()],
            NodeKind::Argument(argument) => argument.parser.argument_examples(),
        }
    }
}

impl<S> fmt::Display for CommandNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Root => f.write_str("<root>"),
            NodeKind::Literal(literal) => write!(f, "<literal {}>", literal.literal),
            NodeKind::Argument(argument) => {
                write!(f, "<argument {}:{:?}>", argument.name, argument.parser)
            }
        }
    }
}

impl<S> fmt::Debug for CommandNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("id", &self.id)
            .field("node", &format_args!("{}", self))
            .field("fork", &self.fork)
            .field("is_default", &self.is_default)
            .field("redirect", &self.redirect.as_ref().map(|node| node.id))
            .finish_non_exhaustive()
    }
}
