//! Fluent node builders
//!
//! Builders never panic. The first rule a chain breaks is remembered and
//! returned from [`NodeBuilder::build`].

use std::sync::Arc;

use super::node::{CommandNode, NodeSettings};
use crate::arguments::{ArgumentType, ArgumentValue};
use crate::command::{Command, CommandResult, CommandSender, RedirectModifier};
use crate::context::CommandContext;
use crate::error::{SyntaxResult, ThicketError, ThicketResult};
use crate::suggestion::SuggestionProvider;

/// State shared by every builder
pub struct BuilderState<S> {
    children: Arc<CommandNode<S>>,
    settings: NodeSettings<S>,
    error: Option<ThicketError>,
}

impl<S: CommandSender> BuilderState<S> {
    fn new() -> Self {
        Self {
            children: CommandNode::root(),
            settings: NodeSettings::default(),
            error: None,
        }
    }

    fn fail(&mut self, error: ThicketError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn add(&mut self, name: &str, node: ThicketResult<Arc<CommandNode<S>>>) {
        if self.error.is_some() {
            return;
        }
        let node = match node {
            Ok(node) => node,
            Err(error) => return self.fail(error),
        };
        if self.settings.redirect.is_some() {
            return self.fail(ThicketError::registration_for(
                name,
                "Cannot add children to a redirected node",
            ));
        }
        if let Err(error) = self.children.add_child(node) {
            self.fail(error);
        }
    }

    fn forward(
        &mut self,
        name: &str,
        target: Arc<CommandNode<S>>,
        modifier: Option<RedirectModifier<S>>,
        fork: bool,
    ) {
        if self.children.has_children() {
            return self.fail(ThicketError::registration_for(
                name,
                "Cannot forward a node with children",
            ));
        }
        self.settings.redirect = Some(target);
        self.settings.modifier = modifier;
        self.settings.fork = fork;
    }

    /// Attach the collected children to `node` and hand it out
    fn finish(self, node: CommandNode<S>) -> ThicketResult<Arc<CommandNode<S>>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let node = Arc::new(node);
        for child in self.children.children() {
            node.add_child(child)?;
        }
        Ok(node)
    }
}

/// Configuration shared by literal and argument builders
pub trait NodeBuilder<S: CommandSender>: Sized {
    #[doc(hidden)]
    fn state(&mut self) -> &mut BuilderState<S>;

    /// Display name used in registration errors
    fn node_name(&self) -> &str;

    fn build(self) -> ThicketResult<Arc<CommandNode<S>>>;

    /// Add a child built from another builder
    fn then<B: NodeBuilder<S>>(mut self, child: B) -> Self {
        let name = self.node_name().to_string();
        self.state().add(&name, child.build());
        self
    }

    /// Add an already built node as a child
    fn then_node(mut self, node: Arc<CommandNode<S>>) -> Self {
        let name = self.node_name().to_string();
        self.state().add(&name, Ok(node));
        self
    }

    fn executes<F>(mut self, command: F) -> Self
    where
        F: Fn(&CommandContext<S>) -> SyntaxResult<CommandResult> + Send + Sync + 'static,
    {
        self.state().settings.command = Some(Command::new(command));
        self
    }

    fn command(mut self, command: Command<S>) -> Self {
        self.state().settings.command = Some(command);
        self
    }

    /// Add a sender predicate; all of them must pass
    fn requires<F>(mut self, requirement: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.state().settings.requirements.push(Arc::new(requirement));
        self
    }

    fn description(mut self, description: impl Into<String>) -> Self {
        self.state().settings.description = Some(description.into());
        self
    }

    /// Mark the node as the one used when the input runs out at its parent
    fn default_node(mut self) -> Self {
        self.state().settings.is_default = true;
        self
    }

    /// Continue parsing at `target` once this node matched
    fn redirect(mut self, target: Arc<CommandNode<S>>) -> Self {
        let name = self.node_name().to_string();
        self.state().forward(&name, target, None, false);
        self
    }

    /// Redirect, replacing the sender with the one `modifier` returns
    fn redirect_with<F>(mut self, target: Arc<CommandNode<S>>, modifier: F) -> Self
    where
        F: Fn(&CommandContext<S>) -> SyntaxResult<S> + Send + Sync + 'static,
    {
        let name = self.node_name().to_string();
        let single: RedirectModifier<S> =
            Arc::new(move |context: &CommandContext<S>| Ok(vec![modifier(context)?]));
        self.state().forward(&name, target, Some(single), false);
        self
    }

    /// Redirect once per sender `modifier` returns
    fn fork<F>(mut self, target: Arc<CommandNode<S>>, modifier: F) -> Self
    where
        F: Fn(&CommandContext<S>) -> SyntaxResult<Vec<S>> + Send + Sync + 'static,
    {
        let name = self.node_name().to_string();
        self.state()
            .forward(&name, target, Some(Arc::new(modifier)), true);
        self
    }

    fn forward(
        mut self,
        target: Arc<CommandNode<S>>,
        modifier: Option<RedirectModifier<S>>,
        fork: bool,
    ) -> Self {
        let name = self.node_name().to_string();
        self.state().forward(&name, target, modifier, fork);
        self
    }
}

/// Builds a literal node and its aliases
pub struct LiteralBuilder<S> {
    literal: String,
    aliases: Vec<String>,
    state: BuilderState<S>,
}

/// Start a literal node; the text is lowercased
pub fn literal<S: CommandSender>(literal: impl Into<String>) -> LiteralBuilder<S> {
    LiteralBuilder {
        literal: literal.into().to_lowercase(),
        aliases: Vec::new(),
        state: BuilderState::new(),
    }
}

impl<S: CommandSender> LiteralBuilder<S> {
    /// Register the node under another name as well
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    pub fn aliases<I, T>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|alias| alias.into().to_lowercase()));
        self
    }
}

impl<S: CommandSender> NodeBuilder<S> for LiteralBuilder<S> {
    fn state(&mut self) -> &mut BuilderState<S> {
        &mut self.state
    }

    fn node_name(&self) -> &str {
        &self.literal
    }

    fn build(mut self) -> ThicketResult<Arc<CommandNode<S>>> {
        if let Some(error) = self.state.error.take() {
            return Err(error);
        }
        let children = self.state.children.children();
        let mut aliases = Vec::with_capacity(self.aliases.len());
        for alias in &self.aliases {
            let node = Arc::new(CommandNode::literal(alias, Vec::new(), self.state.settings.clone()));
            for child in &children {
                node.add_child(Arc::clone(child))?;
            }
            aliases.push(node);
        }
        let node = CommandNode::literal(&self.literal, aliases, self.state.settings.clone());
        self.state.finish(node)
    }
}

/// Builds an argument node for values of type `T`
pub struct ArgumentBuilder<S, T: ArgumentType> {
    name: String,
    argument_type: T,
    default_value: Option<T::Value>,
    suggestions: Option<Arc<dyn SuggestionProvider<S>>>,
    state: BuilderState<S>,
}

/// Start an argument node named `name`
pub fn argument<S: CommandSender, T: ArgumentType>(
    name: impl Into<String>,
    argument_type: T,
) -> ArgumentBuilder<S, T> {
    ArgumentBuilder {
        name: name.into(),
        argument_type,
        default_value: None,
        suggestions: None,
        state: BuilderState::new(),
    }
}

impl<S: CommandSender, T: ArgumentType> ArgumentBuilder<S, T> {
    /// Value bound when the node is reached as a default node with no input
    pub fn default_value(mut self, value: T::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Offer completions from `provider` instead of the argument type
    pub fn suggests<P>(mut self, provider: P) -> Self
    where
        P: SuggestionProvider<S> + 'static,
    {
        self.suggestions = Some(Arc::new(provider));
        self
    }
}

impl<S: CommandSender, T: ArgumentType> NodeBuilder<S> for ArgumentBuilder<S, T> {
    fn state(&mut self) -> &mut BuilderState<S> {
        &mut self.state
    }

    fn node_name(&self) -> &str {
        &self.name
    }

    fn build(self) -> ThicketResult<Arc<CommandNode<S>>> {
        let default_value = self
            .default_value
            .map(|value| -> ArgumentValue { Arc::new(value) });
        let node = CommandNode::argument(
            self.name,
            Arc::new(self.argument_type),
            default_value,
            self.suggestions,
            self.state.settings.clone(),
        );
        self.state.finish(node)
    }
}
