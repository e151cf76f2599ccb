//! Copy-on-write child table
//!
//! Writers clone the table, edit the clone and swap it in under the write
//! lock. Readers take the read lock only long enough to clone the `Arc`, so a
//! parse in flight keeps a consistent snapshot for as long as it needs one.

use indexmap::IndexMap;
use std::sync::Arc;

use super::node::CommandNode;
use crate::command::CommandSender;

pub(crate) struct Children<S> {
    /// Every child by key, in registration order
    all: IndexMap<String, Arc<CommandNode<S>>>,
    literals: IndexMap<String, Arc<CommandNode<S>>>,
    arguments: IndexMap<String, Arc<CommandNode<S>>>,
    default: Option<Arc<CommandNode<S>>>,
}

impl<S> Clone for Children<S> {
    fn clone(&self) -> Self {
        Self {
            all: self.all.clone(),
            literals: self.literals.clone(),
            arguments: self.arguments.clone(),
            default: self.default.clone(),
        }
    }
}

impl<S> Default for Children<S> {
    fn default() -> Self {
        Self {
            all: IndexMap::new(),
            literals: IndexMap::new(),
            arguments: IndexMap::new(),
            default: None,
        }
    }
}

impl<S: CommandSender> Children<S> {
    pub(crate) fn get(&self, key: &str) -> Option<&Arc<CommandNode<S>>> {
        self.all.get(key)
    }

    pub(crate) fn literal(&self, key: &str) -> Option<&Arc<CommandNode<S>>> {
        self.literals.get(key)
    }

    pub(crate) fn has_literals(&self) -> bool {
        !self.literals.is_empty()
    }

    pub(crate) fn arguments(&self) -> impl Iterator<Item = &Arc<CommandNode<S>>> {
        self.arguments.values()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Arc<CommandNode<S>>> {
        self.all.values()
    }

    pub(crate) fn default_child(&self) -> Option<&Arc<CommandNode<S>>> {
        self.default.as_ref()
    }

    pub(crate) fn len(&self) -> usize {
        self.all.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Insert a child whose key is not present yet
    pub(crate) fn insert(&mut self, node: Arc<CommandNode<S>>) {
        let key = node.key().to_string();
        if node.is_default_node() {
            self.default = Some(Arc::clone(&node));
        }
        if node.is_literal() {
            self.literals.insert(key.clone(), Arc::clone(&node));
        } else if node.is_argument() {
            self.arguments.insert(key.clone(), Arc::clone(&node));
        }
        self.all.insert(key, node);
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Arc<CommandNode<S>>> {
        let removed = self.all.shift_remove(key)?;
        self.literals.shift_remove(key);
        self.arguments.shift_remove(key);
        if self
            .default
            .as_ref()
            .is_some_and(|default| Arc::ptr_eq(default, &removed))
        {
            self.default = None;
        }
        Some(removed)
    }
}
