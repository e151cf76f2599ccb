use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::arguments::ArgumentValue;
use crate::range::TextRange;
use crate::tree::CommandNode;

/// A value bound to an argument name, with the input it was read from
#[derive(Clone)]
pub struct ParsedArgument {
    range: TextRange,
    value: ArgumentValue,
    type_name: &'static str,
}

impl ParsedArgument {
    pub fn new(range: TextRange, value: ArgumentValue, type_name: &'static str) -> Self {
        Self {
            range,
            value,
            type_name,
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// The value, if it has type `T`
    pub fn get<T: Any>(&self) -> Option<&T> {
        let value: &(dyn Any + Send + Sync) = self.value.as_ref();
        value.downcast_ref::<T>()
    }

    /// Name of the value's type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ParsedArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArgument")
            .field("range", &self.range)
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A matched node and the input it consumed
pub struct ParsedNode<S> {
    node: Arc<CommandNode<S>>,
    range: TextRange,
}

impl<S> ParsedNode<S> {
    pub fn new(node: Arc<CommandNode<S>>, range: TextRange) -> Self {
        Self { node, range }
    }

    pub fn node(&self) -> &Arc<CommandNode<S>> {
        &self.node
    }

    pub fn range(&self) -> TextRange {
        self.range
    }
}

impl<S> Clone for ParsedNode<S> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            range: self.range,
        }
    }
}

impl<S> fmt::Debug for ParsedNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.node, self.range)
    }
}
