//! Callback types attached to command nodes
//!
//! The tree only stores these; executing them is left to the caller that
//! receives a resolved [`CommandContext`].

mod result;

pub use result::CommandResult;

use std::fmt;
use std::sync::Arc;

use crate::context::CommandContext;
use crate::error::SyntaxResult;

/// Anything that can issue commands
///
/// Senders are cloned into every forked context, so they should be cheap to
/// clone (an id, an `Arc`, ...).
pub trait CommandSender: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> CommandSender for T {}

type CommandFn<S> = dyn Fn(&CommandContext<S>) -> SyntaxResult<CommandResult> + Send + Sync;

/// Executor callback bound to a node
pub struct Command<S> {
    inner: Arc<CommandFn<S>>,
}

impl<S> Command<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&CommandContext<S>) -> SyntaxResult<CommandResult> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Invoke the callback
    pub fn run(&self, context: &CommandContext<S>) -> SyntaxResult<CommandResult> {
        (self.inner)(context)
    }

    /// Whether both handles point at the same callback
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> Clone for Command<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for Command<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<S> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command({:p})", Arc::as_ptr(&self.inner).cast::<()>())
    }
}

/// Predicate deciding whether a sender may use a node
pub type Requirement<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// Produces the senders a redirect continues with
///
/// A non-forking redirect expects exactly one sender back; a fork runs the
/// rest of the command once per returned sender.
pub type RedirectModifier<S> =
    Arc<dyn Fn(&CommandContext<S>) -> SyntaxResult<Vec<S>> + Send + Sync>;
