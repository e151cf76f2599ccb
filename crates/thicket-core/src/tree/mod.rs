//! The command tree
//!
//! A tree is made of [`CommandNode`]s of three kinds: the root, literals that
//! match one fixed keyword, and arguments that read a typed value. Nodes are
//! assembled with [`literal`] and [`argument`] builders and registered below
//! a root.

mod builder;
mod children;
mod node;

pub use builder::{ArgumentBuilder, BuilderState, LiteralBuilder, NodeBuilder, argument, literal};
pub use node::{ArgumentNode, CommandNode, LiteralNode, NodeId, NodeKind};

#[cfg(test)]
mod tests;
