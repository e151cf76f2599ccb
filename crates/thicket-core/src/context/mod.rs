//! Parse state
//!
//! [`CommandContextBuilder`] accumulates matches while the dispatcher walks
//! the tree; [`CommandContext`] is the frozen result handed to executors.

mod builder;
mod command_context;
mod parsed;

pub use builder::{CommandContextBuilder, SuggestionContext};
pub use command_context::CommandContext;
pub use parsed::{ParsedArgument, ParsedNode};
