//! Thicket Core Library
//!
//! This crate provides the command tree, the recursive-descent parser and
//! dispatcher that walks it, cursor-exact syntax errors, and the async
//! completion engine.

pub mod arguments;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod range;
pub mod reader;
pub mod suggestion;
pub mod tree;

// Re-export commonly used types
pub use arguments::{ArgumentParser, ArgumentType, ArgumentValue};
pub use command::{Command, CommandResult, CommandSender, RedirectModifier, Requirement};
pub use config::{DispatcherConfig, LogFormat, LoggingConfig};
pub use context::{CommandContext, CommandContextBuilder, ParsedArgument, ParsedNode, SuggestionContext};
pub use dispatcher::{CommandDispatcher, ParseFailure, ParseResults};
pub use error::{CommandSyntaxError, ErrorKind, SyntaxResult, ThicketError, ThicketResult, UnifiedError};
pub use range::TextRange;
pub use reader::TextReader;
pub use suggestion::{Suggestion, SuggestionProvider, Suggestions, SuggestionsBuilder};
pub use tree::{ArgumentBuilder, CommandNode, LiteralBuilder, NodeBuilder, NodeId, NodeKind, argument, literal};
