//! Thicket
//!
//! Command tree parsing and dispatch. Build a tree of literal and argument
//! nodes, parse input against it with cursor-exact errors, and ask it for
//! completions at any cursor position.
//!
//! ```ignore
//! use thicket::prelude::*;
//!
//! let dispatcher = CommandDispatcher::<()>::new();
//! dispatcher.register(
//!     literal("tp").then(argument("x", integer()).executes(|context| {
//!         let x = context.argument::<i32>("x").copied().unwrap_or_default();
//!         Ok(CommandResult::of(x))
//!     })),
//! )?;
//! let context = dispatcher.dispatch("tp 5", ())?;
//! ```

pub use thicket_core::*;

/// Everything needed to declare and dispatch a command tree
pub mod prelude {
    pub use thicket_core::arguments::{
        boolean, double, double_between, double_min, float, float_between, float_min,
        greedy_string, integer, integer_between, integer_min, long, long_between, long_min,
        string, term, word,
    };
    pub use thicket_core::command::{CommandResult, CommandSender};
    pub use thicket_core::context::CommandContext;
    pub use thicket_core::dispatcher::{CommandDispatcher, ParseResults};
    pub use thicket_core::error::{CommandSyntaxError, ErrorKind, SyntaxResult};
    pub use thicket_core::suggestion::{ListSuggestions, Suggestions, SuggestionsBuilder};
    pub use thicket_core::tree::{NodeBuilder, argument, literal};
}
