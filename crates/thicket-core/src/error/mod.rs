//! Error types for Thicket
//!
//! Two layers:
//! - [`CommandSyntaxError`]: a `{kind, input, cursor}` value raised while
//!   reading user input. It is recovered locally by the parse loop and only
//!   surfaces to callers through dispatch resolution.
//! - [`ThicketError`]: tree construction, configuration and lookup failures.
//!
//! Both implement [`UnifiedError`] for consistent error codes.

mod constructors;
mod kind;
mod syntax;
mod types;
mod unified_error;

pub use kind::ErrorKind;
pub use syntax::{CONTEXT_AMOUNT, CommandSyntaxError, HERE_MARKER, SyntaxResult};
pub use types::{ThicketError, ThicketResult, UnifiedError};

#[cfg(test)]
mod tests;
