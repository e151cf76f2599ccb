//! Subcommand implementations

pub mod parse;
pub mod repl;
pub mod suggest;
pub mod usage;
