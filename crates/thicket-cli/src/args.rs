//! CLI argument definitions using clap
//!
//! - thicket parse "tp 1 2 3"          # Show how input resolves
//! - thicket parse --run "say hi"      # Resolve and execute
//! - thicket suggest "give ap"         # Completions at the end of the input
//! - thicket usage execute             # Usage below a node
//! - thicket repl                      # Line loop over stdin

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "thicket.toml";

#[derive(Parser, Debug)]
#[command(name = "thicket")]
#[command(about = "Inspect how a command tree parses, completes and describes input")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML or JSON)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "THICKET_CONFIG")]
    pub config: PathBuf,

    /// Name of the sender issuing commands
    #[arg(long = "as", global = true, default_value = "console")]
    pub sender: String,

    /// Permission level of the sender
    #[arg(long, global = true, default_value_t = 4)]
    pub level: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse input and print the matched nodes and arguments
    Parse {
        /// Command line to parse
        input: String,

        /// Execute the resolved command
        #[arg(long)]
        run: bool,
    },

    /// List completions for input
    Suggest {
        /// Partial command line
        input: String,

        /// Byte offset to complete at (defaults to the end of the input)
        #[arg(long)]
        cursor: Option<usize>,
    },

    /// Print usage for the node at PATH (the root when omitted)
    Usage {
        path: Vec<String>,

        /// Show every runnable path instead of one condensed line per child
        #[arg(long)]
        all: bool,
    },

    /// Read commands from stdin; prefix a line with `?` to complete it
    Repl,
}
