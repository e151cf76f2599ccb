//! CLI console utilities

use colored::*;
use thicket_core::error::{CommandSyntaxError, HERE_MARKER};

/// Formatted terminal output
pub struct CliConsole {
    error_context: usize,
}

impl CliConsole {
    pub const fn new(error_context: usize) -> Self {
        Self { error_context }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a key/value line
    pub fn print_field(&self, key: &str, value: &str) {
        println!("  {} {}", format!("{key}:").cyan(), value);
    }

    pub fn print_item(&self, text: &str) {
        println!("  {} {}", "•".dimmed(), text);
    }

    /// Print a syntax error with the offending position marked
    pub fn syntax_error(&self, error: &CommandSyntaxError) {
        self.error(&error.render(self.error_context));
        if let (Some(input), Some(cursor)) = (error.input(), error.cursor()) {
            let cursor = cursor.min(input.len());
            if input.is_char_boundary(cursor) {
                let (before, after) = input.split_at(cursor);
                eprintln!("  {}{}{}", before, HERE_MARKER.red().bold(), after.dimmed());
            }
        }
    }
}
