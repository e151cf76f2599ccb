//! Thicket CLI application
//!
//! Builds a demonstration command tree and exposes the dispatcher through a
//! handful of subcommands: parse, suggest, usage and an interactive loop.

mod args;
mod commands;
mod console;
mod demo;
mod router;

use clap::Parser;
use thicket_core::config::{DispatcherConfig, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DispatcherConfig::load(&cli.config)?;
    init_logging(&config.logging);

    router::route(cli, config).await
}

/// Install the subscriber; RUST_LOG overrides the configured level
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match logging.log_format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
