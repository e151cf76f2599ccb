//! Command routing logic for CLI

use thicket_core::config::DispatcherConfig;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use crate::demo::{self, DemoSender};

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: DispatcherConfig) -> anyhow::Result<()> {
    let console = CliConsole::new(config.error_context);
    let dispatcher = demo::build_dispatcher(config)?;
    let sender = DemoSender::new(cli.sender, cli.level);

    match cli.command {
        Commands::Parse { input, run } => {
            if commands::parse::parse(&dispatcher, &console, &input, sender, run) {
                Ok(())
            } else {
                anyhow::bail!("'{}' did not resolve to a command", input)
            }
        }
        Commands::Suggest { input, cursor } => {
            commands::suggest::suggest(&dispatcher, &console, &input, sender, cursor).await
        }
        Commands::Usage { path, all } => commands::usage::usage(&dispatcher, &console, &path, &sender, all),
        Commands::Repl => commands::repl::repl(&dispatcher, &console, sender).await,
    }
}
