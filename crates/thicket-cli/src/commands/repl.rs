//! Interactive line loop

use tokio::io::{AsyncBufReadExt, BufReader};
use thicket_core::dispatcher::CommandDispatcher;

use super::{parse, suggest};
use crate::console::CliConsole;
use crate::demo::DemoSender;

/// Run each stdin line as a command; `?input` lists completions instead
pub async fn repl(
    dispatcher: &CommandDispatcher<DemoSender>,
    console: &CliConsole,
    sender: DemoSender,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        match line.strip_prefix('?') {
            Some(partial) => suggest::suggest(dispatcher, console, partial, sender.clone(), None).await?,
            None => {
                parse::parse(dispatcher, console, line, sender.clone(), true);
            }
        }
    }
    Ok(())
}
