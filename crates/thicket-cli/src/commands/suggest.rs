//! Suggest command implementation

use colored::*;
use thicket_core::dispatcher::CommandDispatcher;

use crate::console::CliConsole;
use crate::demo::DemoSender;

/// Print completions for `input` at `cursor` (or its end)
pub async fn suggest(
    dispatcher: &CommandDispatcher<DemoSender>,
    console: &CliConsole,
    input: &str,
    sender: DemoSender,
    cursor: Option<usize>,
) -> anyhow::Result<()> {
    let parse = dispatcher.parse(input, sender);
    let cursor = cursor.unwrap_or(input.len());
    let suggestions = dispatcher.completion_suggestions_at(&parse, cursor).await?;

    if suggestions.is_empty() {
        console.warn("no suggestions");
        return Ok(());
    }

    console.print_header(&format!("Suggestions {}", suggestions.range()));
    for suggestion in &suggestions {
        let tooltip = suggestion
            .tooltip()
            .map(|tooltip| format!(" ({})", tooltip).dimmed().to_string())
            .unwrap_or_default();
        console.print_item(&format!(
            "{}{}  {} {}",
            suggestion.text().bold(),
            tooltip,
            "→".dimmed(),
            suggestion.apply(input)
        ));
    }
    Ok(())
}
