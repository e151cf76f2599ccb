//! Usage command implementation

use anyhow::anyhow;
use thicket_core::dispatcher::CommandDispatcher;

use crate::console::CliConsole;
use crate::demo::DemoSender;

/// Print usage for the node at `path`
pub fn usage(
    dispatcher: &CommandDispatcher<DemoSender>,
    console: &CliConsole,
    path: &[String],
    sender: &DemoSender,
    all: bool,
) -> anyhow::Result<()> {
    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
    let node = dispatcher
        .find_node(&segments)
        .ok_or_else(|| anyhow!("no command at '{}'", segments.join(" ")))?;

    let prefix = dispatcher.path_of(&node).join(" ");
    let join = |usage: &str| {
        if prefix.is_empty() {
            usage.to_string()
        } else {
            format!("{} {}", prefix, usage)
        }
    };

    console.print_header(if prefix.is_empty() { "Commands" } else { &prefix });
    if all {
        let restricted = dispatcher.config().restricted_usage;
        for line in dispatcher.all_usage(&node, sender, restricted) {
            console.print_item(&join(&line));
        }
    } else {
        for (child, line) in dispatcher.smart_usage(&node, sender) {
            match child.description() {
                Some(description) => console.print_field(&join(&line), description),
                None => console.print_item(&join(&line)),
            }
        }
    }
    Ok(())
}
