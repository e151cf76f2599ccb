//! Demonstration command tree and a small executor for it

use std::sync::Arc;
use thicket_core::arguments::{double, greedy_string, integer_between, integer_min, string, term, word};
use thicket_core::command::CommandResult;
use thicket_core::config::DispatcherConfig;
use thicket_core::context::CommandContext;
use thicket_core::dispatcher::CommandDispatcher;
use thicket_core::error::{SyntaxResult, ThicketResult};
use thicket_core::suggestion::ListSuggestions;
use thicket_core::tree::{NodeBuilder, argument, literal};
use tracing::debug;

const ITEMS: &[&str] = &["apple", "arrow", "bread", "diamond", "torch"];

/// Who is issuing commands in the demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSender {
    pub name: String,
    pub level: u32,
}

impl DemoSender {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

type Context = CommandContext<DemoSender>;

fn tp(context: &Context) -> SyntaxResult<CommandResult> {
    let coordinate = |name: &str| context.argument::<f64>(name).copied().unwrap_or_default();
    Ok(CommandResult::success().with_message(format!(
        "Teleported {} to {:.1} {:.1} {:.1}",
        context.sender().name,
        coordinate("x"),
        coordinate("y"),
        coordinate("z")
    )))
}

fn give(context: &Context) -> SyntaxResult<CommandResult> {
    let item = context.argument::<String>("item").map(String::as_str).unwrap_or("nothing");
    let count = context.argument::<i32>("count").copied().unwrap_or(1);
    Ok(CommandResult::of(count).with_message(format!(
        "Gave {} {} to {}",
        count,
        item,
        context.sender().name
    )))
}

fn say(context: &Context) -> SyntaxResult<CommandResult> {
    let message = context.argument::<String>("message").map(String::as_str).unwrap_or_default();
    Ok(CommandResult::success().with_message(format!("[{}] {}", context.sender().name, message)))
}

fn time_set(context: &Context) -> SyntaxResult<CommandResult> {
    let ticks = context.argument::<i32>("ticks").copied().unwrap_or_default();
    Ok(CommandResult::of(ticks).with_message(format!("Set the time to {}", ticks)))
}

fn time_query(context: &Context) -> SyntaxResult<CommandResult> {
    let what = context.argument::<String>("what").map(String::as_str).unwrap_or("daytime");
    Ok(CommandResult::success().with_message(format!("Queried {}", what)))
}

fn op(context: &Context) -> SyntaxResult<CommandResult> {
    let player = context.argument::<String>("player").map(String::as_str).unwrap_or_default();
    Ok(CommandResult::success().with_message(format!("Made {} a server operator", player)))
}

/// One sender per whitespace-separated name, keeping the issuer's level
fn senders_named(context: &Context) -> SyntaxResult<Vec<DemoSender>> {
    let names = context.argument::<String>("targets").map(String::as_str).unwrap_or_default();
    let level = context.sender().level;
    Ok(names
        .split_whitespace()
        .map(|name| DemoSender::new(name, level))
        .collect())
}

/// The demo tree: tp, give, say, time, op and execute
pub fn build_dispatcher(config: DispatcherConfig) -> ThicketResult<CommandDispatcher<DemoSender>> {
    let dispatcher = CommandDispatcher::with_config(config);
    let root = Arc::clone(dispatcher.root());

    dispatcher.register(
        literal("tp")
            .alias("teleport")
            .description("Move the sender to a position")
            .then(argument("x", double()).then(
                argument("y", double()).then(argument("z", double()).executes(tp)),
            )),
    )?;

    dispatcher.register(
        literal("give")
            .description("Hand out items")
            .then(
                argument("item", word())
                    .suggests(ListSuggestions::new(ITEMS.iter().copied()))
                    .then(
                        argument("count", integer_between(1, 64))
                            .default_value(1)
                            .default_node()
                            .executes(give),
                    ),
            ),
    )?;

    dispatcher.register(
        literal("say")
            .description("Broadcast a message")
            .then(argument("message", greedy_string()).executes(say)),
    )?;

    dispatcher.register(
        literal("time")
            .description("Inspect or change the time of day")
            .then(literal("set").then(argument("ticks", integer_min(0)).executes(time_set)))
            .then(
                literal("query")
                    .then(argument("what", term(["daytime", "gametime", "day"])).executes(time_query)),
            ),
    )?;

    dispatcher.register(
        literal("op")
            .description("Grant operator status")
            .requires(|sender: &DemoSender| sender.level >= 3)
            .then(argument("player", word()).executes(op)),
    )?;

    let execute = dispatcher.register(
        literal("execute")
            .description("Run a command as other senders")
            .then(literal("run").redirect(Arc::clone(&root))),
    )?;
    dispatcher.register(
        literal("execute").then(literal("as").then(argument("targets", string()).fork(execute, senders_named))),
    )?;

    debug!(commands = root.child_count(), "demo tree built");
    Ok(dispatcher)
}

/// Run a resolved context, fanning out over forked senders
///
/// Once any level of the chain forks, failures are dropped; before that they
/// abort the run.
pub fn execute(context: &Context) -> SyntaxResult<CommandResult> {
    let mut forked = false;
    let mut result = CommandResult::empty();
    let mut contexts = vec![context.clone()];

    while !contexts.is_empty() {
        let mut next = Vec::new();
        for current in contexts {
            if let Some(child) = current.child() {
                forked |= current.is_forked();
                let senders = match current.redirect_modifier() {
                    Some(modifier) => match modifier(&current) {
                        Ok(senders) => senders,
                        Err(error) if forked => {
                            debug!(%error, "dropping failed fork");
                            continue;
                        }
                        Err(error) => return Err(error),
                    },
                    None => vec![current.sender().clone()],
                };
                next.extend(senders.into_iter().map(|sender| child.copy_for(sender)));
            } else if let Some(command) = current.command() {
                match command.run(&current) {
                    Ok(outcome) => result = result.merge(outcome),
                    Err(error) if forked => debug!(%error, "dropping failed forked command"),
                    Err(error) => return Err(error),
                }
            }
        }
        contexts = next;
    }

    Ok(result)
}
