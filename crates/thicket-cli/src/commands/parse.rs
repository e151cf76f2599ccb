//! Parse command implementation

use thicket_core::context::CommandContext;
use thicket_core::dispatcher::CommandDispatcher;

use crate::console::CliConsole;
use crate::demo::{self, DemoSender};

/// Resolve `input` and describe the outcome; returns whether it resolved
pub fn parse(
    dispatcher: &CommandDispatcher<DemoSender>,
    console: &CliConsole,
    input: &str,
    sender: DemoSender,
    run: bool,
) -> bool {
    let parse = dispatcher.parse(input, sender);
    let context = match dispatcher.resolve(&parse) {
        Ok(context) => context,
        Err(error) => {
            console.syntax_error(&error);
            for failure in parse.exceptions().values() {
                console.print_item(&format!("{} rejected: {}", failure.node, failure.error.raw_message()));
            }
            return false;
        }
    };

    describe(console, &context);
    if run {
        match demo::execute(&context) {
            Ok(result) => {
                for message in &result.messages {
                    console.success(message);
                }
                console.print_field("result", &result.value.to_string());
            }
            Err(error) => console.syntax_error(&error),
        }
    }
    true
}

fn describe(console: &CliConsole, context: &CommandContext<DemoSender>) {
    console.print_header("Matched");
    for parsed in context.flatten_nodes() {
        console.print_item(&format!(
            "{} {} '{}'",
            parsed.node(),
            parsed.range(),
            parsed.range().get(context.input())
        ));
    }

    let mut current = Some(context);
    while let Some(level) = current {
        for (name, argument) in level.arguments() {
            console.print_field(
                name,
                &format!("{} ({})", argument.range().get(context.input()), argument.type_name()),
            );
        }
        if level.is_forked() {
            console.warn("forks into one execution per sender");
        }
        current = level.child();
    }

    if context.last_child().command().is_none() {
        console.warn("no command bound");
    }
}
