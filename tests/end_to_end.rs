//! End-to-end tests through the public facade
//!
//! Each test builds a small tree with the prelude and drives it the way an
//! embedding application would.

use thicket::prelude::*;
use thicket::{Command, Suggestion, TextRange, TextReader};

type Level = u32;

fn tp_command() -> Command<Level> {
    Command::new(|context: &CommandContext<Level>| {
        let x = context.argument::<i32>("x").copied().unwrap_or_default();
        Ok(CommandResult::of(x))
    })
}

#[test]
fn test_tp_binds_argument_and_command() {
    let command = tp_command();
    let dispatcher = CommandDispatcher::<Level>::new();
    dispatcher
        .register(literal("tp").then(argument("x", integer()).command(command.clone())))
        .unwrap();

    let context = dispatcher.dispatch("tp 5", 0).unwrap();
    assert_eq!(*context.argument::<i32>("x").unwrap(), 5);
    let bound = context.command().unwrap();
    assert!(bound.ptr_eq(&command));
    assert_eq!(bound.run(&context).unwrap().value, 5);
}

#[test]
fn test_tp_missing_argument_reports_end_of_literal() {
    let dispatcher = CommandDispatcher::<Level>::new();
    dispatcher
        .register(literal("tp").then(argument("x", integer()).command(tp_command())))
        .unwrap();

    let error = dispatcher.dispatch("tp", 0).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::DispatcherUnknownArgument);
    assert_eq!(error.cursor(), Some(2));
}

#[test]
fn test_tp_non_integer_reports_token_start() {
    let dispatcher = CommandDispatcher::<Level>::new();
    dispatcher
        .register(literal("tp").then(argument("x", integer()).command(tp_command())))
        .unwrap();

    let error = dispatcher.dispatch("tp abc", 0).unwrap_err();
    assert!(error.kind().is_reader_error());
    assert_eq!(error.cursor(), Some(3));
    assert_eq!(error.highlight().unwrap(), "tp <--[HERE]abc");
}

#[test]
fn test_literal_token_boundary() {
    let dispatcher = CommandDispatcher::<Level>::new();
    let foo = dispatcher
        .register(literal("foo").executes(|_| Ok(CommandResult::success())))
        .unwrap();

    assert!(foo.is_valid_input("foo"));
    assert!(!foo.is_valid_input("foobar"));
    assert!(dispatcher.dispatch("foo", 0).is_ok());

    let error = dispatcher.dispatch("foobar", 0).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::DispatcherUnknownCommand);
}

#[test]
fn test_failed_reads_restore_cursor() {
    let mut reader = TextReader::new("go 12x");
    reader.set_cursor(3);
    assert!(reader.read_int().is_err());
    assert_eq!(reader.cursor(), 3);

    let mut reader = TextReader::new("say \"open");
    reader.set_cursor(4);
    assert!(reader.read_quoted_text().is_err());
    assert_eq!(reader.cursor(), 4);
}

#[test]
fn test_literal_beats_argument() {
    let dispatcher = CommandDispatcher::<Level>::new();
    dispatcher
        .register(
            literal("config")
                .then(argument("name", string()).executes(|_| Ok(CommandResult::of(2))))
                .then(literal("get").executes(|_| Ok(CommandResult::of(1)))),
        )
        .unwrap();

    let context = dispatcher.dispatch("config get", 0).unwrap();
    let names: Vec<String> = context
        .nodes()
        .iter()
        .map(|parsed| parsed.node().name().to_string())
        .collect();
    assert_eq!(names, vec!["config", "get"]);
    assert!(!context.has_argument("name"));
    assert_eq!(context.command().unwrap().run(&context).unwrap().value, 1);
}

#[test]
fn test_redirect_is_transparent() {
    let dispatcher = CommandDispatcher::<Level>::new();
    let target = dispatcher
        .register(
            literal("target")
                .then(literal("leaf").executes(|_| Ok(CommandResult::success()))),
        )
        .unwrap();
    dispatcher
        .register(literal("alias").redirect(target))
        .unwrap();

    let context = dispatcher.dispatch("alias leaf", 0).unwrap();
    let path: Vec<String> = context
        .flatten_nodes()
        .iter()
        .map(|parsed| parsed.node().name().to_string())
        .collect();
    assert_eq!(path, vec!["alias", "leaf"]);
    assert!(context.last_child().command().is_some());
    assert_eq!(context.last_child().range(), TextRange::between(6, 10));
}

#[test]
fn test_merged_suggestions_share_widest_range() {
    let command = "x foobar";
    let merged = Suggestions::merge(
        command,
        vec![
            Suggestions::new(TextRange::between(2, 5), vec![Suggestion::new(TextRange::between(2, 5), "fox")]),
            Suggestions::new(TextRange::between(2, 4), vec![Suggestion::new(TextRange::between(2, 4), "fa")]),
        ],
    );

    assert_eq!(merged.range(), TextRange::between(2, 5));
    assert_eq!(merged.texts(), vec!["fao", "fox"]);
    assert!(merged.iter().all(|suggestion| suggestion.range() == TextRange::between(2, 5)));
}

#[tokio::test]
async fn test_completions_follow_requirements() {
    let dispatcher = CommandDispatcher::<Level>::new();
    dispatcher
        .register(literal("stop").requires(|level: &Level| *level >= 4).executes(|_| Ok(CommandResult::success())))
        .unwrap();
    dispatcher
        .register(literal("status").executes(|_| Ok(CommandResult::success())))
        .unwrap();

    let parse = dispatcher.parse("st", 0);
    let suggestions = dispatcher.completion_suggestions(&parse).await.unwrap();
    assert_eq!(suggestions.texts(), vec!["status"]);

    let parse = dispatcher.parse("st", 4);
    let suggestions = dispatcher.completion_suggestions(&parse).await.unwrap();
    assert_eq!(suggestions.texts(), vec!["status", "stop"]);
    assert_eq!(suggestions.range(), TextRange::between(0, 2));
}
