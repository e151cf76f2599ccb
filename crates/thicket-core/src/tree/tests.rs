//! Tests for the command tree

use super::*;
use crate::arguments::{integer, word};
use crate::command::CommandResult;
use crate::context::{CommandContext, CommandContextBuilder};
use crate::error::{SyntaxResult, ThicketError};
use crate::range::TextRange;
use crate::reader::TextReader;
use crate::suggestion::SuggestionsBuilder;
use std::sync::Arc;

type Level = u32;

fn ok() -> impl Fn(&CommandContext<Level>) -> SyntaxResult<CommandResult> + Send + Sync + 'static {
    |_: &CommandContext<Level>| Ok(CommandResult::success())
}

#[test]
fn test_literal_builder_lowercases() {
    let node = literal::<Level>("Teleport").build().unwrap();
    assert!(node.is_literal());
    assert_eq!(node.name(), "teleport");
    assert_eq!(node.usage_text(), "teleport");
    assert_eq!(node.examples(), vec!["teleport"]);
}

#[test]
fn test_argument_node_accessors() {
    let node = argument::<Level, _>("amount", integer())
        .description("How many")
        .build()
        .unwrap();
    assert!(node.is_argument());
    assert_eq!(node.usage_text(), "<amount>");
    assert_eq!(node.description(), Some("How many"));
    let payload = node.as_argument().unwrap();
    assert_eq!(payload.name(), "amount");
    assert!(!payload.has_custom_suggestions());
    assert_eq!(node.examples().len(), 4);
}

#[test]
fn test_children_keep_registration_order() {
    let node = literal::<Level>("give")
        .then(literal("b"))
        .then(argument("a", word()))
        .then(literal("c"))
        .build()
        .unwrap();
    let names: Vec<_> = node.children().iter().map(|child| child.name().to_string()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(node.child_count(), 3);
}

#[test]
fn test_add_child_merges_same_key() {
    let root = CommandNode::<Level>::root();
    root.add_child(literal("foo").then(literal("bar")).build().unwrap())
        .unwrap();
    root.add_child(literal("foo").then(literal("baz")).build().unwrap())
        .unwrap();

    assert_eq!(root.child_count(), 1);
    let foo = root.child("foo").unwrap();
    assert!(foo.child("bar").is_some());
    assert!(foo.child("baz").is_some());
}

#[test]
fn test_merge_overwrites_command_only_when_present() {
    let root = CommandNode::<Level>::root();
    root.add_child(literal("foo").executes(ok()).build().unwrap())
        .unwrap();
    root.add_child(literal("foo").then(literal("bar")).build().unwrap())
        .unwrap();
    let foo = root.child("foo").unwrap();
    assert!(foo.has_command());

    let replacement = literal::<Level>("foo").executes(ok()).build().unwrap();
    let expected = replacement.command().unwrap();
    root.add_child(replacement).unwrap();
    assert!(foo.command().unwrap().ptr_eq(&expected));
}

#[test]
fn test_root_cannot_be_a_child() {
    let root = CommandNode::<Level>::root();
    let error = root.add_child(CommandNode::root()).unwrap_err();
    assert!(matches!(error, ThicketError::Registration { .. }));
}

#[test]
fn test_multiple_default_children_rejected() {
    let result = literal::<Level>("time")
        .then(argument("a", integer()).default_value(0).default_node())
        .then(argument("b", integer()).default_value(1).default_node())
        .build();
    assert!(matches!(result, Err(ThicketError::Registration { .. })));
}

#[test]
fn test_redirect_and_children_are_exclusive() {
    let target = CommandNode::<Level>::root();

    let result = literal("a")
        .redirect(Arc::clone(&target))
        .then(literal("b"))
        .build();
    assert!(matches!(result, Err(ThicketError::Registration { .. })));

    let result = literal("a")
        .then(literal("b"))
        .redirect(Arc::clone(&target))
        .build();
    assert!(matches!(result, Err(ThicketError::Registration { .. })));

    let redirected = literal("a").redirect(Arc::clone(&target)).build().unwrap();
    assert!(redirected.add_child(literal("c").build().unwrap()).is_err());
    assert!(Arc::ptr_eq(redirected.redirect().unwrap(), &target));
}

#[test]
fn test_fork_sets_modifier() {
    let target = CommandNode::<Level>::root();
    let node = literal("as")
        .fork(target, |context: &CommandContext<Level>| {
            Ok(vec![*context.sender(), context.sender() + 1])
        })
        .build()
        .unwrap();
    assert!(node.is_fork());
    assert!(node.redirect_modifier().is_some());
}

#[test]
fn test_aliases_share_children_and_command() {
    let root = CommandNode::<Level>::root();
    root.add_child(
        literal("teleport")
            .alias("tp")
            .executes(ok())
            .then(argument("x", integer()))
            .build()
            .unwrap(),
    )
    .unwrap();

    let alias = root.child("tp").unwrap();
    assert!(alias.has_command());
    assert!(alias.child("x").is_some());
    let main = root.child("teleport").unwrap();
    assert_eq!(main.as_literal().unwrap().aliases().len(), 1);
}

#[test]
fn test_remove_child() {
    let root = CommandNode::<Level>::root();
    root.add_child(literal("foo").build().unwrap()).unwrap();
    assert!(root.remove_child("foo").is_some());
    assert!(root.remove_child("foo").is_none());
    assert!(!root.has_children());
}

#[test]
fn test_requirements_are_conjunctive() {
    let node = literal::<Level>("op")
        .requires(|level| *level >= 2)
        .requires(|level| *level < 4)
        .build()
        .unwrap();
    assert!(!node.can_use(&1));
    assert!(node.can_use(&2));
    assert!(!node.can_use(&4));
    assert_eq!(node.requirements().len(), 2);
}

#[test]
fn test_relevant_nodes_prefers_literal() {
    let node = literal::<Level>("parent")
        .then(literal("get"))
        .then(argument("name", word()))
        .then(argument("count", integer()))
        .build()
        .unwrap();

    let relevant = node.relevant_nodes(&TextReader::new("get rest"));
    assert_eq!(relevant.len(), 1);
    assert_eq!(relevant[0].name(), "get");

    let relevant = node.relevant_nodes(&TextReader::new("getter"));
    let names: Vec<_> = relevant.iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["name", "count"]);
}

#[test]
fn test_relevant_nodes_uses_default_child_when_exhausted() {
    let node = literal::<Level>("time")
        .then(literal("set"))
        .then(argument("ticks", integer()).default_value(0).default_node())
        .build()
        .unwrap();

    let relevant = node.relevant_nodes(&TextReader::new(""));
    assert_eq!(relevant.len(), 1);
    assert_eq!(relevant[0].name(), "ticks");
    assert_eq!(node.default_child().unwrap().name(), "ticks");
}

#[test]
fn test_is_valid_input_respects_token_boundary() {
    let foo = literal::<Level>("foo").build().unwrap();
    assert!(foo.is_valid_input("foo"));
    assert!(foo.is_valid_input("foo bar"));
    assert!(!foo.is_valid_input("foobar"));
    assert!(!foo.is_valid_input(""));

    let number = argument::<Level, _>("n", integer()).build().unwrap();
    assert!(number.is_valid_input("5"));
    assert!(!number.is_valid_input("5x"));
    assert!(!number.is_valid_input("abc"));

    let optional = literal::<Level>("all").default_node().build().unwrap();
    assert!(optional.is_valid_input(""));

    assert!(!CommandNode::<Level>::root().is_valid_input("anything"));
}

#[test]
fn test_parse_literal_records_node() {
    let root = CommandNode::<Level>::root();
    let node = literal::<Level>("foo").build().unwrap();
    let mut builder = CommandContextBuilder::new(0, root, 0);

    let mut reader = TextReader::new("foo bar");
    node.parse(&mut reader, &mut builder).unwrap();
    assert_eq!(reader.cursor(), 3);
    assert_eq!(builder.nodes().len(), 1);
    assert_eq!(builder.range(), TextRange::between(0, 3));

    let mut reader = TextReader::new("food");
    let error = node.parse(&mut reader, &mut builder).unwrap_err();
    assert_eq!(error.cursor(), Some(0));
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn test_parse_argument_binds_value() {
    let root = CommandNode::<Level>::root();
    let node = argument::<Level, _>("count", integer()).build().unwrap();
    let mut builder = CommandContextBuilder::new(0, root, 0);

    let mut reader = TextReader::new("42");
    node.parse(&mut reader, &mut builder).unwrap();
    let parsed = &builder.arguments()["count"];
    assert_eq!(parsed.get::<i32>(), Some(&42));
    assert_eq!(parsed.range(), TextRange::between(0, 2));
}

#[test]
fn test_parse_default_argument_without_input() {
    let root = CommandNode::<Level>::root();
    let node = argument::<Level, _>("count", integer())
        .default_value(7)
        .default_node()
        .build()
        .unwrap();
    let mut builder = CommandContextBuilder::new(0, Arc::clone(&root), 0);
    let mut reader = TextReader::new("");
    node.parse(&mut reader, &mut builder).unwrap();
    assert_eq!(builder.arguments()["count"].get::<i32>(), Some(&7));

    let missing = argument::<Level, _>("count", integer())
        .default_node()
        .build()
        .unwrap();
    let mut builder = CommandContextBuilder::new(0, root, 0);
    let mut reader = TextReader::new("");
    assert!(missing.parse(&mut reader, &mut builder).is_err());
}

#[tokio::test]
async fn test_literal_suggests_itself_for_prefix() {
    let root = CommandNode::<Level>::root();
    let node = literal::<Level>("foo").build().unwrap();
    let context = CommandContextBuilder::new(0, root, 0).build("F");

    let suggestions = node
        .suggestions(&context, SuggestionsBuilder::new("F", 0))
        .await
        .unwrap();
    assert_eq!(suggestions.texts(), vec!["foo"]);

    let suggestions = node
        .suggestions(&context, SuggestionsBuilder::new("b", 0))
        .await
        .unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_display() {
    let node = literal::<Level>("foo").build().unwrap();
    assert_eq!(node.to_string(), "<literal foo>");
    assert_eq!(CommandNode::<Level>::root().to_string(), "<root>");
    assert_ne!(node.id(), CommandNode::<Level>::root().id());
}
