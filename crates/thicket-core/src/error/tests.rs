//! Tests for error types

use super::*;
use std::sync::Arc;

#[test]
fn test_message_without_context() {
    let error = CommandSyntaxError::new(ErrorKind::ReaderExpectedInt);
    assert_eq!(error.to_string(), "Expected integer");
    assert!(error.context().is_none());
    assert!(error.highlight().is_none());
}

#[test]
fn test_message_with_context() {
    let error = CommandSyntaxError::at(ErrorKind::DispatcherUnknownCommand, Arc::from("hello world"), 5);
    assert_eq!(error.context(), Some("hello".to_string()));
    assert_eq!(error.to_string(), "Unknown command at position 5: hello<--[HERE]");
}

#[test]
fn test_context_is_truncated() {
    let error = CommandSyntaxError::at(
        ErrorKind::ReaderInvalidInt {
            value: "x".to_string(),
        },
        Arc::from("0123456789abcdef"),
        15,
    );
    assert_eq!(error.context(), Some("...56789abcde".to_string()));
    assert_eq!(error.context_with(3), Some("...cde".to_string()));
}

#[test]
fn test_highlight() {
    let error = CommandSyntaxError::at(
        ErrorKind::ReaderInvalidInt {
            value: "abc".to_string(),
        },
        Arc::from("tp abc"),
        3,
    );
    assert_eq!(error.highlight(), Some("tp <--[HERE]abc".to_string()));
    assert_eq!(error.raw_message(), "Invalid integer 'abc'");
}

#[test]
fn test_error_codes() {
    assert_eq!(ErrorKind::ReaderExpectedEndOfQuote.error_code(), "READER_EXPECTED_END_OF_QUOTE");
    assert_eq!(
        ErrorKind::IntegerTooBig {
            found: "11".into(),
            max: "10".into()
        }
        .error_code(),
        "INTEGER_TOO_BIG"
    );
    assert!(ErrorKind::ReaderExpectedBool.is_reader_error());
    assert!(ErrorKind::DispatcherUnknownArgument.is_dispatcher_error());
    assert!(!ErrorKind::TermInvalid { term: "x".into() }.is_reader_error());
}

#[test]
fn test_range_messages() {
    let kind = ErrorKind::ByteTooSmall {
        found: "-200".into(),
        min: "-128".into(),
    };
    assert_eq!(kind.to_string(), "Byte must not be less than -128, found -200");
}

#[test]
fn test_thicket_error_wraps_syntax() {
    let syntax = CommandSyntaxError::new(ErrorKind::DispatcherUnknownCommand);
    let error: ThicketError = syntax.into();
    assert_eq!(error.error_code(), "DISPATCHER_UNKNOWN_COMMAND");
    assert_eq!(error.to_string(), "Unknown command");
}

#[test]
fn test_unified_error_fields() {
    let error = ThicketError::registration_for("tp", "Cannot add children to a redirected node");
    assert_eq!(error.error_code(), "THICKET_REGISTRATION");
    assert_eq!(error.message(), "Cannot add children to a redirected node");
    assert_eq!(UnifiedError::context(&error), Some("tp"));

    let error = ThicketError::config_with_context("bad value", "reading thicket.toml");
    assert_eq!(UnifiedError::context(&error), Some("reading thicket.toml"));
}
