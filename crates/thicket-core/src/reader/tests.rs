//! Tests for the text reader

use super::*;

#[test]
fn test_can_read() {
    let mut reader = TextReader::new("abc");
    assert!(reader.can_read());
    assert!(reader.can_read_n(3));
    assert!(!reader.can_read_n(4));
    reader.set_cursor(3);
    assert!(!reader.can_read());
}

#[test]
fn test_peek_and_read() {
    let mut reader = TextReader::new("abc");
    assert_eq!(reader.peek(), Some('a'));
    assert_eq!(reader.peek_at(2), Some('c'));
    assert_eq!(reader.read(), Some('a'));
    assert_eq!(reader.cursor(), 1);
    assert_eq!(reader.consumed(), "a");
    assert_eq!(reader.remaining(), "bc");
    assert_eq!(reader.remaining_len(), 2);
}

#[test]
fn test_read_is_char_aware() {
    let mut reader = TextReader::new("éa");
    assert_eq!(reader.read(), Some('é'));
    assert_eq!(reader.cursor(), 2);
    reader.set_cursor(1);
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn test_skip_whitespace() {
    let mut reader = TextReader::new("   hello");
    reader.skip_whitespace();
    assert_eq!(reader.cursor(), 3);
    reader.skip_whitespace();
    assert_eq!(reader.cursor(), 3);
}

#[test]
fn test_peek_token() {
    let mut reader = TextReader::new("tp 5 6");
    assert_eq!(reader.peek_token(), "tp");
    reader.set_cursor(3);
    assert_eq!(reader.peek_token(), "5");
    assert_eq!(reader.cursor(), 3);
}

#[test]
fn test_expect() {
    let mut reader = TextReader::new("abc");
    assert!(reader.expect('a').is_ok());
    assert_eq!(reader.cursor(), 1);

    let error = reader.expect('x').unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ReaderExpectedSymbol { symbol: 'x' });
    assert_eq!(error.cursor(), Some(1));
    assert_eq!(reader.cursor(), 1);
}

#[test]
fn test_read_unquoted_text() {
    let mut reader = TextReader::new("hello_world.1 world");
    assert_eq!(reader.read_unquoted_text(), "hello_world.1");
    assert_eq!(reader.remaining(), " world");

    let mut reader = TextReader::new("");
    assert_eq!(reader.read_unquoted_text(), "");
}

#[test]
fn test_read_quoted_text() {
    let mut reader = TextReader::new("\"hello world\" rest");
    assert_eq!(reader.read_quoted_text().unwrap(), "hello world");
    assert_eq!(reader.remaining(), " rest");

    let mut reader = TextReader::new("'it''s'");
    assert_eq!(reader.read_quoted_text().unwrap(), "it");
}

#[test]
fn test_read_quoted_text_escapes() {
    let mut reader = TextReader::new(r#""hello \"world\" \\ done""#);
    assert_eq!(reader.read_quoted_text().unwrap(), r#"hello "world" \ done"#);
    assert!(!reader.can_read());

    let mut reader = TextReader::new(r#"'don\'t'"#);
    assert_eq!(reader.read_quoted_text().unwrap(), "don't");
}

#[test]
fn test_read_quoted_text_without_quote() {
    let mut reader = TextReader::new("hello");
    let error = reader.read_quoted_text().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ReaderExpectedStartOfQuote);
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn test_unclosed_quote_resets_cursor() {
    let mut reader = TextReader::new("say \"hello");
    reader.set_cursor(4);
    let error = reader.read_quoted_text().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ReaderExpectedEndOfQuote);
    assert_eq!(error.cursor(), Some(10));
    assert_eq!(reader.cursor(), 4);
}

#[test]
fn test_invalid_escape_resets_cursor() {
    let mut reader = TextReader::new(r#""hel\lo""#);
    let error = reader.read_quoted_text().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ReaderInvalidEscape { character: 'l' });
    assert_eq!(error.cursor(), Some(4));
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn test_read_text() {
    let mut reader = TextReader::new("\"quoted\" plain");
    assert_eq!(reader.read_text().unwrap(), "quoted");
    reader.skip();
    assert_eq!(reader.read_text().unwrap(), "plain");
}

#[test]
fn test_read_boolean() {
    let mut reader = TextReader::new("true false");
    assert!(reader.read_boolean().unwrap());
    reader.skip();
    assert!(!reader.read_boolean().unwrap());

    let mut reader = TextReader::new("tuesday");
    let error = reader.read_boolean().unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::ReaderInvalidBool {
            value: "tuesday".to_string()
        }
    );
    assert_eq!(reader.cursor(), 0);

    let mut reader = TextReader::new("");
    assert_eq!(reader.read_boolean().unwrap_err().kind(), &ErrorKind::ReaderExpectedBool);
}

#[test]
fn test_read_int() {
    let mut reader = TextReader::new("1234 rest");
    assert_eq!(reader.read_int().unwrap(), 1234);
    assert_eq!(reader.remaining(), " rest");

    let mut reader = TextReader::new("-42");
    assert_eq!(reader.read_int().unwrap(), -42);
}

#[test]
fn test_read_int_stops_at_letters() {
    let mut reader = TextReader::new("12abc");
    assert_eq!(reader.read_int().unwrap(), 12);
    assert_eq!(reader.remaining(), "abc");
}

#[test]
fn test_invalid_int_resets_cursor() {
    let mut reader = TextReader::new("tp 12-34");
    reader.set_cursor(3);
    let error = reader.read_int().unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::ReaderInvalidInt {
            value: "12-34".to_string()
        }
    );
    assert_eq!(error.cursor(), Some(3));
    assert_eq!(reader.cursor(), 3);
}

#[test]
fn test_missing_int() {
    let mut reader = TextReader::new("tp abc");
    reader.set_cursor(3);
    let error = reader.read_int().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ReaderExpectedInt);
    assert_eq!(error.cursor(), Some(3));
    assert_eq!(reader.cursor(), 3);
}

#[test]
fn test_integer_overflow_resets_cursor() {
    let mut reader = TextReader::new("300");
    let error = reader.read_byte().unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::ReaderInvalidByte {
            value: "300".to_string()
        }
    );
    assert_eq!(reader.cursor(), 0);

    let mut reader = TextReader::new("40000");
    assert!(reader.read_short().is_err());
    assert_eq!(reader.cursor(), 0);

    let mut reader = TextReader::new("9999999999");
    assert!(reader.read_int().is_err());
    assert_eq!(reader.cursor(), 0);

    let mut reader = TextReader::new("9999999999");
    assert_eq!(reader.read_long().unwrap(), 9_999_999_999);
}

#[test]
fn test_read_double() {
    let mut reader = TextReader::new("12.5 rest");
    assert_eq!(reader.read_double().unwrap(), 12.5);

    let mut reader = TextReader::new("-1e3");
    assert_eq!(reader.read_double().unwrap(), -1000.0);

    let mut reader = TextReader::new("1.2.3");
    let error = reader.read_double().unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::ReaderInvalidDouble {
            value: "1.2.3".to_string()
        }
    );
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn test_read_float() {
    let mut reader = TextReader::new("0.25");
    assert_eq!(reader.read_float().unwrap(), 0.25);

    let mut reader = TextReader::new(".");
    assert!(reader.read_float().is_err());
    assert_eq!(reader.cursor(), 0);

    let mut reader = TextReader::new("x");
    assert_eq!(reader.read_float().unwrap_err().kind(), &ErrorKind::ReaderExpectedFloat);
}

#[test]
fn test_clone_is_independent() {
    let mut reader = TextReader::new("hello world");
    let mut copy = reader.clone();
    copy.read_unquoted_text();
    assert_eq!(copy.cursor(), 5);
    assert_eq!(reader.cursor(), 0);
    reader.skip();
    assert_eq!(copy.cursor(), 5);
}
