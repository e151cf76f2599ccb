//! Syntax error kinds
//!
//! Every failure the reader, the argument types and the dispatcher can report
//! is one of these variants. The `Display` output is the raw, cursor-free
//! message; [`CommandSyntaxError`](super::CommandSyntaxError) adds the position.

use thiserror::Error;

/// Identifying kind of a [`CommandSyntaxError`](super::CommandSyntaxError)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Expected bool")]
    ReaderExpectedBool,

    #[error("Expected byte")]
    ReaderExpectedByte,

    #[error("Expected short")]
    ReaderExpectedShort,

    #[error("Expected integer")]
    ReaderExpectedInt,

    #[error("Expected long")]
    ReaderExpectedLong,

    #[error("Expected float")]
    ReaderExpectedFloat,

    #[error("Expected double")]
    ReaderExpectedDouble,

    #[error("Expected quote to start a string")]
    ReaderExpectedStartOfQuote,

    #[error("Unclosed quoted string")]
    ReaderExpectedEndOfQuote,

    #[error("Expected '{symbol}'")]
    ReaderExpectedSymbol { symbol: char },

    #[error("Invalid bool, expected true or false but found '{value}'")]
    ReaderInvalidBool { value: String },

    #[error("Invalid byte '{value}'")]
    ReaderInvalidByte { value: String },

    #[error("Invalid short '{value}'")]
    ReaderInvalidShort { value: String },

    #[error("Invalid integer '{value}'")]
    ReaderInvalidInt { value: String },

    #[error("Invalid long '{value}'")]
    ReaderInvalidLong { value: String },

    #[error("Invalid float '{value}'")]
    ReaderInvalidFloat { value: String },

    #[error("Invalid double '{value}'")]
    ReaderInvalidDouble { value: String },

    #[error("Invalid escape sequence '{character}' in quoted string")]
    ReaderInvalidEscape { character: char },

    #[error("Expected literal {expected}")]
    LiteralIncorrect { expected: String },

    #[error("Expected whitespace to end one argument, but found trailing data")]
    DispatcherExpectedArgumentSeparator,

    #[error("Unknown command")]
    DispatcherUnknownCommand,

    #[error("Incorrect argument for command")]
    DispatcherUnknownArgument,

    #[error("Could not parse command: {message}")]
    DispatcherParseException { message: String },

    #[error("Invalid term '{term}'")]
    TermInvalid { term: String },

    #[error("Byte must not be less than {min}, found {found}")]
    ByteTooSmall { found: String, min: String },

    #[error("Byte must not be more than {max}, found {found}")]
    ByteTooBig { found: String, max: String },

    #[error("Short must not be less than {min}, found {found}")]
    ShortTooSmall { found: String, min: String },

    #[error("Short must not be more than {max}, found {found}")]
    ShortTooBig { found: String, max: String },

    #[error("Integer must not be less than {min}, found {found}")]
    IntegerTooSmall { found: String, min: String },

    #[error("Integer must not be more than {max}, found {found}")]
    IntegerTooBig { found: String, max: String },

    #[error("Long must not be less than {min}, found {found}")]
    LongTooSmall { found: String, min: String },

    #[error("Long must not be more than {max}, found {found}")]
    LongTooBig { found: String, max: String },

    #[error("Float must not be less than {min}, found {found}")]
    FloatTooSmall { found: String, min: String },

    #[error("Float must not be more than {max}, found {found}")]
    FloatTooBig { found: String, max: String },

    #[error("Double must not be less than {min}, found {found}")]
    DoubleTooSmall { found: String, min: String },

    #[error("Double must not be more than {max}, found {found}")]
    DoubleTooBig { found: String, max: String },
}

impl ErrorKind {
    /// Stable identifier for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ReaderExpectedBool => "READER_EXPECTED_BOOL",
            Self::ReaderExpectedByte => "READER_EXPECTED_BYTE",
            Self::ReaderExpectedShort => "READER_EXPECTED_SHORT",
            Self::ReaderExpectedInt => "READER_EXPECTED_INT",
            Self::ReaderExpectedLong => "READER_EXPECTED_LONG",
            Self::ReaderExpectedFloat => "READER_EXPECTED_FLOAT",
            Self::ReaderExpectedDouble => "READER_EXPECTED_DOUBLE",
            Self::ReaderExpectedStartOfQuote => "READER_EXPECTED_START_OF_QUOTE",
            Self::ReaderExpectedEndOfQuote => "READER_EXPECTED_END_OF_QUOTE",
            Self::ReaderExpectedSymbol { .. } => "READER_EXPECTED_SYMBOL",
            Self::ReaderInvalidBool { .. } => "READER_INVALID_BOOL",
            Self::ReaderInvalidByte { .. } => "READER_INVALID_BYTE",
            Self::ReaderInvalidShort { .. } => "READER_INVALID_SHORT",
            Self::ReaderInvalidInt { .. } => "READER_INVALID_INT",
            Self::ReaderInvalidLong { .. } => "READER_INVALID_LONG",
            Self::ReaderInvalidFloat { .. } => "READER_INVALID_FLOAT",
            Self::ReaderInvalidDouble { .. } => "READER_INVALID_DOUBLE",
            Self::ReaderInvalidEscape { .. } => "READER_INVALID_ESCAPE",
            Self::LiteralIncorrect { .. } => "LITERAL_INCORRECT",
            Self::DispatcherExpectedArgumentSeparator => "DISPATCHER_EXPECTED_ARGUMENT_SEPARATOR",
            Self::DispatcherUnknownCommand => "DISPATCHER_UNKNOWN_COMMAND",
            Self::DispatcherUnknownArgument => "DISPATCHER_UNKNOWN_ARGUMENT",
            Self::DispatcherParseException { .. } => "DISPATCHER_PARSE_EXCEPTION",
            Self::TermInvalid { .. } => "TERM_INVALID",
            Self::ByteTooSmall { .. } => "BYTE_TOO_SMALL",
            Self::ByteTooBig { .. } => "BYTE_TOO_BIG",
            Self::ShortTooSmall { .. } => "SHORT_TOO_SMALL",
            Self::ShortTooBig { .. } => "SHORT_TOO_BIG",
            Self::IntegerTooSmall { .. } => "INTEGER_TOO_SMALL",
            Self::IntegerTooBig { .. } => "INTEGER_TOO_BIG",
            Self::LongTooSmall { .. } => "LONG_TOO_SMALL",
            Self::LongTooBig { .. } => "LONG_TOO_BIG",
            Self::FloatTooSmall { .. } => "FLOAT_TOO_SMALL",
            Self::FloatTooBig { .. } => "FLOAT_TOO_BIG",
            Self::DoubleTooSmall { .. } => "DOUBLE_TOO_SMALL",
            Self::DoubleTooBig { .. } => "DOUBLE_TOO_BIG",
        }
    }

    /// Whether this kind was raised by the reader's token scanners
    pub fn is_reader_error(&self) -> bool {
        self.error_code().starts_with("READER_")
    }

    /// Whether this kind was raised by the dispatcher itself
    pub fn is_dispatcher_error(&self) -> bool {
        self.error_code().starts_with("DISPATCHER_")
    }
}
