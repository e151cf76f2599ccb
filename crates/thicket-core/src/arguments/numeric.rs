//! Bounded numeric argument types

use super::{ArgumentType, to_strings};
use crate::error::{ErrorKind, SyntaxResult};
use crate::reader::TextReader;

const INTEGRAL_EXAMPLES: &[&str] = &["0", "123", "-123", "+123"];
const DECIMAL_EXAMPLES: &[&str] = &["0", "1.2", ".5", "-1", "-.5", "-1234.56"];

macro_rules! bounded_argument {
    (
        $(#[$meta:meta])*
        $name:ident, $value:ty, $read:ident, $too_small:ident, $too_big:ident, $examples:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            minimum: $value,
            maximum: $value,
        }

        impl $name {
            pub fn new(minimum: $value, maximum: $value) -> Self {
                Self { minimum, maximum }
            }

            pub fn minimum(&self) -> $value {
                self.minimum
            }

            pub fn maximum(&self) -> $value {
                self.maximum
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(<$value>::MIN, <$value>::MAX)
            }
        }

        impl ArgumentType for $name {
            type Value = $value;

            fn parse(&self, reader: &mut TextReader) -> SyntaxResult<$value> {
                let start = reader.cursor();
                let result = reader.$read()?;
                if result < self.minimum {
                    reader.set_cursor(start);
                    return Err(reader.error(ErrorKind::$too_small {
                        found: result.to_string(),
                        min: self.minimum.to_string(),
                    }));
                }
                if result > self.maximum {
                    reader.set_cursor(start);
                    return Err(reader.error(ErrorKind::$too_big {
                        found: result.to_string(),
                        max: self.maximum.to_string(),
                    }));
                }
                Ok(result)
            }

            fn examples(&self) -> Vec<String> {
                to_strings($examples)
            }
        }
    };
}

bounded_argument!(
    /// An `i8` within `[minimum, maximum]`
    ByteArgument, i8, read_byte, ByteTooSmall, ByteTooBig, INTEGRAL_EXAMPLES
);
bounded_argument!(
    /// An `i16` within `[minimum, maximum]`
    ShortArgument, i16, read_short, ShortTooSmall, ShortTooBig, INTEGRAL_EXAMPLES
);
bounded_argument!(
    /// An `i32` within `[minimum, maximum]`
    IntegerArgument, i32, read_int, IntegerTooSmall, IntegerTooBig, INTEGRAL_EXAMPLES
);
bounded_argument!(
    /// An `i64` within `[minimum, maximum]`
    LongArgument, i64, read_long, LongTooSmall, LongTooBig, INTEGRAL_EXAMPLES
);
bounded_argument!(
    /// An `f32` within `[minimum, maximum]`
    FloatArgument, f32, read_float, FloatTooSmall, FloatTooBig, DECIMAL_EXAMPLES
);
bounded_argument!(
    /// An `f64` within `[minimum, maximum]`
    DoubleArgument, f64, read_double, DoubleTooSmall, DoubleTooBig, DECIMAL_EXAMPLES
);

pub fn byte() -> ByteArgument {
    ByteArgument::default()
}

pub fn byte_between(minimum: i8, maximum: i8) -> ByteArgument {
    ByteArgument::new(minimum, maximum)
}

pub fn short() -> ShortArgument {
    ShortArgument::default()
}

pub fn short_between(minimum: i16, maximum: i16) -> ShortArgument {
    ShortArgument::new(minimum, maximum)
}

pub fn integer() -> IntegerArgument {
    IntegerArgument::default()
}

pub fn integer_min(minimum: i32) -> IntegerArgument {
    IntegerArgument::new(minimum, i32::MAX)
}

pub fn integer_between(minimum: i32, maximum: i32) -> IntegerArgument {
    IntegerArgument::new(minimum, maximum)
}

pub fn long() -> LongArgument {
    LongArgument::default()
}

pub fn long_min(minimum: i64) -> LongArgument {
    LongArgument::new(minimum, i64::MAX)
}

pub fn long_between(minimum: i64, maximum: i64) -> LongArgument {
    LongArgument::new(minimum, maximum)
}

pub fn float() -> FloatArgument {
    FloatArgument::default()
}

pub fn float_min(minimum: f32) -> FloatArgument {
    FloatArgument::new(minimum, f32::MAX)
}

pub fn float_between(minimum: f32, maximum: f32) -> FloatArgument {
    FloatArgument::new(minimum, maximum)
}

pub fn double() -> DoubleArgument {
    DoubleArgument::default()
}

pub fn double_min(minimum: f64) -> DoubleArgument {
    DoubleArgument::new(minimum, f64::MAX)
}

pub fn double_between(minimum: f64, maximum: f64) -> DoubleArgument {
    DoubleArgument::new(minimum, maximum)
}
