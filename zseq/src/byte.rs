//! Narrowing wider integers down to command bytes

use std::num::ParseIntError;
use thiserror::Error;

/// How to treat integers that don't fit in a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Reject anything outside of `0..=255`
    #[default]
    Checked,

    /// Keep only the lowest eight bits, the way older tools packed their values
    Truncate,
}

/// Narrow an integer to a byte
///
/// ```
/// # use zseq::byte::{narrow, Narrowing, ByteRangeError};
/// assert_eq!(narrow(0x7F, Narrowing::Checked), Ok(0x7F));
/// assert_eq!(narrow(0x1FF, Narrowing::Checked), Err(ByteRangeError { value: 0x1FF }));
/// assert_eq!(narrow(0x1FF, Narrowing::Truncate), Ok(0xFF));
/// ```
pub fn narrow(value: i64, narrowing: Narrowing) -> Result<u8, ByteRangeError> {
    match narrowing {
        Narrowing::Checked => u8::try_from(value).map_err(|_| ByteRangeError { value }),
        Narrowing::Truncate => Ok(value as u8),
    }
}

/// Parse a byte from text
///
/// Decimal (`127`) and hexadecimal with a `0x` or `$` prefix (`0x7F`, `$7F`) are accepted.
/// The parsed number is narrowed afterwards, so `0x1FF` is only accepted when truncating.
pub fn parse_byte(text: &str, narrowing: Narrowing) -> Result<u8, ParseByteError> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let sign = |digits: &str| digits.starts_with(['+', '-']);

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix('$'))
    {
        Some(hex) if !sign(hex) => i64::from_str_radix(hex, 16)?,
        None if !sign(digits) => digits.parse::<i64>()?,
        _ => return Err(ParseByteError::Sign),
    };

    let value = if negative { -magnitude } else { magnitude };
    Ok(narrow(value, narrowing)?)
}

/// A value did not fit in a byte and truncation wasn't requested
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{value} does not fit in a byte (0-255)")]
pub struct ByteRangeError {
    pub value: i64,
}

/// An error describing what could go wrong in [`parse_byte()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseByteError {
    /// The text isn't a decimal or hexadecimal number
    #[error("Not a valid number")]
    Number(#[from] ParseIntError),

    /// A sign showed up anywhere but in front of the number
    #[error("Misplaced sign")]
    Sign,

    /// The number was out of range
    #[error(transparent)]
    Range(#[from] ByteRangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked() {
        assert_eq!(narrow(0, Narrowing::Checked), Ok(0));
        assert_eq!(narrow(255, Narrowing::Checked), Ok(255));
        assert_eq!(
            narrow(256, Narrowing::Checked),
            Err(ByteRangeError { value: 256 })
        );
        assert_eq!(
            narrow(-1, Narrowing::Checked),
            Err(ByteRangeError { value: -1 })
        );
    }

    #[test]
    fn truncate() {
        assert_eq!(narrow(256, Narrowing::Truncate), Ok(0));
        assert_eq!(narrow(0x17F, Narrowing::Truncate), Ok(0x7F));
        assert_eq!(narrow(-1, Narrowing::Truncate), Ok(0xFF));
    }

    #[test]
    fn parse() {
        assert_eq!(parse_byte("127", Narrowing::Checked), Ok(127));
        assert_eq!(parse_byte("0x7F", Narrowing::Checked), Ok(0x7F));
        assert_eq!(parse_byte("0XdB", Narrowing::Checked), Ok(0xDB));
        assert_eq!(parse_byte("$40", Narrowing::Checked), Ok(0x40));
        assert_eq!(parse_byte(" 12 ", Narrowing::Checked), Ok(12));
        assert_eq!(parse_byte("0x1FF", Narrowing::Truncate), Ok(0xFF));
        assert_eq!(parse_byte("-1", Narrowing::Truncate), Ok(0xFF));

        assert_eq!(
            parse_byte("0x100", Narrowing::Checked),
            Err(ParseByteError::Range(ByteRangeError { value: 0x100 }))
        );
        assert!(matches!(
            parse_byte("loud", Narrowing::Checked),
            Err(ParseByteError::Number(_))
        ));
        for text in ["--5", "-+5", "+5", "-0x-7F", "0x+7F", "$-7F"] {
            assert_eq!(
                parse_byte(text, Narrowing::Truncate),
                Err(ParseByteError::Sign),
                "{text}"
            );
        }
        assert_eq!(parse_byte("-0x7F", Narrowing::Truncate), Ok(0x81));

        assert!(matches!(
            parse_byte("", Narrowing::Truncate),
            Err(ParseByteError::Number(_))
        ));
    }
}
