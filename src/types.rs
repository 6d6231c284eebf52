//! Error type for parsing extended-precision values.
//!
//! The polylogarithm functions themselves are total: they return IEEE
//! infinities or NaN instead of an error, so the only fallible operation in
//! the crate is turning text into a [`DoubleDouble`](crate::DoubleDouble).

use core::fmt;

/// Error returned when a string is not a valid [`DoubleDouble`](crate::DoubleDouble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// The mantissa contained something other than digits and one point.
    InvalidDigit,
    /// The text after `e`/`E` was not a decimal integer.
    InvalidExponent,
    /// `from_str_radix` was called with a radix other than 10.
    UnsupportedRadix(u32),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => {
                write!(f, "cannot parse a number from an empty string")
            }
            ParseError::InvalidDigit => {
                write!(f, "invalid digit found in string")
            }
            ParseError::InvalidExponent => {
                write!(f, "invalid exponent: expected a decimal integer after 'e'")
            }
            ParseError::UnsupportedRadix(radix) => {
                write!(f, "unsupported radix {radix}: only base 10 is supported")
            }
        }
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", ParseError::UnsupportedRadix(16)),
            "unsupported radix 16: only base 10 is supported"
        );
        assert_eq!(
            format!("{}", ParseError::InvalidDigit),
            "invalid digit found in string"
        );
    }
}
