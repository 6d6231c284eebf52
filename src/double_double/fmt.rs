//! Decimal formatting and parsing.

use core::fmt;
use core::str::FromStr;

#[cfg_attr(feature = "std", allow(unused_imports))]
use num_traits::Float;

use super::DoubleDouble;
use crate::types::ParseError;

/// Significant digits printed when no precision is requested.
const DISPLAY_DIGITS: usize = 32;
/// More digits than this carry no information.
const MAX_DIGITS: usize = 40;

/// `x * 10^k`, split in two steps near the ends of the exponent range.
fn scale_pow10(x: DoubleDouble, k: i32) -> DoubleDouble {
    let ten = DoubleDouble::from_f64(10.0);
    if k > 300 {
        x * ten.powi(300) * ten.powi(k - 300)
    } else if k < -300 {
        x / ten.powi(300) / ten.powi(-k - 300)
    } else if k >= 0 {
        x * ten.powi(k)
    } else {
        x / ten.powi(-k)
    }
}

fn write_scientific(x: DoubleDouble, digits: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.hi.is_nan() {
        return f.write_str("NaN");
    }
    if x.hi.is_sign_negative() {
        f.write_str("-")?;
    }
    if x.hi.is_infinite() {
        return f.write_str("inf");
    }

    let mut buf = [0u8; MAX_DIGITS + 1];
    let mut exp = 0i32;
    if x.hi != 0.0 {
        let mut r = x.abs();
        exp = r.hi.log10().floor() as i32;
        r = scale_pow10(r, -exp);
        if r.hi >= 10.0 {
            r = r / 10.0;
            exp += 1;
        } else if r.hi < 1.0 {
            r = r * 10.0;
            exp -= 1;
        }
        // one guard digit for rounding
        for slot in buf.iter_mut().take(digits + 1) {
            let d = r.floor().hi.clamp(0.0, 9.0);
            *slot = d as u8;
            r = (r - d) * 10.0;
        }
        if buf[digits] >= 5 {
            let mut i = digits;
            loop {
                if i == 0 {
                    // carry out of the leading digit: 9.99.. -> 1.00..
                    buf[0] = 1;
                    exp += 1;
                    break;
                }
                i -= 1;
                if buf[i] == 9 {
                    buf[i] = 0;
                } else {
                    buf[i] += 1;
                    break;
                }
            }
        }
    }

    write_digit(f, buf[0])?;
    if digits > 1 {
        f.write_str(".")?;
        for &d in &buf[1..digits] {
            write_digit(f, d)?;
        }
    }
    write!(f, "e{exp}")
}

#[inline]
fn write_digit(f: &mut fmt::Formatter<'_>, d: u8) -> fmt::Result {
    fmt::Write::write_char(f, char::from(b'0' + d))
}

/// Scientific notation with 32 significant digits, or `precision + 1`
/// digits when a precision is given (`{:.5}` prints six).
impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f
            .precision()
            .map_or(DISPLAY_DIGITS, |p| p + 1)
            .clamp(1, MAX_DIGITS);
        write_scientific(*self, digits, f)
    }
}

impl fmt::LowerExp for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for DoubleDouble {
    type Err = ParseError;

    /// Parses decimal notation (`-1.25`, `3e-7`, `.5E+2`) and the words
    /// `inf`, `infinity` and `nan` in any case.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
            return Ok(if negative {
                DoubleDouble::NEG_INFINITY
            } else {
                DoubleDouble::INFINITY
            });
        }
        if body.eq_ignore_ascii_case("nan") {
            return Ok(DoubleDouble::NAN);
        }

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(i) => (&body[..i], Some(&body[i + 1..])),
            None => (body, None),
        };

        let mut value = DoubleDouble::ZERO;
        let mut digits = 0usize;
        let mut frac_digits = 0i32;
        let mut seen_point = false;
        for c in mantissa.bytes() {
            match c {
                b'0'..=b'9' => {
                    value = value * 10.0 + f64::from(c - b'0');
                    digits += 1;
                    if seen_point {
                        frac_digits += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => return Err(ParseError::InvalidDigit),
            }
        }
        if digits == 0 {
            return Err(ParseError::InvalidDigit);
        }

        let exp = match exponent {
            Some(e) => e.parse::<i32>().map_err(|_| ParseError::InvalidExponent)?,
            None => 0,
        };
        let value = scale_pow10(value, exp.saturating_sub(frac_digits));
        Ok(if negative { -value } else { value })
    }
}
