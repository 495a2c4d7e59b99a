//! Functions to construct the numeric payloads of expression literals.

use rug::{integer::ParseIntegerError, Integer};
use std::num::ParseFloatError;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice of decimal digits.
pub fn int_from_str(s: &str) -> Result<Integer, ParseIntegerError> {
    Integer::from_str_radix(s, 10)
}

/// Creates an [`f64`] from a string slice such as `3.14`, `3.` or `.5`.
pub fn float_from_str(s: &str) -> Result<f64, ParseFloatError> {
    s.parse()
}

/// Formats a float so that it is always read back as a decimal literal, never as an integer.
///
/// `3.0` prints as `3.0` instead of `3`, and `0.1` prints as `0.1`.
pub fn fmt_float(n: f64) -> String {
    let mut s = n.abs().to_string();
    if n.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    if n.is_sign_negative() && !n.is_nan() {
        s.insert(0, '-');
    }
    s
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_literals() {
        assert_eq!(int_from_str("123456789012345678901234567890").unwrap().to_string(), "123456789012345678901234567890");
        assert_eq!(float_from_str("3.").unwrap(), 3.0);
        assert_eq!(float_from_str(".5").unwrap(), 0.5);
    }

    #[test]
    fn float_keeps_decimal_point() {
        assert_eq!(fmt_float(3.0), "3.0");
        assert_eq!(fmt_float(-2.5), "-2.5");
        assert_eq!(fmt_float(-0.0), "-0.0");
        assert_eq!(fmt_float(1e20), "100000000000000000000.0");
    }
}
