//! Conversion of raw source values into scalar field types

use crate::error::{BindError, FloatError};
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// Interpret a value as a boolean.
///
/// `true` (any ASCII case) and `1` are true. Everything else is false,
/// including unrecognized words; this never fails.
pub fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Parse a base-10 signed integer at the width of `T`.
pub fn parse_int<T>(key: &str, value: &str) -> Result<T, BindError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse::<T>().map_err(|source| BindError::ParseInt {
        key: key.to_string(),
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Parse a base-10 unsigned integer at the width of `T`.
///
/// Signs are rejected: `-1` by the parser itself, `+1` before parsing.
pub fn parse_uint<T>(key: &str, value: &str) -> Result<T, BindError>
where
    T: FromStr<Err = ParseIntError>,
{
    // A lone sign yields the parser's invalid-digit error
    let digits = if value.starts_with('+') { "+" } else { value };
    digits.parse::<T>().map_err(|source| BindError::ParseUint {
        key: key.to_string(),
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Floating-point types a value can be parsed into.
pub trait Float: FromStr<Err = ParseFloatError> + Copy {
    /// Whether the value is positive or negative infinity.
    fn is_infinite(self) -> bool;
}

impl Float for f32 {
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl Float for f64 {
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// Parse a floating-point value at the precision of `T`.
///
/// The standard parser rounds an overflowing literal to infinity; that is
/// reported as [`FloatError::OutOfRange`] unless the literal itself spells
/// infinity.
pub fn parse_float<T: Float>(key: &str, value: &str) -> Result<T, BindError> {
    let fail = |source: FloatError| BindError::ParseFloat {
        key: key.to_string(),
        type_name: std::any::type_name::<T>(),
        source,
    };

    let parsed = value.parse::<T>().map_err(|e| fail(e.into()))?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(fail(FloatError::OutOfRange));
    }
    Ok(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
