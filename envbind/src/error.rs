//! Error types for binding configuration from a key-value source

use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while binding a configuration struct.
///
/// Every variant is terminal: the walk stops at the first error and fields
/// assigned before it keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The bind target is not a configuration struct.
    #[error("'{type_name}' must be a struct with named fields")]
    NotAStruct {
        /// Fully qualified type name of the rejected target
        type_name: &'static str,
    },

    /// A signed integer field received an unparseable or overflowing value.
    #[error("Failed to parse '{key}' as {type_name}: {source}")]
    ParseInt {
        /// Lookup key of the failing field
        key: String,
        /// Declared type of the field
        type_name: &'static str,
        /// Error from the integer parser (syntax or width overflow)
        source: ParseIntError,
    },

    /// An unsigned integer field received an unparseable, negative or
    /// overflowing value.
    #[error("Failed to parse '{key}' as {type_name}: {source}")]
    ParseUint {
        /// Lookup key of the failing field
        key: String,
        /// Declared type of the field
        type_name: &'static str,
        /// Error from the integer parser (syntax, sign or width overflow)
        source: ParseIntError,
    },

    /// A floating-point field received an unparseable value, or a finite
    /// value too large for the field's precision.
    #[error("Failed to parse '{key}' as {type_name}: {source}")]
    ParseFloat {
        /// Lookup key of the failing field
        key: String,
        /// Declared type of the field
        type_name: &'static str,
        /// Syntax or range failure
        source: FloatError,
    },
}

impl BindError {
    /// Lookup key of the field that failed to convert.
    ///
    /// Returns `None` for [`BindError::NotAStruct`], which has no key.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotAStruct { .. } => None,
            Self::ParseInt { key, .. } | Self::ParseUint { key, .. } | Self::ParseFloat { key, .. } => {
                Some(key)
            }
        }
    }

    pub(crate) fn not_a_struct<T: ?Sized>() -> Self {
        Self::NotAStruct {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Cause of a [`BindError::ParseFloat`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FloatError {
    /// The value is not a floating-point literal.
    #[error(transparent)]
    Invalid(#[from] ParseFloatError),

    /// The literal is finite but overflows the field's precision.
    #[error("value out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_formats_key_and_type() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = BindError::ParseInt {
            key: "HTTP_PORT".to_string(),
            type_name: "i32",
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP_PORT"));
        assert!(msg.contains("i32"));
        assert_eq!(err.key(), Some("HTTP_PORT"));
    }

    #[test]
    fn test_not_a_struct_names_type() {
        let err = BindError::not_a_struct::<String>();
        assert!(err.to_string().contains("String"));
        assert_eq!(err.key(), None);
    }

    #[test]
    fn test_float_out_of_range_is_source() {
        use std::error::Error;

        let err = BindError::ParseFloat {
            key: "RATIO".to_string(),
            type_name: "f32",
            source: FloatError::OutOfRange,
        };
        let source = err.source().expect("parse errors carry a source");
        assert_eq!(source.to_string(), "value out of range");
    }
}
