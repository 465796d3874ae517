//! Field selection for `#[derive(Configuration)]`.
//!
//! Decides which struct fields take part in binding and which key segment
//! each one contributes.

use syn::ext::IdentExt;
use syn::{Field, Ident, Visibility};

/// A struct field registered for binding.
#[derive(Debug)]
pub struct BoundField<'a> {
    /// Field identifier, used to access the field in generated code.
    pub ident: &'a Ident,

    /// Declared field name without any `r#` prefix.
    ///
    /// Uppercased at runtime to form the field's key segment.
    pub name: String,
}

impl<'a> BoundField<'a> {
    /// Register a named field, or return `None` if it must be skipped.
    ///
    /// Private fields (no visibility modifier) are not assignable from
    /// outside the struct and are never bound.
    pub fn from_field(field: &'a Field) -> Option<Self> {
        if matches!(field.vis, Visibility::Inherited) {
            return None;
        }

        let ident = field.ident.as_ref()?;
        Some(Self {
            ident,
            name: ident.unraw().to_string(),
        })
    }
}
