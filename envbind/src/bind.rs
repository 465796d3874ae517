//! Recursive binding of configuration fields to source keys

use crate::de;
use crate::error::BindError;
use crate::source::{EnvironSource, Source};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A struct whose named fields can be bound from a [`Source`].
///
/// Usually implemented with `#[derive(Configuration)]`. A hand-written
/// implementation registers each bindable field with [`field_key`]:
///
/// ```rust
/// use envbind::{field_key, Bind, BindError, Configuration, Source};
///
/// #[derive(Default)]
/// struct Http {
///     port: u16,
/// }
///
/// impl Configuration for Http {
///     fn bind_fields(&mut self, prefix: &str, source: &dyn Source) -> Result<(), BindError> {
///         self.port.bind(&field_key(prefix, "port"), source)?;
///         Ok(())
///     }
/// }
///
/// let source = |key: &str| (key == "HTTP_PORT").then(|| "8080".to_string());
/// let http = Http::from_source("HTTP", &source).unwrap();
/// assert_eq!(http.port, 8080);
/// ```
pub trait Configuration {
    /// Bind every public field under `prefix`, in declaration order.
    ///
    /// Stops at the first error; fields bound before it keep their values.
    fn bind_fields(&mut self, prefix: &str, source: &dyn Source) -> Result<(), BindError>;

    /// Build a default value and bind it from `source`.
    fn from_source(prefix: &str, source: &dyn Source) -> Result<Self, BindError>
    where
        Self: Default + Sized,
    {
        let mut config = Self::default();
        config.bind_fields(prefix, source)?;
        Ok(config)
    }

    /// Build a default value and bind it from a snapshot of the process
    /// environment.
    fn from_env(prefix: &str) -> Result<Self, BindError>
    where
        Self: Default + Sized,
    {
        Self::from_source(prefix, &EnvironSource::snapshot())
    }
}

/// A field type the binder knows how to fill.
///
/// Scalars look up `key` and convert the value. Nested configurations treat
/// `key` as the prefix of their own fields.
pub trait Bind {
    /// Bind this field under `key`.
    fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError>;

    /// View this value as a configuration struct, if it is one.
    ///
    /// An empty `Option<Box<T>>` allocates its default value first.
    fn configuration_mut(&mut self) -> Option<&mut dyn Configuration> {
        None
    }
}

/// Derive the lookup key of field `name` under `prefix`.
///
/// The field name is uppercased and joined to a non-empty prefix with `_`.
/// The prefix is used as given.
///
/// ```rust
/// assert_eq!(envbind::field_key("", "debug"), "DEBUG");
/// assert_eq!(envbind::field_key("HTTP", "port"), "HTTP_PORT");
/// ```
pub fn field_key(prefix: &str, name: &str) -> String {
    let name = name.to_uppercase();
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}_{name}")
    }
}

/// Bind `target` from `source`, deriving keys under `prefix`.
///
/// `target` must be a configuration struct, possibly behind a `Box` or an
/// `Option<Box<_>>`; anything else fails with [`BindError::NotAStruct`].
///
/// ```rust
/// use envbind::Configuration;
///
/// #[derive(Debug, Default, Configuration)]
/// pub struct Config {
///     pub str: String,
///     pub sub: Sub,
/// }
///
/// #[derive(Debug, Default, Configuration)]
/// pub struct Sub {
///     pub int: i64,
/// }
///
/// let source = |key: &str| match key {
///     "STR" => Some("x".to_string()),
///     "SUB_INT" => Some("-42".to_string()),
///     _ => None,
/// };
///
/// let mut config = Config::default();
/// envbind::bind(&mut config, "", &source).unwrap();
/// assert_eq!(config.str, "x");
/// assert_eq!(config.sub.int, -42);
/// ```
pub fn bind<T>(target: &mut T, prefix: &str, source: &dyn Source) -> Result<(), BindError>
where
    T: Bind + ?Sized,
{
    let type_name = std::any::type_name::<T>();
    tracing::debug!(prefix, type_name, "Binding configuration");
    match target.configuration_mut() {
        Some(config) => config.bind_fields(prefix, source),
        None => Err(BindError::not_a_struct::<T>()),
    }
}

/// Bind `target` from a fresh snapshot of the process environment.
pub fn bind_env<T>(target: &mut T, prefix: &str) -> Result<(), BindError>
where
    T: Bind + ?Sized,
{
    bind(target, prefix, &EnvironSource::snapshot())
}

fn lookup(source: &dyn Source, key: &str) -> Option<String> {
    let value = source.lookup(key);
    tracing::trace!(key, found = value.is_some(), "Looked up key");
    value
}

impl Bind for String {
    fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError> {
        if let Some(value) = lookup(source, key) {
            *self = value;
        }
        Ok(())
    }
}

impl Bind for bool {
    fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError> {
        if let Some(value) = lookup(source, key) {
            *self = de::parse_bool(&value);
        }
        Ok(())
    }
}

macro_rules! impl_bind_scalar {
    ($parse:path => $($ty:ty),+ $(,)?) => {
        $(
            impl Bind for $ty {
                fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError> {
                    if let Some(value) = lookup(source, key) {
                        *self = $parse(key, &value)?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_bind_scalar!(de::parse_int => i8, i16, i32, i64, i128, isize);
impl_bind_scalar!(de::parse_uint => u8, u16, u32, u64, u128, usize);
impl_bind_scalar!(de::parse_float => f32, f64);

impl<T> Bind for Box<T>
where
    T: Bind + ?Sized,
{
    fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError> {
        (**self).bind(key, source)
    }

    fn configuration_mut(&mut self) -> Option<&mut dyn Configuration> {
        (**self).configuration_mut()
    }
}

impl<T> Bind for Option<Box<T>>
where
    T: Configuration + Default,
{
    fn bind(&mut self, key: &str, source: &dyn Source) -> Result<(), BindError> {
        self.get_or_insert_with(|| {
            tracing::debug!(key, "Allocating nested configuration");
            Box::default()
        })
        .bind_fields(key, source)
    }

    fn configuration_mut(&mut self) -> Option<&mut dyn Configuration> {
        let config: &mut T = self.get_or_insert_with(Box::default);
        Some(config as &mut dyn Configuration)
    }
}

// Container fields are not bound.
macro_rules! impl_bind_ignored {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Bind for $ty<$($param),+> {
                fn bind(&mut self, _key: &str, _source: &dyn Source) -> Result<(), BindError> {
                    Ok(())
                }
            }
        )+
    };
}

impl_bind_ignored!(
    Vec<T>,
    VecDeque<T>,
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
);

impl<T, const N: usize> Bind for [T; N] {
    fn bind(&mut self, _key: &str, _source: &dyn Source) -> Result<(), BindError> {
        Ok(())
    }
}

// Function fields are not bound.
macro_rules! impl_bind_ignored_fn {
    ($(($($arg:ident),*)),+ $(,)?) => {
        $(
            impl<R, $($arg),*> Bind for fn($($arg),*) -> R {
                fn bind(&mut self, _key: &str, _source: &dyn Source) -> Result<(), BindError> {
                    Ok(())
                }
            }

            impl<R, $($arg),*> Bind for Option<fn($($arg),*) -> R> {
                fn bind(&mut self, _key: &str, _source: &dyn Source) -> Result<(), BindError> {
                    Ok(())
                }
            }
        )+
    };
}

impl_bind_ignored_fn!((), (A), (A, B), (A, B, C), (A, B, C, D));

// Only `Option<Box<T>>` of a configuration is allocated; optional scalars
// are left as they are.
macro_rules! impl_bind_ignored_option {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Bind for Option<$ty> {
                fn bind(&mut self, _key: &str, _source: &dyn Source) -> Result<(), BindError> {
                    Ok(())
                }
            }
        )+
    };
}

impl_bind_ignored_option!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
