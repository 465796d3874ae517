//! Populate nested configuration structs from environment variables
//!
//! `envbind` walks the fields of a configuration struct, derives a key for each
//! field from its path, looks the key up in a [`Source`] (by default a snapshot
//! of the process environment) and assigns the converted value in place.
//!
//! # Features
//!
//! - **Path-derived keys**: `config.http.port` is read from `HTTP_PORT`
//! - **Declarative**: Field registration generated by `#[derive(Configuration)]`
//! - **In-place**: Binds over existing values, so defaults are whatever the struct
//!   already holds
//! - **Pluggable sources**: Closures, maps or an environment snapshot
//!
//! # Key Mapping
//!
//! Each field name is uppercased and joined to its parent's key with `_`:
//!
//! - `config.debug` → `DEBUG`
//! - `config.http.port` → `HTTP_PORT`
//! - `config.logging.level` with prefix `MYAPP` → `MYAPP_LOGGING_LEVEL`
//!
//! Private fields are never looked up or modified.
//!
//! # Value Parsing
//!
//! - Strings: assigned verbatim
//! - Booleans: `true` (any case) or `1` is true, anything else is false
//! - Integers: base 10 at the field's width, e.g. `u8` rejects `300` and `-1`
//! - Floats: `f32`/`f64`, rejecting values that overflow the field's precision
//! - Collections (`Vec`, `HashMap`, ...): left untouched
//!
//! A key that is absent from the source leaves its field unchanged.
//!
//! # Example
//!
//! ```rust
//! use envbind::Configuration;
//!
//! #[derive(Debug, Default, Configuration)]
//! pub struct Config {
//!     pub http: Http,
//!     pub logging: Option<Box<Logging>>,
//!     pub debug: bool,
//! }
//!
//! #[derive(Debug, Default, Configuration)]
//! pub struct Http {
//!     pub port: u16,
//! }
//!
//! #[derive(Debug, Default, Configuration)]
//! pub struct Logging {
//!     pub level: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("HTTP_PORT", "8080");
//! #     std::env::set_var("LOGGING_LEVEL", "debug");
//! let mut config = Config::default();
//! envbind::bind_env(&mut config, "")?;
//! #     assert_eq!(config.http.port, 8080);
//! #     assert_eq!(config.logging.as_ref().map(|l| l.level.as_str()), Some("debug"));
//! #     Ok(())
//! # }
//! ```
//!
//! # Nested Configuration
//!
//! A nested struct can be held by value, in a `Box`, or in an
//! `Option<Box<T>>`. An empty `Option<Box<T>>` is filled with `T::default()`
//! before its fields are bound, whether or not any of its keys are present.
//!
//! # Errors
//!
//! Binding stops at the first value that fails to convert and returns a
//! [`BindError`] naming the key. Fields assigned before the failure keep their
//! new values.

mod bind;
pub mod de;
mod error;
mod source;

pub use bind::{bind, bind_env, field_key, Bind, Configuration};
pub use envbind_derive::Configuration;
pub use error::{BindError, FloatError};
pub use source::{environ_source, EnvironSource, Source};
