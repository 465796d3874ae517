//! Key-value sources consulted by the binder

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A read-only lookup from derived keys to raw string values.
///
/// Implemented for closures, string maps and [`EnvironSource`]:
///
/// ```rust
/// use envbind::Source;
///
/// let getenv = |key: &str| (key == "DEBUG").then(|| "1".to_string());
/// assert_eq!(getenv.lookup("DEBUG").as_deref(), Some("1"));
/// assert_eq!(getenv.lookup("PORT"), None);
/// ```
pub trait Source {
    /// Return the value for `key`, or `None` if the key is absent.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> Source for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl<S: BuildHasher> Source for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// An immutable snapshot of the process environment.
///
/// Changes made to the environment after the snapshot is taken are not
/// observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironSource {
    vars: HashMap<String, String>,
}

impl EnvironSource {
    /// Snapshot the current process environment.
    ///
    /// Names or values that are not valid Unicode are converted lossily.
    pub fn snapshot() -> Self {
        let source: Self = env::vars_os()
            .map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        tracing::debug!(entries = source.len(), "Captured environment snapshot");
        source
    }

    /// Build a source from `NAME=VALUE` entries.
    ///
    /// Each entry is split on the first `=` only, so values may contain `=`.
    /// An entry without `=` is stored as `NAME` with an empty value. When a
    /// name repeats, the last entry wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                let (name, value) = entry.split_once('=').unwrap_or((entry, ""));
                (name.to_string(), value.to_string())
            })
            .collect()
    }

    /// Borrow the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvironSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl Source for EnvironSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

/// Snapshot the process environment as a [`Source`].
///
/// Shorthand for [`EnvironSource::snapshot`].
pub fn environ_source() -> EnvironSource {
    EnvironSource::snapshot()
}
