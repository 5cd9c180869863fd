//! Immutable environment snapshot.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// A captured mapping from variable name to value.
///
/// # Example
///
/// ```
/// use wheelcfg::environment::Environment;
///
/// let env = Environment::from_pairs([("GITHUB_WORKFLOW", "Build Wheels")]);
/// assert_eq!(env.get("GITHUB_WORKFLOW"), Some("Build Wheels"));
/// assert_eq!(env.get("EXTRA_CMAKE_ARGS"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// BTreeMap for deterministic iteration in debug output.
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Build a snapshot from platform strings.
    ///
    /// Names and values that are not valid Unicode are kept with the invalid
    /// bytes replaced by U+FFFD, and a warning names the variable.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| {
                    let key = k.to_string_lossy().into_owned();
                    let value = match v.into_string() {
                        Ok(value) => value,
                        Err(raw) => {
                            tracing::warn!(
                                "{} is not valid Unicode; invalid bytes replaced",
                                key
                            );
                            raw.to_string_lossy().into_owned()
                        }
                    };
                    if k.to_str().is_none() {
                        tracing::warn!("Variable name {} is not valid Unicode", key);
                    }
                    (key, value)
                })
                .collect(),
        }
    }

    /// Build a snapshot from literal pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as unset.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
