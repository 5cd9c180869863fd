//! CMake build switches.
//!
//! A [`BuildOption`] is one `-D<name>:<TYPE>=<value>` cache entry handed to
//! the native build configuration step.
//!
//! # Example
//!
//! ```
//! use wheelcfg::options::BuildOption;
//!
//! let opt = BuildOption::bool("USE_QT", false);
//! assert_eq!(opt.to_cmake_arg(), "-DUSE_QT:BOOL=FALSE");
//! ```

pub mod base;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use base::base_options;

/// Value carried by a build switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Feature toggle, rendered as `TRUE`/`FALSE`.
    Bool(bool),
    /// Filesystem location.
    Path(PathBuf),
}

impl OptionValue {
    /// The CMake cache type for this value.
    pub fn cmake_type(&self) -> &'static str {
        match self {
            Self::Bool(_) => "BOOL",
            Self::Path(_) => "PATH",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named switch for the external build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOption {
    /// CMake variable name (case-sensitive).
    pub name: String,
    /// Value to set.
    pub value: OptionValue,
}

impl BuildOption {
    /// Create a boolean switch.
    pub fn bool(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            value: OptionValue::Bool(enabled),
        }
    }

    /// Create a path switch.
    pub fn path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            value: OptionValue::Path(path.into()),
        }
    }

    /// Render as a CMake command-line cache definition.
    pub fn to_cmake_arg(&self) -> String {
        format!("-D{}:{}={}", self.name, self.value.cmake_type(), self.value)
    }
}

impl fmt::Display for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cmake_arg())
    }
}
