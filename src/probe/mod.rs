//! Native-binding helper discovery.
//!
//! The Python module is built against pybind11. When pybind11 is installed
//! in the target interpreter, its CMake package directory is handed to the
//! build so `find_package(pybind11)` succeeds. When it is not installed the
//! build falls back to its own lookup, so absence is a normal answer, not an
//! error.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use wheelcfg::probe::{BindingProbe, StaticProbe};
//!
//! let probe = StaticProbe::found("/opt/pybind11/share/cmake/pybind11");
//! assert_eq!(probe.cmake_dir(), Some(PathBuf::from("/opt/pybind11/share/cmake/pybind11")));
//! assert_eq!(StaticProbe::absent().cmake_dir(), None);
//! ```

pub mod python;

use std::path::PathBuf;

pub use python::{PythonBindingProbe, DEFAULT_PYTHON};

/// Capability check for the binding helper's CMake directory.
pub trait BindingProbe {
    /// Short name for logs and explanations.
    fn name(&self) -> &str;

    /// The helper's CMake directory, or `None` when it is not available.
    fn cmake_dir(&self) -> Option<PathBuf>;
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    dir: Option<PathBuf>,
}

impl StaticProbe {
    /// A probe that always reports the given directory.
    pub fn found(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// A probe that always reports absence.
    pub fn absent() -> Self {
        Self { dir: None }
    }
}

impl BindingProbe for StaticProbe {
    fn name(&self) -> &str {
        "static"
    }

    fn cmake_dir(&self) -> Option<PathBuf> {
        self.dir.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_static_probe_is_absent() {
        assert_eq!(StaticProbe::default().cmake_dir(), None);
    }

    #[test]
    fn found_probe_is_stable() {
        let probe = StaticProbe::found("/x");
        assert_eq!(probe.cmake_dir(), probe.cmake_dir());
    }

    #[test]
    fn probes_are_object_safe() {
        let probes: Vec<Box<dyn BindingProbe>> = vec![
            Box::new(StaticProbe::absent()),
            Box::new(PythonBindingProbe::new("/nonexistent/python")),
        ];
        assert_eq!(probes[0].name(), "static");
        assert_eq!(probes[1].name(), "pybind11");
    }
}
