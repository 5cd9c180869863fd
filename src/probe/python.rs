//! pybind11 discovery through a Python interpreter.

use std::path::PathBuf;

use super::BindingProbe;
use crate::shell::execute_program;

/// Interpreter used when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Snippet that prints pybind11's CMake directory, or fails to import.
const CMAKE_DIR_SNIPPET: &str = "import pybind11; print(pybind11.get_cmake_dir())";

/// Asks an interpreter where its pybind11 CMake package lives.
///
/// Every failure mode (interpreter missing, pybind11 not installed, empty
/// output) maps to `None`.
#[derive(Debug, Clone)]
pub struct PythonBindingProbe {
    interpreter: String,
}

impl PythonBindingProbe {
    /// Probe through the given interpreter.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The interpreter this probe runs.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}

impl Default for PythonBindingProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl BindingProbe for PythonBindingProbe {
    fn name(&self) -> &str {
        "pybind11"
    }

    fn cmake_dir(&self) -> Option<PathBuf> {
        let result = match execute_program(&self.interpreter, &["-c", CMAKE_DIR_SNIPPET]) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("pybind11 probe skipped: {}", e);
                return None;
            }
        };

        if !result.success {
            tracing::debug!(
                "pybind11 not importable from {} (exit {:?})",
                self.interpreter,
                result.exit_code
            );
            return None;
        }

        let dir = result.stdout.trim();
        if dir.is_empty() {
            return None;
        }
        Some(PathBuf::from(dir))
    }
}
