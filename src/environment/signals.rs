//! Signals read from the environment snapshot.

use super::Environment;

/// Raw extra CMake arguments, `;`-delimited.
pub const EXTRA_CMAKE_ARGS: &str = "EXTRA_CMAKE_ARGS";

/// Name of the running GitHub Actions workflow.
pub const GITHUB_WORKFLOW: &str = "GITHUB_WORKFLOW";

/// Workflow name that marks an automated wheel build.
pub const DEFAULT_WHEEL_WORKFLOW: &str = "Build Wheels";

/// Split `EXTRA_CMAKE_ARGS` into raw passthrough arguments.
///
/// Unset or empty yields nothing. Otherwise the value is split strictly on
/// `;`: segments are not trimmed and empty segments are kept.
///
/// A single argument whose value contains `;` (a CMake list) is split too,
/// so it never reaches CMake intact. Callers rely on this shape.
///
/// # Example
///
/// ```
/// use wheelcfg::environment::{extra_cmake_args, Environment};
///
/// let env = Environment::from_pairs([("EXTRA_CMAKE_ARGS", "-DA=1;-DB=2")]);
/// assert_eq!(extra_cmake_args(&env), vec!["-DA=1", "-DB=2"]);
/// ```
pub fn extra_cmake_args(env: &Environment) -> Vec<String> {
    env.non_empty(EXTRA_CMAKE_ARGS)
        .map(|raw| raw.split(';').map(str::to_string).collect())
        .unwrap_or_default()
}

/// A detected wheel build.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedWheelBuild {
    /// The workflow name that triggered detection.
    pub workflow: String,
    /// The environment variable that triggered detection.
    pub detected_via: String,
}

/// Detects the automated wheel-building context.
///
/// Matches only when `GITHUB_WORKFLOW` equals the configured workflow name
/// exactly (case-sensitive, no trimming).
#[derive(Debug, Clone)]
pub struct WheelBuildDetector {
    workflow: String,
}

impl WheelBuildDetector {
    /// Create a detector for the default `Build Wheels` workflow.
    pub fn new() -> Self {
        Self::for_workflow(DEFAULT_WHEEL_WORKFLOW)
    }

    /// Create a detector for a custom workflow name.
    pub fn for_workflow(workflow: impl Into<String>) -> Self {
        Self {
            workflow: workflow.into(),
        }
    }

    /// Detect a wheel build in the given snapshot.
    pub fn detect(&self, env: &Environment) -> Option<DetectedWheelBuild> {
        match env.get(GITHUB_WORKFLOW) {
            Some(actual) if actual == self.workflow => Some(DetectedWheelBuild {
                workflow: actual.to_string(),
                detected_via: GITHUB_WORKFLOW.to_string(),
            }),
            Some(actual) => {
                tracing::debug!("Workflow '{}' is not a wheel build", actual);
                None
            }
            None => None,
        }
    }
}

impl Default for WheelBuildDetector {
    fn default() -> Self {
        Self::new()
    }
}
