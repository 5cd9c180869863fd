//! Project settings.
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `wheelcfg.yml` in the project root (or `--config`)
//! 3. CLI flags and their environment fallbacks
//!
//! Layers 1 and 2 are handled here; the CLI applies layer 3 on the result.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::merger::merge_layers;
use crate::environment::DEFAULT_WHEEL_WORKFLOW;
use crate::error::{Result, WheelError};
use crate::probe::DEFAULT_PYTHON;

/// Settings file name looked up in the project root.
pub const SETTINGS_FILE: &str = "wheelcfg.yml";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Interpreter used to probe for pybind11.
    pub python: String,
    /// Long-description file, relative to the project root.
    pub readme: PathBuf,
    /// `GITHUB_WORKFLOW` value that marks a wheel build.
    pub wheel_workflow: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            readme: PathBuf::from("README.md"),
            wheel_workflow: DEFAULT_WHEEL_WORKFLOW.to_string(),
        }
    }
}

impl Settings {
    /// Load settings for a project.
    ///
    /// An explicit path must exist. The default `wheelcfg.yml` is optional.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(WheelError::ConfigParseError {
                        path: path.to_path_buf(),
                        message: "file does not exist".to_string(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => {
                let default = project_root.join(SETTINGS_FILE);
                default.exists().then_some(default)
            }
        };

        match path {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let content = fs::read_to_string(&path)?;
                Self::parse(&content, &path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse settings text, merging it over the defaults.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |e: serde_yaml::Error| WheelError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let defaults = serde_yaml::to_value(Self::default()).map_err(|e| WheelError::Other(e.into()))?;
        let overlay: Value = serde_yaml::from_str(content).map_err(parse_error)?;
        if !matches!(overlay, Value::Mapping(_) | Value::Null) {
            return Err(WheelError::ConfigParseError {
                path: path.to_path_buf(),
                message: "expected a mapping at the top level".to_string(),
            });
        }

        let settings: Self =
            serde_yaml::from_value(merge_layers(&[defaults, overlay])).map_err(parse_error)?;
        if settings.wheel_workflow.is_empty() {
            return Err(WheelError::ConfigParseError {
                path: path.to_path_buf(),
                message: "wheel_workflow must not be empty".to_string(),
            });
        }
        Ok(settings)
    }

    /// The README path resolved against the project root.
    pub fn readme_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.readme)
    }
}
