//! Settings loading and layering.
//!
//! - Settings schema and file discovery in [`settings`]
//! - Deep merging of YAML layers in [`merger`]
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use wheelcfg::config::Settings;
//!
//! let settings = Settings::parse("python: python3.12", Path::new("wheelcfg.yml")).unwrap();
//! assert_eq!(settings.python, "python3.12");
//! assert_eq!(settings.wheel_workflow, "Build Wheels");
//! ```

pub mod merger;
pub mod settings;

pub use merger::{deep_merge, merge_layers};
pub use settings::{Settings, SETTINGS_FILE};
