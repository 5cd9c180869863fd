//! wheelcfg - build configuration for Avogadro Python wheels.
//!
//! Decides which CMake switches a wheel build passes to the native build,
//! based on the environment it runs in, and describes the package metadata
//! handed to the packaging tool.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and layering
//! - [`environment`] - Environment snapshot and signal detection
//! - [`error`] - Error types and result aliases
//! - [`metadata`] - Package metadata
//! - [`options`] - CMake build switches and the base set
//! - [`probe`] - pybind11 discovery
//! - [`resolver`] - Build switch resolution
//! - [`shell`] - External program execution
//! - [`ui`] - Command output
//!
//! # Example
//!
//! ```
//! use wheelcfg::environment::Environment;
//! use wheelcfg::probe::StaticProbe;
//! use wheelcfg::resolver::ConfigurationResolver;
//!
//! let env = Environment::from_pairs([("EXTRA_CMAKE_ARGS", "-DA=1;-DB=2")]);
//! let resolved = ConfigurationResolver::new().resolve(&env, &StaticProbe::absent());
//! assert_eq!(resolved.passthrough(), vec!["-DA=1", "-DB=2"]);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod metadata;
pub mod options;
pub mod probe;
pub mod resolver;
pub mod shell;
pub mod ui;

pub use error::{Result, WheelError};
