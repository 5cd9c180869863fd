//! Environment capture and signal detection.
//!
//! The process environment is read exactly once, into an immutable
//! [`Environment`] snapshot. Everything downstream takes the snapshot as a
//! parameter, so resolution never depends on ambient global state.
//!
//! Two signals are consumed:
//!
//! 1. `EXTRA_CMAKE_ARGS` - raw passthrough arguments, `;`-delimited
//! 2. `GITHUB_WORKFLOW` - workflow name used to detect a wheel build

pub mod signals;
pub mod snapshot;

pub use signals::{
    extra_cmake_args, DetectedWheelBuild, WheelBuildDetector, DEFAULT_WHEEL_WORKFLOW,
    EXTRA_CMAKE_ARGS, GITHUB_WORKFLOW,
};
pub use snapshot::Environment;
