//! Build switch resolution.
//!
//! Combines the base toggles with the environment-driven contributions.
//! The order is fixed:
//!
//! 1. Base options
//! 2. `EXTRA_CMAKE_ARGS` passthrough
//! 3. Wheel-build switch (when `GITHUB_WORKFLOW` names the wheel workflow)
//! 4. Binding helper directory (when the probe finds one)
//!
//! Resolution is total: absent inputs contribute nothing and nothing fails.
//!
//! # Example
//!
//! ```
//! use wheelcfg::environment::Environment;
//! use wheelcfg::probe::StaticProbe;
//! use wheelcfg::resolver::ConfigurationResolver;
//!
//! let env = Environment::from_pairs([("GITHUB_WORKFLOW", "Build Wheels")]);
//! let resolved = ConfigurationResolver::new().resolve(&env, &StaticProbe::absent());
//! let args = resolved.to_args();
//! assert_eq!(args.first().map(String::as_str), Some("-DUSE_SPGLIB:BOOL=FALSE"));
//! assert_eq!(args.last().map(String::as_str), Some("-DPYTHON_WHEEL_BUILD:BOOL=TRUE"));
//! ```

pub mod resolved;

pub use resolved::{ConfigEntry, Contribution, EntryValue, ResolvedConfiguration};

use crate::environment::{extra_cmake_args, Environment, WheelBuildDetector};
use crate::options::{base_options, BuildOption};
use crate::probe::BindingProbe;

/// Switch set when building wheels in automation.
pub const WHEEL_BUILD_OPTION: &str = "PYTHON_WHEEL_BUILD";

/// Switch pointing CMake at the binding helper's package directory.
pub const BINDING_DIR_OPTION: &str = "pybind11_DIR";

/// Produces the ordered list of build switches.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    detector: WheelBuildDetector,
}

impl ConfigurationResolver {
    /// Create a resolver that recognizes the default wheel workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom wheel-build detector.
    pub fn with_detector(mut self, detector: WheelBuildDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Resolve the configuration for the given snapshot and probe.
    pub fn resolve(&self, env: &Environment, probe: &dyn BindingProbe) -> ResolvedConfiguration {
        let mut resolved = ResolvedConfiguration::new();

        resolved.extend(
            base_options()
                .into_iter()
                .map(|opt| ConfigEntry::option(opt, Contribution::Base)),
        );

        let extra = extra_cmake_args(env);
        if !extra.is_empty() {
            tracing::debug!("Passing through {} extra CMake argument(s)", extra.len());
        }
        resolved.extend(
            extra
                .into_iter()
                .map(|arg| ConfigEntry::raw(arg, Contribution::ExtraArgs)),
        );

        if let Some(detected) = self.detector.detect(env) {
            tracing::debug!(
                "Wheel build detected via {} ('{}')",
                detected.detected_via,
                detected.workflow
            );
            resolved.push(ConfigEntry::option(
                BuildOption::bool(WHEEL_BUILD_OPTION, true),
                Contribution::WheelBuild,
            ));
        }

        match probe.cmake_dir() {
            Some(dir) => {
                tracing::debug!("{} CMake directory: {}", probe.name(), dir.display());
                resolved.push(ConfigEntry::option(
                    BuildOption::path(BINDING_DIR_OPTION, dir),
                    Contribution::BindingProbe,
                ));
            }
            None => tracing::debug!("{} not found; leaving lookup to CMake", probe.name()),
        }

        resolved
    }
}
