//! Default feature toggles for wheel builds.
//!
//! Wheels ship only the core library and its Python module, so every
//! optional native subsystem is switched off and the Python binding on.

use super::BuildOption;

/// Toggles applied to every wheel build, in the order they are emitted.
const BASE_TOGGLES: &[(&str, bool)] = &[
    ("USE_SPGLIB", false),
    ("USE_OPENGL", false),
    ("USE_QT", false),
    ("USE_MMTF", false),
    ("USE_PYTHON", true),
    ("USE_HDF5", false),
    ("USE_LIBARCHIVE", false),
    ("USE_LIBMSYM", false),
];

/// The fixed base set of build options.
pub fn base_options() -> Vec<BuildOption> {
    BASE_TOGGLES
        .iter()
        .map(|(name, enabled)| BuildOption::bool(*name, *enabled))
        .collect()
}
