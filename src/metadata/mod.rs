//! Package metadata for the packaging tool.
//!
//! Everything except the long description is static. The long description
//! is the project README, read verbatim and eagerly: if it cannot be read
//! the whole run fails.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, WheelError};

/// Where the package version comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// Derived from git tags by the packaging tool (`setuptools_scm`).
    Scm,
}

/// A labelled project link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectUrl {
    pub label: &'static str,
    pub url: &'static str,
}

const PROJECT_URLS: &[(&str, &str)] = &[
    ("Documentation", "https://two.avogadro.cc"),
    ("Funding", "https://github.com/sponsors/OpenChemistry"),
    ("Source", "https://github.com/OpenChemistry/avogadrolibs"),
    ("Tracker", "https://github.com/OpenChemistry/avogadrolibs/issues"),
    ("Forum", "https://discuss.avogadro.cc"),
];

const CLASSIFIERS: &[&str] = &[
    "License :: OSI Approved :: BSD License",
    "Programming Language :: Python",
    "Programming Language :: C++",
    "Development Status :: 4 - Beta",
    "Development Status :: 5 - Production/Stable",
    "Intended Audience :: Developers",
    "Intended Audience :: Education",
    "Intended Audience :: Science/Research",
    "Topic :: Scientific/Engineering",
    "Topic :: Scientific/Engineering :: Chemistry",
    "Topic :: Scientific/Engineering :: Physics",
    "Topic :: Scientific/Engineering :: Visualization",
    "Topic :: Scientific/Engineering :: Information Analysis",
    "Topic :: Software Development :: Libraries",
    "Operating System :: Microsoft :: Windows",
    "Operating System :: Unix",
    "Operating System :: MacOS",
];

/// Metadata handed to the packaging tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: &'static str,
    pub version: VersionSource,
    /// Build-time requirements of the version source.
    pub setup_requires: Vec<&'static str>,
    pub description: &'static str,
    pub long_description: String,
    pub long_description_content_type: &'static str,
    pub author: &'static str,
    pub license: &'static str,
    pub url: &'static str,
    pub project_urls: Vec<ProjectUrl>,
    pub classifiers: Vec<&'static str>,
    pub packages: Vec<&'static str>,
}

impl PackageMetadata {
    /// Build metadata with the given long description.
    pub fn with_long_description(long_description: impl Into<String>) -> Self {
        Self {
            name: "avogadro",
            version: VersionSource::Scm,
            setup_requires: vec!["setuptools_scm"],
            description: "Avogadro provides analysis and data processing useful in computational \
                chemistry, molecular modeling, bioinformatics, materials science, and related areas.",
            long_description: long_description.into(),
            long_description_content_type: "text/markdown",
            author: "Avogadro / OpenChemistry Developers",
            license: "BSD",
            url: "https://github.com/OpenChemistry/avogadrolibs",
            project_urls: PROJECT_URLS
                .iter()
                .map(|&(label, url)| ProjectUrl { label, url })
                .collect(),
            classifiers: CLASSIFIERS.to_vec(),
            packages: vec!["avogadro"],
        }
    }

    /// Build metadata, reading the long description from `readme`.
    ///
    /// # Errors
    ///
    /// Returns `ReadmeUnreadable` if the file is missing or not valid UTF-8.
    pub fn load(readme: &Path) -> Result<Self> {
        let long_description =
            fs::read_to_string(readme).map_err(|source| WheelError::ReadmeUnreadable {
                path: readme.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            "Read {} bytes of long description from {}",
            long_description.len(),
            readme.display()
        );
        Ok(Self::with_long_description(long_description))
    }
}
