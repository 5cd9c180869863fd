//! The resolved, ordered configuration.

use std::fmt;

use serde::Serialize;

use crate::options::{BuildOption, OptionValue};

/// Which resolution step produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Contribution {
    /// Fixed default toggles.
    Base,
    /// Passthrough from `EXTRA_CMAKE_ARGS`.
    ExtraArgs,
    /// Wheel mode, from `GITHUB_WORKFLOW`.
    WheelBuild,
    /// Binding helper directory from the probe.
    BindingProbe,
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::ExtraArgs => write!(f, "EXTRA_CMAKE_ARGS"),
            Self::WheelBuild => write!(f, "GITHUB_WORKFLOW"),
            Self::BindingProbe => write!(f, "binding probe"),
        }
    }
}

/// What an entry carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryValue {
    /// A typed switch.
    Option(BuildOption),
    /// A raw argument passed through untouched.
    Raw { arg: String },
}

/// One item of the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    /// The switch or raw argument.
    pub value: EntryValue,
    /// Where it came from.
    pub source: Contribution,
}

impl ConfigEntry {
    /// A typed switch from the given step.
    pub fn option(option: BuildOption, source: Contribution) -> Self {
        Self {
            value: EntryValue::Option(option),
            source,
        }
    }

    /// A raw passthrough argument from the given step.
    pub fn raw(arg: impl Into<String>, source: Contribution) -> Self {
        Self {
            value: EntryValue::Raw { arg: arg.into() },
            source,
        }
    }

    /// Render as a single argument for the build system.
    pub fn to_arg(&self) -> String {
        match &self.value {
            EntryValue::Option(opt) => opt.to_cmake_arg(),
            EntryValue::Raw { arg } => arg.clone(),
        }
    }

    /// The typed switch, if this entry carries one.
    pub fn as_option(&self) -> Option<&BuildOption> {
        match &self.value {
            EntryValue::Option(opt) => Some(opt),
            EntryValue::Raw { .. } => None,
        }
    }
}

/// Ordered output of resolution.
///
/// Entries are kept exactly as produced: nothing is deduplicated, so a
/// later entry for the same name overrides an earlier one only once the
/// build system reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfiguration {
    entries: Vec<ConfigEntry>,
}

impl ResolvedConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, entry: ConfigEntry) {
        self.entries.push(entry);
    }

    /// Append several entries, keeping their order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ConfigEntry>) {
        self.entries.extend(entries);
    }

    /// All entries in order.
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Entries produced by one step.
    pub fn from_source(&self, source: Contribution) -> impl Iterator<Item = &ConfigEntry> {
        self.entries.iter().filter(move |e| e.source == source)
    }

    /// Raw passthrough arguments, in order.
    pub fn passthrough(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match &e.value {
                EntryValue::Raw { arg } => Some(arg.as_str()),
                EntryValue::Option(_) => None,
            })
            .collect()
    }

    /// Render every entry as a build-system argument.
    pub fn to_args(&self) -> Vec<String> {
        self.entries.iter().map(ConfigEntry::to_arg).collect()
    }

    /// The value the build system ends up with for a typed switch.
    ///
    /// Last writer wins. Raw arguments are opaque and not considered.
    pub fn effective(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .rev()
            .filter_map(ConfigEntry::as_option)
            .find(|opt| opt.name == name)
            .map(|opt| &opt.value)
    }

    /// Count of typed switches with the given name.
    pub fn count_option(&self, name: &str) -> usize {
        self.entries
            .iter()
            .filter_map(ConfigEntry::as_option)
            .filter(|opt| opt.name == name)
            .count()
    }

    /// Typed switch names in first-seen order, without repeats.
    pub fn option_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for opt in self.entries.iter().filter_map(ConfigEntry::as_option) {
            if !names.contains(&opt.name.as_str()) {
                names.push(&opt.name);
            }
        }
        names
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
