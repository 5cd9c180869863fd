//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve CMake switches and package metadata for Avogadro wheel builds.
#[derive(Debug, Parser)]
#[command(name = "wheelcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default wheelcfg.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter used to look for pybind11
    #[arg(long, global = true, env = "WHEELCFG_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print resolved CMake arguments (default if no command specified)
    Args(ResolveArgs),

    /// Show where each resolved argument came from
    Explain(ExplainArgs),

    /// Print package metadata for the packaging tool
    Metadata(MetadataArgs),
}

/// Overrides for the pybind11 lookup.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Use this pybind11 CMake directory instead of asking Python
    #[arg(long, value_name = "DIR", conflicts_with = "no_binding_probe")]
    pub pybind11_dir: Option<PathBuf>,

    /// Skip the pybind11 lookup entirely
    #[arg(long)]
    pub no_binding_probe: bool,
}

/// Arguments for the `args` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Output entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `metadata` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MetadataArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["wheelcfg"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn args_with_json() {
        let cli = Cli::parse_from(["wheelcfg", "args", "--json"]);
        match cli.command {
            Some(Commands::Args(args)) => assert!(args.json),
            other => panic!("Expected Args command, got {:?}", other),
        }
    }

    #[test]
    fn probe_overrides_parse() {
        let cli = Cli::parse_from(["wheelcfg", "explain", "--pybind11-dir", "/p"]);
        match cli.command {
            Some(Commands::Explain(args)) => {
                assert_eq!(args.probe.pybind11_dir, Some(PathBuf::from("/p")));
                assert!(!args.probe.no_binding_probe);
            }
            other => panic!("Expected Explain command, got {:?}", other),
        }
    }

    #[test]
    fn probe_overrides_conflict() {
        let result = Cli::try_parse_from([
            "wheelcfg",
            "args",
            "--pybind11-dir",
            "/p",
            "--no-binding-probe",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["wheelcfg", "metadata", "--project", "/src", "--debug"]);
        assert_eq!(cli.project, Some(PathBuf::from("/src")));
        assert!(cli.debug);
    }
}
