//! Command-line interface for wheelcfg.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ExplainArgs, MetadataArgs, ProbeArgs, ResolveArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
