//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which also loads settings and captures
//! the environment once for all of them.

pub mod dispatcher;
pub mod explain;
pub mod metadata;
pub mod resolve;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
