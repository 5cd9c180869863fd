//! Output for CLI commands.
//!
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writes results to stdout and diagnostics to stderr
//! - [`MockUI`] captures output for tests
//!
//! Stdout carries only command results so it can be piped straight into a
//! build invocation.

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Emit one line of command output.
    fn message(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);
}
