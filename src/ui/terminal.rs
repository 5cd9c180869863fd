//! Terminal output.

use std::io::{self, Write};

use super::UserInterface;

/// Writes messages to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalUI;

impl TerminalUI {
    /// Create a terminal UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        // A closed pipe (`wheelcfg args | head -1`) is not an error here.
        writeln!(io::stdout().lock(), "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(io::stderr().lock(), "warning: {}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(io::stderr().lock(), "error: {}", msg).ok();
    }
}
