//! Mock UI implementation for testing.
//!
//! # Example
//!
//! ```
//! use wheelcfg::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("-DUSE_QT:BOOL=FALSE");
//! assert_eq!(ui.messages(), ["-DUSE_QT:BOOL=FALSE"]);
//! ```

use super::UserInterface;

/// Captures all UI output for later assertion.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All messages joined with newlines, as they would appear on stdout.
    pub fn stdout(&self) -> String {
        self.messages.join("\n")
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.warning("b");
        ui.error("c");
        assert_eq!(ui.messages(), ["a"]);
        assert_eq!(ui.warnings(), ["b"]);
        assert_eq!(ui.errors(), ["c"]);
    }

    #[test]
    fn stdout_joins_lines() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.message("two");
        assert_eq!(ui.stdout(), "one\ntwo");
    }
}
