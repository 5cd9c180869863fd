//! External program execution.
//!
//! Programs are spawned directly, never through a shell, so arguments reach
//! them verbatim.

use crate::error::{Result, WheelError};
use std::process::{Command, Stdio};

/// Captured outcome of a finished program.
#[derive(Debug, Clone)]
pub struct ProgramOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, lossily decoded.
    pub stdout: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

/// Run a program to completion, capturing stdout.
///
/// Stderr is discarded. A non-zero exit is reported through
/// [`ProgramOutput::success`]; only a failure to spawn is an error.
pub fn execute_program(program: &str, args: &[&str]) -> Result<ProgramOutput> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", program, e);
            WheelError::CommandFailed {
                command: program.to_string(),
                code: None,
            }
        })?;

    Ok(ProgramOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error() {
        let result = execute_program("/nonexistent/wheelcfg-test-program", &[]);
        assert!(matches!(
            result,
            Err(WheelError::CommandFailed { code: None, .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let output = execute_program("echo", &["hello"]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure_not_error() {
        let output = execute_program("sh", &["-c", "exit 3"]).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn stderr_is_not_captured() {
        let output = execute_program("sh", &["-c", "echo oops >&2"]).unwrap();
        assert!(output.success);
        assert!(output.stdout.is_empty());
    }
}
