//! Error types for wheelcfg operations.
//!
//! This module defines [`WheelError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolving build switches never fails; absent inputs mean "no contribution"
//! - Use `WheelError` for the few fatal conditions (unreadable README, bad settings)
//! - Use `anyhow::Error` (via `WheelError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wheelcfg operations.
#[derive(Debug, Error)]
pub enum WheelError {
    /// The long-description file could not be read.
    #[error("Cannot read long description at {path}: {source}")]
    ReadmeUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An external program could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for wheelcfg operations.
pub type Result<T> = std::result::Result<T, WheelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_unreadable_displays_path() {
        let err = WheelError::ReadmeUnreadable {
            path: PathBuf::from("/src/README.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/src/README.md"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = WheelError::ConfigParseError {
            path: PathBuf::from("/wheelcfg.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/wheelcfg.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = WheelError::CommandFailed {
            command: "python3 -c".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 -c"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WheelError = io_err.into();
        assert!(matches!(err, WheelError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: WheelError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, WheelError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
