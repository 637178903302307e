//! Shared types and helpers for CLI command handlers.

use std::fmt;
use std::path::Path;

use crate::config::Config;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// I/O or configuration failure.
    Error = 1,
    /// Input validated and found invalid.
    ValidationFailed = 2,
}

/// Error kind determining the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File system or parse failure.
    Io,
    /// The configuration is invalid.
    Validation,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// An I/O or parse error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// A validation error (invalid configuration content).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io => ExitCode::Error,
            CliErrorKind::Validation => ExitCode::ValidationFailed,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration from an explicit path, or discovers it in the
/// current directory (falling back to the built-in default).
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    match explicit {
        Some(path) => Config::from_path(path)
            .map_err(|e| CliError::io(format!("Failed to load config: {e:#}"))),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| CliError::io(format!("Failed to determine current directory: {e}")))?;
            Config::load_or_default(&cwd)
                .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::io("x").exit_code(), ExitCode::Error);
        assert_eq!(
            CliError::validation("x").exit_code(),
            ExitCode::ValidationFailed
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = CliError::io("Failed to read config");
        assert_eq!(err.to_string(), "Failed to read config");
    }
}
