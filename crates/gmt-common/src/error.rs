//! Error types shared by the GMT binding crates.

use thiserror::Error;

/// Result type alias using GmtError.
pub type GmtResult<T> = Result<T, GmtError>;

/// Primary error type for GMT session and dataset operations.
#[derive(Debug, Error)]
pub enum GmtError {
    // === Caller Errors ===
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // === Engine Errors ===
    #[error("Failed to run GMT: {0}")]
    Command(String),

    #[error("Module '{module}' failed with status {status}: {stderr}")]
    ModuleFailed {
        module: String,
        status: i32,
        stderr: String,
    },

    #[error("Cannot resolve common option -{option}{value} to a length")]
    UnresolvedCommonOption { option: char, value: String },

    #[error("Unexpected output from GMT: {0}")]
    InvalidOutput(String),

    #[error("Session error: {0}")]
    SessionState(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GmtError {
    /// Create an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an InvalidOutput error.
    pub fn invalid_output(msg: impl Into<String>) -> Self {
        Self::InvalidOutput(msg.into())
    }

    /// Whether the error was raised before anything reached the engine.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, GmtError::InvalidInput(_) | GmtError::Config(_))
    }
}
