//! # Shell Error Type
//!
//! Errors that end the session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Bad number / empty name ── ValidationError ──► print, re-prompt       │
//! │                                                                         │
//! │  Missing id ────────────── Ok(None) ──► CoreError ──► print, continue  │
//! │                                                                         │
//! │  Occupied room ─────────── DbError::ForeignKeyViolation                │
//! │  Assigned chore                  └──► CoreError ──► print, continue    │
//! │                                                                         │
//! │  Anything else ─────────── ShellError ──► main logs it, exit code 1    │
//! │                                                                         │
//! │  stdin closed ──────────── ShellError::EndOfInput ──► clean exit       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use roommates_db::DbError;
use thiserror::Error;

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Database failure other than the handled foreign key cases.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream closed (Ctrl-D or end of piped input).
    #[error("Input closed")]
    EndOfInput,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but couldn't be read.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// Config file isn't valid TOML for [`crate::config::ShellConfig`].
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
