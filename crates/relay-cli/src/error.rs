//! Harness error types with exit code mapping.

use std::path::PathBuf;

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the `relay` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Reading or writing a document failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Environment configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dates must be real `MM/DD/YYYY` calendar dates.
    #[error("Invalid date: {0} (expected MM/DD/YYYY)")]
    InvalidDate(String),

    /// The deployment does not run relays on this day.
    #[error("Day {day} is not allowed here (allowed: {allowed})")]
    DayNotAllowed { day: u8, allowed: String },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::InvalidDate(_) | CliError::DayNotAllowed { .. } => 2,
            CliError::Domain(err) => domain_exit_code(err),
            CliError::Io { .. } => 74,
        }
    }
}

fn domain_exit_code(err: &DomainError) -> u8 {
    match err {
        DomainError::Validation(_) => 3,
        DomainError::NotFound(_) => 4,
        DomainError::State(_) => 5,
        DomainError::Serialization(_) => 65,
    }
}
