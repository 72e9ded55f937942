//! CLI error type and exit codes.

use thiserror::Error;

/// Exit codes used by the binary.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed validation before any device was contacted.
    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The operation produced error diagnostics; they have already been
    /// printed to stderr.
    #[error("operation failed")]
    Failed,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::Failed => exit_code::GENERAL,
        }
    }
}
