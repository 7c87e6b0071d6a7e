//! CLI errors

use thiserror::Error;

use crate::error::ApiError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// API or store failure
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Socket or seed-file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON in the expected shape
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}
