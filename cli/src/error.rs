//! Error types for the minibrowser CLI

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Browser process could not be started
    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    /// Navigation or DOM retrieval failed for a page
    #[error("page load failed: {0}")]
    PageLoad(String),

    /// Capability not offered by the selected engine
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Invalid command arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// IO error
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization error
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::PageLoad(_) => 1,
            CliError::BrowserLaunch(_) => 3,
            CliError::InvalidArguments(_) => 64,   // EX_USAGE
            CliError::SerializationError(_) => 65, // EX_DATAERR
            CliError::Unsupported(_) => 69,        // EX_UNAVAILABLE
            CliError::IoError(_) | CliError::CsvError(_) => 74, // EX_IOERR
        }
    }
}

/// Non-fatal failures local to one extraction category.
///
/// These never abort a page-load cycle; they surface as warnings or as an
/// inline message next to the affected section.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No tables found.")]
    NoTables,

    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("{0} selectors are not supported by this engine")]
    UnsupportedSelector(String),

    #[error("query failed: {0}")]
    Query(String),
}

// =============================================================================
// Tests
// =============================================================================
