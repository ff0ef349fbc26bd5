//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ledger error
    #[error("Storage error: {0}")]
    Store(#[from] anemia_store::StoreError),

    /// Report error
    #[error("Report error: {0}")]
    Report(#[from] anemia_report::ReportError),

    /// Form field rejected
    #[error("Invalid form input: {0}")]
    Validation(#[from] anemia_domain::ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Readline(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input closed before the form was complete
    #[error("Diagnosis cancelled before all fields were entered")]
    Cancelled,
}
