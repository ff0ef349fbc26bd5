//! Error types for reporting.

use thiserror::Error;

/// Errors raised while summarizing or charting the ledger
#[derive(Debug, Error)]
pub enum ReportError {
    /// There are no records to summarize or chart
    #[error("No diagnosis records to display")]
    Empty,

    /// The chart backend failed
    #[error("Chart rendering failed: {0}")]
    Render(String),

    /// Writing the chart failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Whether this is the non-fatal "nothing to display" condition
    pub fn is_empty(&self) -> bool {
        matches!(self, ReportError::Empty)
    }
}
