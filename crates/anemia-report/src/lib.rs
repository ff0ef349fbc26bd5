//! Anemia Shield Reporting Layer
//!
//! Turns the diagnosis ledger into a severity distribution:
//!
//! - [`summarize`] counts records per tier into a [`SeverityTally`]
//! - [`render`] lays the tally out as a pie [`ChartArtifact`]
//! - [`svg`] draws the artifact with plotters
//!
//! An empty ledger is reported as [`ReportError::Empty`] at every step so
//! callers can show "nothing to display" instead of a degenerate chart.

#![warn(missing_docs)]

pub mod chart;
pub mod error;
pub mod svg;
pub mod tally;

pub use chart::{render, ChartArtifact, Rgb, Slice};
pub use error::ReportError;
pub use tally::{summarize, SeverityTally};
