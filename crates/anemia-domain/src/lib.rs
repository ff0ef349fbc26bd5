//! Anemia Shield Domain Layer
//!
//! This crate contains the core screening logic and domain model for Anemia Shield.
//! It defines the demographic categories, severity tiers, the WHO-style hemoglobin
//! range tables and the trait interfaces that the storage and reporting layers implement.
//!
//! ## Key Concepts
//!
//! - **Category**: The demographic group a reading is judged against
//! - **Severity**: Normal → mild → moderate → severe anemia, plus an `Unknown` sentinel
//! - **Classifier**: First-match scan of a fixed range table per category
//! - **Diagnosis Record**: One immutable row of the append-only ledger
//! - **History**: The full ledger, or an explicit "no data yet" signal
//!
//! ## Architecture
//!
//! - Pure logic only, no I/O
//! - Storage and reporting live in other crates
//! - Trait definitions for the storage boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advice;
pub mod category;
pub mod classifier;
pub mod error;
pub mod record;
pub mod severity;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use classifier::{classify, classify_named, ranges_for, Classification, SeverityRange};
pub use error::ValidationError;
pub use record::{DiagnosisRecord, Intake};
pub use severity::Severity;
pub use traits::{History, RecordStore};
