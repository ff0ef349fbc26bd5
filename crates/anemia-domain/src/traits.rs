//! Trait definitions for external interactions
//!
//! These traits define the boundary between the screening logic and
//! persistence. Implementations live in other crates.

use crate::DiagnosisRecord;

/// Trait for the append-only diagnosis ledger
///
/// Implemented by the infrastructure layer (anemia-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Append one record without touching earlier rows
    fn append(&mut self, record: &DiagnosisRecord) -> Result<(), Self::Error>;

    /// Read the whole ledger in insertion order
    ///
    /// A ledger that was never written is reported as [`History::NoData`],
    /// not as an error.
    fn read_all(&self) -> Result<History, Self::Error>;
}

/// Contents of the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum History {
    /// The ledger has never been created
    NoData,

    /// Every record, oldest first (possibly empty)
    Records(Vec<DiagnosisRecord>),
}

impl History {
    /// Records in insertion order; empty for `NoData`
    pub fn records(&self) -> &[DiagnosisRecord] {
        match self {
            History::NoData => &[],
            History::Records(records) => records,
        }
    }

    /// Consume into the record list
    pub fn into_records(self) -> Vec<DiagnosisRecord> {
        match self {
            History::NoData => Vec::new(),
            History::Records(records) => records,
        }
    }

    /// Whether the ledger was never created
    pub fn is_no_data(&self) -> bool {
        matches!(self, History::NoData)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether there are no records (including `NoData`)
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
