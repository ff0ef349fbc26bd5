//! Anemia Shield Storage Layer
//!
//! Implements the `RecordStore` trait over an append-only CSV ledger.
//!
//! # Format
//!
//! - Header row `Name,Age,Weight,Category,Hb Level,Anemia Condition`
//! - One newline-terminated row per diagnosis, UTF-8, comma-delimited
//! - Rows are only ever appended; nothing is rewritten or deleted
//!
//! # Examples
//!
//! ```no_run
//! use anemia_domain::RecordStore;
//! use anemia_store::CsvStore;
//!
//! let store = CsvStore::new("anemia_patient_data.csv");
//! let history = store.read_all().unwrap();
//! println!("{} record(s)", history.len());
//! ```

#![warn(missing_docs)]

mod row;

pub use row::HEADER;

use anemia_domain::{DiagnosisRecord, History, RecordStore};
use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use row::CsvRow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default ledger file name
pub const DEFAULT_LEDGER_FILE: &str = "anemia_patient_data.csv";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Ledger file does not exist yet
    #[error("Ledger not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A row or the header could not be parsed
    #[error("Malformed ledger at line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending row
        line: u64,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV error not attributable to a single row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CSV-backed implementation of RecordStore
///
/// The store holds only the path; the file handle is opened for the duration
/// of a single append or read and closed on every exit path.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the ledger at `path`
    ///
    /// Nothing is touched on disk until the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn open_for_read(&self) -> Result<File, StoreError> {
        File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::Io(e),
        })
    }

    fn open_for_append(&self) -> Result<File, StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        Ok(file)
    }
}

impl RecordStore for CsvStore {
    type Error = StoreError;

    fn append(&mut self, record: &DiagnosisRecord) -> Result<(), Self::Error> {
        let mut file = self.open_for_append()?;
        let len = file.metadata()?.len();
        let new_ledger = !has_content(&mut file)?;

        if new_ledger && len > 0 {
            // Blank lines only; start the ledger over so the header is line 1
            file.set_len(0)?;
        }

        // A hand-edited ledger may lack the final newline; without one the
        // new row would be glued onto the last.
        if !new_ledger && !ends_with_newline(&mut file, len)? {
            file.write_all(b"\n")?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(new_ledger)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        writer.serialize(CsvRow::from(record))?;
        writer.flush()?;

        if new_ledger {
            info!(path = %self.path.display(), "Created ledger");
        }
        debug!(
            path = %self.path.display(),
            name = %record.name,
            severity = %record.severity,
            "Appended diagnosis record"
        );
        Ok(())
    }

    fn read_all(&self) -> Result<History, Self::Error> {
        let mut file = match self.open_for_read() {
            Ok(file) => file,
            Err(StoreError::NotFound(path)) => {
                debug!(path = %path.display(), "Ledger not created yet");
                return Ok(History::NoData);
            }
            Err(e) => return Err(e),
        };

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let records = read_records(&data)?;
        debug!(path = %self.path.display(), count = records.len(), "Read ledger");
        Ok(History::Records(records))
    }
}

/// Parse a whole ledger; any bad row fails the read
///
/// Only the header is trimmed here. Names are kept exactly as written and
/// the remaining columns are trimmed while converting the row.
fn read_records(data: &[u8]) -> Result<Vec<DiagnosisRecord>, StoreError> {
    if is_blank(data) {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(data);

    let headers = reader.headers().map_err(malformed)?.clone();
    check_header(&headers, header_line(data))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(malformed)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let parsed: CsvRow = row
            .deserialize(Some(&headers))
            .map_err(|e| StoreError::Malformed {
                line,
                reason: e.to_string(),
            })?;
        let record = parsed
            .into_record()
            .map_err(|reason| StoreError::Malformed { line, reason })?;
        records.push(record);
    }

    Ok(records)
}

fn check_header(headers: &StringRecord, line: u64) -> Result<(), StoreError> {
    if headers.iter().eq(HEADER.iter().copied()) {
        return Ok(());
    }

    Err(StoreError::Malformed {
        line,
        reason: format!(
            "expected header '{}', found '{}'",
            HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        ),
    })
}

/// Map a row-level CSV error to `Malformed`, keeping I/O failures as-is
fn malformed(e: csv::Error) -> StoreError {
    if e.is_io_error() {
        return StoreError::Csv(e);
    }
    StoreError::Malformed {
        line: e.position().map(|p| p.line()).unwrap_or_default(),
        reason: e.to_string(),
    }
}

/// Whether the ledger holds nothing but whitespace
fn is_blank(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_whitespace)
}

/// 1-based line of the header row; the reader skips empty lines before it
fn header_line(data: &[u8]) -> u64 {
    let skipped = data
        .split(|&b| b == b'\n')
        .take_while(|line| line.iter().all(|&b| b == b'\r'))
        .count();
    skipped as u64 + 1
}

/// Whether the file has any non-whitespace byte; leaves the cursor anywhere
fn has_content(file: &mut File) -> io::Result<bool> {
    file.seek(SeekFrom::Start(0))?;
    for byte in BufReader::new(&mut *file).bytes() {
        if !byte?.is_ascii_whitespace() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
