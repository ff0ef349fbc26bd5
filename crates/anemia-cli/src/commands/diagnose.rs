//! Diagnose command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::form::{IntakeForm, LineSource};
use crate::output::Formatter;
use crate::view::View;
use anemia_domain::{DiagnosisRecord, RecordStore};
use tracing::info;

/// Execute the diagnose command.
///
/// Missing fields are read from `input`. The classified record is appended
/// to `store` and returned.
pub fn execute_diagnose<F, S, I>(
    form: F,
    store: &mut S,
    input: &mut I,
    formatter: &Formatter,
) -> Result<DiagnosisRecord>
where
    F: Into<IntakeForm>,
    S: RecordStore,
    crate::error::CliError: From<S::Error>,
    I: LineSource,
{
    let table = formatter.format() == OutputFormat::Table;
    if table {
        println!("{}", formatter.heading(View::Diagnosis));
    }

    let intake = form.into().complete(input, formatter)?;
    let (record, classification) = intake.diagnose()?;
    info!(severity = %record.severity, category = %record.category, "Classified reading");

    println!("{}", formatter.format_diagnosis(&record, &classification)?);
    if table {
        println!("{}", formatter.success("Diagnosis complete!"));
    }

    store.append(&record)?;
    if table {
        println!("{}", formatter.success("Patient data saved successfully!"));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CategoryArg, DiagnoseArgs};
    use crate::form::ReaderInput;
    use anemia_domain::Severity;
    use anemia_store::CsvStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_diagnose_appends_record() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("ledger.csv"));
        let mut input = ReaderInput::silent(Cursor::new(Vec::new()));
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = DiagnoseArgs {
            name: Some("  Asha ".to_string()),
            age: Some(30),
            category: Some(CategoryArg::Female),
            weight: Some(55.0),
            hemoglobin: Some(11.5),
        };
        let record = execute_diagnose(args, &mut store, &mut input, &formatter).unwrap();

        assert_eq!(record.name, "Asha");
        assert_eq!(record.severity, Severity::MildAnemia);
        assert_eq!(store.read_all().unwrap().records(), &[record]);
    }

    #[test]
    fn test_out_of_range_argument_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("ledger.csv"));
        let mut input = ReaderInput::silent(Cursor::new(Vec::new()));
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = DiagnoseArgs {
            name: Some("Asha".to_string()),
            age: Some(30),
            category: Some(CategoryArg::Female),
            weight: Some(55.0),
            hemoglobin: Some(25.0),
        };
        let err = execute_diagnose(args, &mut store, &mut input, &formatter).unwrap_err();

        assert!(matches!(err, crate::error::CliError::Validation(_)));
        assert!(!store.exists());
    }
}
