//! Records command implementation.

use crate::cli::RecordsArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::view::View;
use anemia_domain::{History, RecordStore};

use super::{show_no_data, NO_RECORDS_MESSAGE};

/// Execute the records command.
///
/// Returns the number of records shown.
pub fn execute_records<S>(args: RecordsArgs, store: &S, formatter: &Formatter) -> Result<usize>
where
    S: RecordStore,
    CliError: From<S::Error>,
{
    if args.limit == Some(0) {
        return Err(CliError::InvalidInput(
            "Limit must be at least 1".to_string(),
        ));
    }

    if formatter.format() == OutputFormat::Table {
        println!("{}", formatter.heading(View::PatientData));
    }

    let records = match store.read_all()? {
        History::NoData => {
            show_no_data(formatter, NO_RECORDS_MESSAGE);
            return Ok(0);
        }
        History::Records(records) => records,
    };

    // Most recent rows are at the end of the ledger
    let skip = args
        .limit
        .map_or(0, |limit| records.len().saturating_sub(limit));
    let shown = &records[skip..];

    println!("{}", formatter.format_records(shown)?);
    Ok(shown.len())
}
