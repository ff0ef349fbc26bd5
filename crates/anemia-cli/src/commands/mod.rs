//! Command implementations, one per view.

pub mod chart;
pub mod diagnose;
pub mod home;
pub mod records;

pub use self::chart::execute_chart;
pub use self::diagnose::execute_diagnose;
pub use self::home::execute_home;
pub use self::records::execute_records;

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::form::LineSource;
use crate::output::Formatter;
use anemia_store::CsvStore;
use std::path::Path;
use tracing::debug;

/// Message shown when the ledger does not exist yet.
pub const NO_RECORDS_MESSAGE: &str = "No patient records found. Diagnose a patient to see data here!";

/// Message shown when there is nothing to chart.
pub const NO_CHART_DATA_MESSAGE: &str =
    "No data available for visualization. Diagnose some patients first!";

/// Report a view with nothing to show without breaking JSON or quiet output.
fn show_no_data(formatter: &Formatter, message: &str) {
    if formatter.notice_on_stderr() {
        eprintln!("{}", formatter.warning(message));
    }
    if let Some(output) = formatter.format_no_data(message) {
        println!("{}", output);
    }
}

/// Run one view command against the ledger.
///
/// `input` answers any diagnosis prompts. `chart_file` is used when
/// `chart` is given no `--output`.
pub fn dispatch<I: LineSource>(
    command: Command,
    store: &mut CsvStore,
    chart_file: &Path,
    input: &mut I,
    formatter: &Formatter,
) -> Result<()> {
    debug!(view = ?command.view(), ledger = %store.path().display(), "Dispatching command");
    match command {
        Command::Home => execute_home(formatter),
        Command::Diagnose(args) => {
            execute_diagnose(args, store, input, formatter)?;
        }
        Command::Records(args) => {
            execute_records(args, &*store, formatter)?;
        }
        Command::Chart(args) => {
            execute_chart(args, &*store, chart_file, formatter)?;
        }
        Command::Repl => {
            return Err(CliError::InvalidInput(
                "Already in interactive mode".to_string(),
            ))
        }
    }
    Ok(())
}
