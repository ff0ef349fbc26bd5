//! Chart command implementation.

use crate::cli::ChartArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::view::View;
use anemia_domain::RecordStore;
use anemia_report::{render, summarize, svg, ReportError};
use std::path::{Path, PathBuf};

use super::{show_no_data, NO_CHART_DATA_MESSAGE};

/// Execute the chart command.
///
/// Prints the tally and writes the pie chart to `--output`, or to
/// `default_output` when none was given. Returns the chart path, or `None`
/// when there was nothing to chart.
pub fn execute_chart<S>(
    args: ChartArgs,
    store: &S,
    default_output: &Path,
    formatter: &Formatter,
) -> Result<Option<PathBuf>>
where
    S: RecordStore,
    CliError: From<S::Error>,
{
    let table = formatter.format() == OutputFormat::Table;
    if table {
        println!("{}", formatter.heading(View::Visualization));
    }

    let history = store.read_all()?;
    let tally = match summarize(history.records()) {
        Ok(tally) => tally,
        Err(ReportError::Empty) => {
            show_no_data(formatter, NO_CHART_DATA_MESSAGE);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", formatter.format_tally(&tally)?);

    let chart = render(&tally)?;
    let output = args.output.unwrap_or_else(|| default_output.to_path_buf());
    svg::write_svg(&chart, &output)?;

    if table {
        println!(
            "{}",
            formatter.success(&format!("{} written to {}", chart.title, output.display()))
        );
    }
    Ok(Some(output))
}
