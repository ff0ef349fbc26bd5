//! Home command implementation.

use crate::config::OutputFormat;
use crate::output::Formatter;
use crate::view::View;

/// Execute the home command.
pub fn execute_home(formatter: &Formatter) {
    if formatter.format() == OutputFormat::Table {
        println!("{}", formatter.heading(View::Home));
    }
    println!("{}", formatter.format_home());
}
