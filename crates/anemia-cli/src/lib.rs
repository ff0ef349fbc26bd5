//! Anemia Shield CLI library.
//!
//! This library provides the command-line surface for Anemia Shield:
//! argument parsing, configuration, the interactive diagnosis form,
//! the four views and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod output;
pub mod repl;
pub mod view;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use form::{IntakeForm, LineSource, ReaderInput};
pub use output::Formatter;
pub use view::View;
