//! CLI command definitions and argument parsing.

use crate::view::View;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Anemia Shield - Detect & prevent anemia from a hemoglobin reading.
#[derive(Debug, Parser)]
#[command(name = "anemia-shield")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ANEMIA_SHIELD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnosis ledger (CSV) to use instead of the configured one
    #[arg(short, long, global = true, env = "ANEMIA_SHIELD_DATA")]
    pub data: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the welcome screen
    Home,

    /// Diagnose a patient from a hemoglobin reading
    Diagnose(DiagnoseArgs),

    /// Show stored diagnosis records
    Records(RecordsArgs),

    /// Chart the anemia severity distribution
    Chart(ChartArgs),

    /// Enter interactive REPL mode
    Repl,
}

impl Command {
    /// The screen this command opens, if any
    pub fn view(&self) -> Option<View> {
        match self {
            Command::Home => Some(View::Home),
            Command::Diagnose(_) => Some(View::Diagnosis),
            Command::Records(_) => Some(View::PatientData),
            Command::Chart(_) => Some(View::Visualization),
            Command::Repl => None,
        }
    }
}

/// Arguments for the diagnose command.
///
/// Any field left out is asked for interactively.
#[derive(Debug, Default, Parser)]
pub struct DiagnoseArgs {
    /// Patient name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Age in years (1-120)
    #[arg(short, long)]
    pub age: Option<u32>,

    /// Demographic category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Weight in kg (10.0-200.0)
    #[arg(short, long)]
    pub weight: Option<f64>,

    /// Hemoglobin in g/dL (4.0-18.0)
    #[arg(long = "hb", visible_alias = "hemoglobin")]
    pub hemoglobin: Option<f64>,
}

/// Arguments for the records command.
#[derive(Debug, Default, Parser)]
pub struct RecordsArgs {
    /// Show only the most recent N records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the chart command.
#[derive(Debug, Default, Parser)]
pub struct ChartArgs {
    /// SVG output path (defaults to the configured chart file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Adult male
    Male,
    /// Adult female
    Female,
    /// Child
    Child,
    /// Pregnant woman
    PregnantWoman,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CategoryArg> for anemia_domain::Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Male => anemia_domain::Category::Male,
            CategoryArg::Female => anemia_domain::Category::Female,
            CategoryArg::Child => anemia_domain::Category::Child,
            CategoryArg::PregnantWoman => anemia_domain::Category::PregnantWoman,
        }
    }
}
