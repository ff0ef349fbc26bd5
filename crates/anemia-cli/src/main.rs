//! Anemia Shield - Detect & prevent anemia from a hemoglobin reading.

use anemia_cli::{commands, logging, repl, Cli, Command, Config, Formatter, ReaderInput};
use anemia_store::CsvStore;
use clap::Parser;
use rustyline::DefaultEditor;
use std::io::IsTerminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anemia_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load or create config
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_or_init(&config_path);

    // Override the ledger for this invocation
    if let Some(data) = cli.data {
        config.storage.data_file = data;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    if !color_enabled {
        colored::control::set_override(false);
    }

    let formatter = Formatter::new(format, color_enabled);
    let mut store = CsvStore::new(&config.storage.data_file);
    tracing::info!(ledger = %store.path().display(), "Using ledger");

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &mut store, &formatter)?;
        }
        Some(cmd) => {
            let chart_file = config.storage.chart_file.clone();
            if std::io::stdin().is_terminal() {
                let mut editor = DefaultEditor::new()
                    .map_err(|e| anemia_cli::CliError::Readline(e.to_string()))?;
                commands::dispatch(cmd, &mut store, &chart_file, &mut editor, &formatter)?;
            } else {
                let mut input = ReaderInput::new(std::io::stdin().lock());
                commands::dispatch(cmd, &mut store, &chart_file, &mut input, &formatter)?;
            }
        }
    }

    Ok(())
}
