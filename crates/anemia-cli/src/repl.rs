//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each line names a view to open; the diagnosis form prompts through the
//! same line editor.

use crate::cli::{ChartArgs, Command, DiagnoseArgs, RecordsArgs};
use crate::commands;
use crate::config::{app_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::view::View;
use anemia_store::CsvStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, store: &mut CsvStore, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Anemia Shield REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Readline(e.to_string()))?
        .build();
    let mut editor =
        DefaultEditor::with_config(editor_config).map_err(|e| CliError::Readline(e.to_string()))?;

    let history_path = match history_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("REPL history disabled: {}", e);
            None
        }
    };
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("anemia> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Views) => print_views(formatter),
                    Ok(ReplCommand::Command(cmd)) => {
                        let chart_file = &config.storage.chart_file;
                        if let Err(e) =
                            commands::dispatch(cmd, store, chart_file, &mut editor, formatter)
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Show the command list
    Help,
    /// List the views
    Views,
    /// Open a view
    Command(Command),
}

/// Parse a REPL command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&word, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match word.to_lowercase().as_str() {
        "exit" | "quit" | "q" => return Ok(ReplCommand::Exit),
        "help" | "?" => return Ok(ReplCommand::Help),
        "views" | "menu" => return Ok(ReplCommand::Views),
        _ => {}
    }

    // Multi-word view titles such as "patient data"
    if let Some(view) = View::parse(&parts.join(" ")) {
        return Ok(ReplCommand::Command(open_view(view, &[])?));
    }

    let view = View::parse(word).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            word
        ))
    })?;

    Ok(ReplCommand::Command(open_view(view, args)?))
}

fn open_view(view: View, args: &[&str]) -> Result<Command> {
    let command = match view {
        View::Home => Command::Home,
        View::Diagnosis => Command::Diagnose(DiagnoseArgs::default()),
        View::PatientData => Command::Records(parse_records_args(args)?),
        View::Visualization => Command::Chart(ChartArgs {
            output: args.first().map(PathBuf::from),
        }),
    };
    Ok(command)
}

fn parse_records_args(args: &[&str]) -> Result<RecordsArgs> {
    let limit = match args.first() {
        Some(n) => Some(n.parse().map_err(|_| {
            CliError::InvalidInput("Usage: records [limit]".to_string())
        })?),
        None => None,
    };
    Ok(RecordsArgs { limit })
}

fn history_path() -> Result<PathBuf> {
    let dir = app_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  home, h                        - Welcome screen");
    println!("  diagnose, d                    - Diagnose a patient (prompts for each field)");
    println!("  records, r [limit]             - Show stored records, optionally the latest N");
    println!("  chart, c [path]                - Refresh the distribution chart");
    println!("  views                          - List the views");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

fn print_views(formatter: &Formatter) {
    println!("{}", formatter.info("Views:"));
    for view in View::ALL {
        println!("  {:<14} {:<10} {}", view.title(), view.command(), view.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_words() {
        assert!(matches!(parse_repl_command("home"), Ok(ReplCommand::Command(Command::Home))));
        assert!(matches!(
            parse_repl_command("Diagnosis"),
            Ok(ReplCommand::Command(Command::Diagnose(_)))
        ));
        assert!(matches!(
            parse_repl_command("viz"),
            Ok(ReplCommand::Command(Command::Chart(ChartArgs { output: None })))
        ));
    }

    #[test]
    fn test_multi_word_view_title() {
        assert!(matches!(
            parse_repl_command("Patient   Data"),
            Ok(ReplCommand::Command(Command::Records(RecordsArgs { limit: None })))
        ));
    }

    #[test]
    fn test_records_limit() {
        match parse_repl_command("records 5") {
            Ok(ReplCommand::Command(Command::Records(args))) => assert_eq!(args.limit, Some(5)),
            other => panic!("Expected records command, got {:?}", other),
        }
        assert!(parse_repl_command("records many").is_err());
    }

    #[test]
    fn test_chart_path() {
        match parse_repl_command("chart out/pie.svg") {
            Ok(ReplCommand::Command(Command::Chart(args))) => {
                assert_eq!(args.output, Some(PathBuf::from("out/pie.svg")))
            }
            other => panic!("Expected chart command, got {:?}", other),
        }
    }

    #[test]
    fn test_control_words() {
        assert!(matches!(parse_repl_command("quit"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("?"), Ok(ReplCommand::Help)));
        assert!(matches!(parse_repl_command("views"), Ok(ReplCommand::Views)));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_repl_command("settings").unwrap_err();
        assert!(err.to_string().contains("Unknown command: settings"));
    }
}
