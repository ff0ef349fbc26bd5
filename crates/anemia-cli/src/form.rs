//! Interactive diagnosis form.
//!
//! Fields given on the command line are taken as-is; the rest are prompted
//! for one at a time, re-prompting until the value passes validation.

use crate::cli::DiagnoseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use anemia_domain::record::{parse_category, validate_age, validate_hemoglobin, validate_weight};
use anemia_domain::{Category, Intake, ValidationError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

/// Something that can answer a prompt with one line of text.
///
/// `Ok(None)` means the input is closed.
pub trait LineSource {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(CliError::Readline(e.to_string())),
        }
    }
}

/// Line source over any buffered reader, for piped stdin and tests.
pub struct ReaderInput<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ReaderInput<R> {
    /// Read answers from `reader`, printing prompts to stdout.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: true,
        }
    }

    /// Read answers from `reader` without printing prompts.
    pub fn silent(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: false,
        }
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo_prompts {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A partially filled diagnosis form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    /// Patient name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Demographic category
    pub category: Option<Category>,
    /// Weight in kg
    pub weight: Option<f64>,
    /// Hemoglobin in g/dL
    pub hemoglobin: Option<f64>,
}

impl From<DiagnoseArgs> for IntakeForm {
    fn from(args: DiagnoseArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            category: args.category.map(Into::into),
            weight: args.weight,
            hemoglobin: args.hemoglobin,
        }
    }
}

impl IntakeForm {
    /// Whether every field already has a value.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.age.is_some()
            && self.category.is_some()
            && self.weight.is_some()
            && self.hemoglobin.is_some()
    }

    /// Prompt for every missing field and return the filled form.
    ///
    /// Values supplied up front are not re-checked here; [`Intake::diagnose`]
    /// validates the whole submission.
    pub fn complete<S: LineSource>(self, input: &mut S, formatter: &Formatter) -> Result<Intake> {
        let name = match self.name {
            Some(name) => name,
            None => ask(input, formatter, "Enter your name: ", parse_name)?,
        };
        let age = match self.age {
            Some(age) => age,
            None => ask(input, formatter, "Enter your age (1-120): ", parse_age)?,
        };
        let category = match self.category {
            Some(category) => category,
            None => ask(input, formatter, &category_prompt(), parse_category_choice)?,
        };
        let weight = match self.weight {
            Some(weight) => weight,
            None => ask(input, formatter, "Enter your weight in kg (10.0-200.0): ", parse_weight)?,
        };
        let hemoglobin = match self.hemoglobin {
            Some(hemoglobin) => hemoglobin,
            None => ask(
                input,
                formatter,
                "Enter hemoglobin in g/dL (4.0-18.0): ",
                parse_hemoglobin,
            )?,
        };

        Ok(Intake {
            name,
            age,
            category,
            weight,
            hemoglobin,
        })
    }
}

/// Prompt until `parse` accepts the answer.
fn ask<S, T, F>(input: &mut S, formatter: &Formatter, prompt: &str, parse: F) -> Result<T>
where
    S: LineSource,
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        let line = input.read_line(prompt)?.ok_or(CliError::Cancelled)?;
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(message) => eprintln!("{}", formatter.warning(&message)),
        }
    }
}

fn category_prompt() -> String {
    let options: Vec<String> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}) {}", i + 1, c))
        .collect();
    format!("Select category [{}]: ", options.join(", "))
}

fn parse_name(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        Err(ValidationError::EmptyName.to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_age(s: &str) -> std::result::Result<u32, String> {
    let age: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of years", s))?;
    validate_age(age).map_err(|e| e.to_string())?;
    Ok(age)
}

/// Accepts a menu number (1-4) or a category name.
fn parse_category_choice(s: &str) -> std::result::Result<Category, String> {
    if let Ok(index) = s.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| Category::ALL.get(i).copied())
            .ok_or_else(|| format!("Choose a number from 1 to {}", Category::ALL.len()));
    }
    parse_category(s).map_err(|e| e.to_string())
}

fn parse_decimal(s: &str, field: &str) -> std::result::Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid {}", s, field))
}

fn parse_weight(s: &str) -> std::result::Result<f64, String> {
    let weight = parse_decimal(s, "weight")?;
    validate_weight(weight).map_err(|e| e.to_string())?;
    Ok(weight)
}

fn parse_hemoglobin(s: &str) -> std::result::Result<f64, String> {
    let hemoglobin = parse_decimal(s, "hemoglobin reading")?;
    validate_hemoglobin(hemoglobin).map_err(|e| e.to_string())?;
    Ok(hemoglobin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Cursor;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    fn input(text: &str) -> ReaderInput<Cursor<Vec<u8>>> {
        ReaderInput::silent(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_prompts_for_every_field() {
        let mut source = input("Asha\n30\n2\n55.5\n11.5\n");
        let intake = IntakeForm::default()
            .complete(&mut source, &formatter())
            .unwrap();

        assert_eq!(intake.name, "Asha");
        assert_eq!(intake.age, 30);
        assert_eq!(intake.category, Category::Female);
        assert_eq!(intake.weight, 55.5);
        assert_eq!(intake.hemoglobin, 11.5);
    }

    #[test]
    fn test_reprompts_on_invalid_values() {
        let mut source = input("\nRavi\n0\nabc\n45\nAlien\n9\nchild\n5\n25\n20\n3.5\n10.2\n");
        let intake = IntakeForm::default()
            .complete(&mut source, &formatter())
            .unwrap();

        assert_eq!(intake.name, "Ravi");
        assert_eq!(intake.age, 45);
        assert_eq!(intake.category, Category::Child);
        assert_eq!(intake.weight, 25.0);
        assert_eq!(intake.hemoglobin, 10.2);
    }

    #[test]
    fn test_only_missing_fields_are_prompted() {
        let form = IntakeForm {
            name: Some("Meera".to_string()),
            age: Some(28),
            category: Some(Category::PregnantWoman),
            weight: None,
            hemoglobin: Some(9.4),
        };
        assert!(!form.is_complete());

        let mut source = input("62\n");
        let intake = form.complete(&mut source, &formatter()).unwrap();
        assert_eq!(intake.weight, 62.0);
        assert_eq!(intake.category, Category::PregnantWoman);
    }

    #[test]
    fn test_closed_input_cancels() {
        let mut source = input("Asha\n30\n");
        let err = IntakeForm::default()
            .complete(&mut source, &formatter())
            .unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn test_category_choice() {
        assert_eq!(parse_category_choice("4"), Ok(Category::PregnantWoman));
        assert_eq!(parse_category_choice("pregnant woman"), Ok(Category::PregnantWoman));
        assert!(parse_category_choice("0").is_err());
        assert!(parse_category_choice("5").is_err());
    }

    #[test]
    fn test_args_fill_form() {
        let args = DiagnoseArgs {
            name: Some("Asha".to_string()),
            age: Some(30),
            category: Some(crate::cli::CategoryArg::Female),
            weight: Some(55.0),
            hemoglobin: Some(11.5),
        };
        let form = IntakeForm::from(args);
        assert!(form.is_complete());
    }
}
