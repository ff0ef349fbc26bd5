//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::view::View;
use anemia_domain::{Classification, DiagnosisRecord, Severity};
use anemia_report::SeverityTally;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Feature list shown on the home screen.
const FEATURES: [&str; 4] = [
    "Instant anemia diagnosis based on WHO hemoglobin thresholds",
    "Preventive measures across four treatment traditions",
    "Patient records kept in a local CSV ledger",
    "Severity distribution charts",
];

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a view heading.
    pub fn heading(&self, view: View) -> String {
        self.colorize(&format!("== {} ==", view.title()), "cyan")
    }

    /// Format the welcome screen.
    pub fn format_home(&self) -> String {
        let mut lines = vec![
            self.colorize("Anemia Shield: Detect & Prevent", "cyan"),
            "Your smart health companion for anemia diagnosis".to_string(),
            String::new(),
            "What you can do here:".to_string(),
        ];
        lines.extend(FEATURES.iter().map(|f| format!("  - {}", f)));
        lines.push(String::new());
        lines.push("Views:".to_string());
        lines.extend(
            View::ALL
                .iter()
                .map(|v| format!("  {:<10} {}", v.command(), v.description())),
        );
        lines.join("\n")
    }

    /// Format stored diagnosis records.
    pub fn format_records(&self, records: &[DiagnosisRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_records_table(records),
            OutputFormat::Quiet => Ok(self.format_records_quiet(records)),
        }
    }

    fn format_records_json(&self, records: &[DiagnosisRecord]) -> Result<String> {
        let rows: Vec<serde_json::Value> = records.iter().map(record_json).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn format_records_table(&self, records: &[DiagnosisRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No records found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(anemia_store::HEADER);

        for record in records {
            builder.push_record([
                record.name.clone(),
                record.age.to_string(),
                record.weight.to_string(),
                record.category.to_string(),
                record.hemoglobin.to_string(),
                self.severity_label(record.severity),
            ]);
        }

        Ok(self.finish_table(builder))
    }

    fn format_records_quiet(&self, records: &[DiagnosisRecord]) -> String {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        names.join("\n")
    }

    /// Format a diagnosis result with its preventive advice.
    pub fn format_diagnosis(
        &self,
        record: &DiagnosisRecord,
        classification: &Classification,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = record_json(record);
                value["advice"] = serde_json::json!(classification.advice.lines().collect::<Vec<_>>());
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(record.severity.to_string()),
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("Patient Name: {}", record.name),
                    format!(
                        "Age: {} | Category: {} | Weight: {} kg",
                        record.age, record.category, record.weight
                    ),
                    format!("Hemoglobin: {} g/dL", record.hemoglobin),
                    format!(
                        "Predicted Anemia Condition: {}",
                        self.severity_label(record.severity)
                    ),
                    String::new(),
                    "Preventive Measures:".to_string(),
                ];
                lines.extend(classification.advice.lines().map(|l| format!("  {}", l)));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a severity tally.
    pub fn format_tally(&self, tally: &SeverityTally) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = tally
                    .iter()
                    .map(|(severity, count)| {
                        serde_json::json!({
                            "condition": severity.as_str(),
                            "count": count,
                            "percentage": tally.percentage(severity),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(tally
                .iter()
                .map(|(severity, count)| format!("{}\t{}", severity, count))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Anemia Condition", "Count", "Share"]);
                for (severity, count) in tally.iter() {
                    builder.push_record([
                        self.severity_label(severity),
                        count.to_string(),
                        format!("{:.1}%", tally.percentage(severity)),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Stdout content for a view with nothing to show.
    ///
    /// Only tables carry the warning; JSON gets an empty array.
    pub fn format_no_data(&self, message: &str) -> Option<String> {
        match self.format {
            OutputFormat::Table => Some(self.warning(message)),
            OutputFormat::Json => Some("[]".to_string()),
            OutputFormat::Quiet => None,
        }
    }

    /// Whether notices must go to stderr to keep stdout machine-readable.
    pub fn notice_on_stderr(&self) -> bool {
        self.format != OutputFormat::Table
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn severity_label(&self, severity: Severity) -> String {
        self.colorize(severity.as_str(), severity_color(severity))
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Display color for a severity tier.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "green",
        Severity::MildAnemia => "yellow",
        Severity::ModerateAnemia => "magenta",
        Severity::SevereAnemia => "red",
        Severity::Unknown => "",
    }
}

fn record_json(record: &DiagnosisRecord) -> serde_json::Value {
    serde_json::json!({
        "name": record.name,
        "age": record.age,
        "weight": record.weight,
        "category": record.category.as_str(),
        "hb_level": record.hemoglobin,
        "anemia_condition": record.severity.as_str(),
    })
}
