//! On-disk row layout of the ledger

use anemia_domain::{Category, DiagnosisRecord, Severity};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names, in file order
pub const HEADER: [&str; 6] = [
    "Name",
    "Age",
    "Weight",
    "Category",
    "Hb Level",
    "Anemia Condition",
];

/// One CSV row; field names double as the header written for a new ledger
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age", deserialize_with = "trimmed")]
    age: u32,
    #[serde(rename = "Weight", deserialize_with = "trimmed")]
    weight: f64,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Hb Level", deserialize_with = "trimmed")]
    hemoglobin: f64,
    #[serde(rename = "Anemia Condition")]
    severity: String,
}

impl From<&DiagnosisRecord> for CsvRow {
    fn from(record: &DiagnosisRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            weight: record.weight,
            category: record.category.as_str().to_string(),
            hemoglobin: record.hemoglobin,
            severity: record.severity.as_str().to_string(),
        }
    }
}

impl CsvRow {
    /// Convert into a domain record, rejecting unknown labels
    pub(crate) fn into_record(self) -> Result<DiagnosisRecord, String> {
        let category = Category::parse(&self.category)
            .ok_or_else(|| format!("unknown category '{}'", self.category))?;
        let severity = Severity::parse(&self.severity)
            .ok_or_else(|| format!("unknown anemia condition '{}'", self.severity))?;

        Ok(DiagnosisRecord {
            name: self.name,
            age: self.age,
            weight: self.weight,
            category,
            hemoglobin: self.hemoglobin,
            severity,
        })
    }
}

/// Parse a number that may be padded with spaces in hand-edited files
fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, severity: &str) -> CsvRow {
        CsvRow {
            name: "Asha".to_string(),
            age: 30,
            weight: 55.0,
            category: category.to_string(),
            hemoglobin: 11.5,
            severity: severity.to_string(),
        }
    }

    #[test]
    fn test_labels_map_to_domain() {
        let record = row("Pregnant Woman", "Moderate Anemia").into_record().unwrap();
        assert_eq!(record.category, Category::PregnantWoman);
        assert_eq!(record.severity, Severity::ModerateAnemia);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = row("Elder", "Normal").into_record().unwrap_err();
        assert!(err.contains("Elder"));
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let err = row("Male", "Anemic-ish").into_record().unwrap_err();
        assert!(err.contains("Anemic-ish"));
    }

    #[test]
    fn test_unknown_sentinel_is_a_valid_condition() {
        let record = row("Male", "Unknown").into_record().unwrap();
        assert_eq!(record.severity, Severity::Unknown);
    }
}
