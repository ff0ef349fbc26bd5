//! Diagnosis records and the form intake that produces them

use crate::classifier::{classify, Classification};
use crate::{Category, Severity, ValidationError};
use std::ops::RangeInclusive;

/// Accepted ages, in years
pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;

/// Accepted weights, in kg
pub const WEIGHT_RANGE: RangeInclusive<f64> = 10.0..=200.0;

/// Accepted hemoglobin readings, in g/dL
pub const HEMOGLOBIN_RANGE: RangeInclusive<f64> = 4.0..=18.0;

/// One row of the diagnosis ledger
///
/// Records are created when a reading is classified and never change
/// afterwards; the ledger only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisRecord {
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Weight in kg
    pub weight: f64,
    /// Demographic category
    pub category: Category,
    /// Hemoglobin reading in g/dL
    pub hemoglobin: f64,
    /// Tier assigned by the classifier
    pub severity: Severity,
}

/// Unvalidated diagnosis form submission
#[derive(Debug, Clone, PartialEq)]
pub struct Intake {
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Demographic category
    pub category: Category,
    /// Weight in kg
    pub weight: f64,
    /// Hemoglobin reading in g/dL
    pub hemoglobin: f64,
}

impl Intake {
    /// Check every field against the form constraints
    ///
    /// Fields are checked in form order and the first violation is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_age(self.age)?;
        validate_weight(self.weight)?;
        validate_hemoglobin(self.hemoglobin)?;
        Ok(())
    }

    /// Validate, classify and build the ledger record
    ///
    /// The stored name is trimmed of surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use anemia_domain::{Category, Intake, Severity};
    ///
    /// let intake = Intake {
    ///     name: "Asha".to_string(),
    ///     age: 30,
    ///     category: Category::Female,
    ///     weight: 55.0,
    ///     hemoglobin: 11.5,
    /// };
    /// let (record, result) = intake.diagnose().unwrap();
    /// assert_eq!(record.severity, Severity::MildAnemia);
    /// assert_eq!(result.severity, record.severity);
    /// ```
    pub fn diagnose(self) -> Result<(DiagnosisRecord, Classification), ValidationError> {
        self.validate()?;
        let classification = classify(self.hemoglobin, self.category);
        let record = DiagnosisRecord {
            name: self.name.trim().to_string(),
            age: self.age,
            weight: self.weight,
            category: self.category,
            hemoglobin: self.hemoglobin,
            severity: classification.severity,
        };
        Ok((record, classification))
    }
}

/// Check an age against [`AGE_RANGE`]
pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if AGE_RANGE.contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::Age {
            value: age,
            min: *AGE_RANGE.start(),
            max: *AGE_RANGE.end(),
        })
    }
}

/// Check a weight against [`WEIGHT_RANGE`]
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    // NaN fails `contains`
    if WEIGHT_RANGE.contains(&weight) {
        Ok(())
    } else {
        Err(ValidationError::Weight {
            value: weight,
            min: *WEIGHT_RANGE.start(),
            max: *WEIGHT_RANGE.end(),
        })
    }
}

/// Check a hemoglobin reading against [`HEMOGLOBIN_RANGE`]
pub fn validate_hemoglobin(hemoglobin: f64) -> Result<(), ValidationError> {
    if HEMOGLOBIN_RANGE.contains(&hemoglobin) {
        Ok(())
    } else {
        Err(ValidationError::Hemoglobin {
            value: hemoglobin,
            min: *HEMOGLOBIN_RANGE.start(),
            max: *HEMOGLOBIN_RANGE.end(),
        })
    }
}

/// Parse a category label, reporting the label on failure
pub fn parse_category(label: &str) -> Result<Category, ValidationError> {
    Category::parse(label).ok_or_else(|| ValidationError::Category(label.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake() -> Intake {
        Intake {
            name: "Asha".to_string(),
            age: 30,
            category: Category::Female,
            weight: 55.0,
            hemoglobin: 11.5,
        }
    }

    #[test]
    fn test_valid_intake() {
        assert!(intake().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = Intake {
            name: "   ".to_string(),
            ..intake()
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(120).is_ok());
        assert!(matches!(validate_age(0), Err(ValidationError::Age { value: 0, .. })));
        assert!(validate_age(121).is_err());
    }

    #[test]
    fn test_weight_bounds() {
        assert!(validate_weight(10.0).is_ok());
        assert!(validate_weight(200.0).is_ok());
        assert!(validate_weight(9.9).is_err());
        assert!(validate_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_hemoglobin_bounds() {
        assert!(validate_hemoglobin(4.0).is_ok());
        assert!(validate_hemoglobin(18.0).is_ok());
        assert!(validate_hemoglobin(3.9).is_err());
        assert!(validate_hemoglobin(18.1).is_err());
    }

    #[test]
    fn test_first_violation_wins() {
        let form = Intake {
            age: 0,
            weight: 500.0,
            ..intake()
        };
        assert!(matches!(form.validate(), Err(ValidationError::Age { .. })));
    }

    #[test]
    fn test_diagnose_trims_name() {
        let form = Intake {
            name: "  Ravi ".to_string(),
            category: Category::Male,
            hemoglobin: 13.0,
            ..intake()
        };
        let (record, classification) = form.diagnose().unwrap();
        assert_eq!(record.name, "Ravi");
        assert_eq!(record.severity, Severity::Normal);
        assert!(!classification.is_unknown());
    }

    #[test]
    fn test_diagnose_rejects_invalid_form() {
        let form = Intake {
            hemoglobin: 30.0,
            ..intake()
        };
        assert!(form.diagnose().is_err());
    }

    #[test]
    fn test_parse_category_error_keeps_label() {
        assert_eq!(
            parse_category(" Elder "),
            Err(ValidationError::Category("Elder".to_string()))
        );
        assert_eq!(parse_category("child"), Ok(Category::Child));
    }
}
