//! Validation errors for form submissions

use thiserror::Error;

/// A form field violated its declared constraint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is empty or whitespace
    #[error("Name must not be empty")]
    EmptyName,

    /// Age outside 1..=120
    #[error("Age must be between {min} and {max} years, got {value}")]
    Age {
        /// Submitted age
        value: u32,
        /// Minimum accepted age
        min: u32,
        /// Maximum accepted age
        max: u32,
    },

    /// Weight outside 10.0..=200.0 or not a number
    #[error("Weight must be between {min} and {max} kg, got {value}")]
    Weight {
        /// Submitted weight
        value: f64,
        /// Minimum accepted weight
        min: f64,
        /// Maximum accepted weight
        max: f64,
    },

    /// Hemoglobin outside 4.0..=18.0 or not a number
    #[error("Hemoglobin must be between {min} and {max} g/dL, got {value}")]
    Hemoglobin {
        /// Submitted reading
        value: f64,
        /// Minimum accepted reading
        min: f64,
        /// Maximum accepted reading
        max: f64,
    },

    /// Category label not recognised
    #[error("Unknown category '{0}'. Expected Male, Female, Child or Pregnant Woman")]
    Category(String),
}
