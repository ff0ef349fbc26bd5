//! Severity classifier - range-table lookup from hemoglobin to anemia tier
//!
//! Each category owns an ordered list of inclusive `[lower, upper]` ranges.
//! A reading is truncated to the table's 0.1 g/dL resolution and matched
//! against the list; the first containing range wins. A reading that matches
//! nothing yields the `Unknown` sentinel instead of an error.

use crate::advice::{advice_for, Advice};
use crate::{Category, Severity};

/// Published range bounds have one decimal place (0.1 g/dL)
const STEPS_PER_UNIT: f64 = 10.0;

/// Slack absorbing binary representation error when truncating (e.g. 12.9 * 10)
const TRUNCATION_SLACK: f64 = 1e-9;

/// One row of a category's range table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityRange {
    /// Lower bound, inclusive (g/dL)
    pub lower: f64,
    /// Upper bound, inclusive (g/dL)
    pub upper: f64,
    /// Tier assigned to readings inside the range
    pub severity: Severity,
}

impl SeverityRange {
    const fn new(lower: f64, upper: f64, severity: Severity) -> Self {
        Self {
            lower,
            upper,
            severity,
        }
    }

    /// Check if the range contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

static MALE: [SeverityRange; 4] = [
    SeverityRange::new(13.0, f64::INFINITY, Severity::Normal),
    SeverityRange::new(11.0, 12.9, Severity::MildAnemia),
    SeverityRange::new(8.0, 10.9, Severity::ModerateAnemia),
    SeverityRange::new(0.0, 7.9, Severity::SevereAnemia),
];

static FEMALE: [SeverityRange; 4] = [
    SeverityRange::new(12.0, f64::INFINITY, Severity::Normal),
    SeverityRange::new(11.0, 11.9, Severity::MildAnemia),
    SeverityRange::new(8.0, 10.9, Severity::ModerateAnemia),
    SeverityRange::new(0.0, 7.9, Severity::SevereAnemia),
];

// Children and pregnant women share the same thresholds.
static CHILD: [SeverityRange; 4] = [
    SeverityRange::new(11.0, f64::INFINITY, Severity::Normal),
    SeverityRange::new(10.0, 10.9, Severity::MildAnemia),
    SeverityRange::new(7.0, 9.9, Severity::ModerateAnemia),
    SeverityRange::new(0.0, 6.9, Severity::SevereAnemia),
];

static PREGNANT_WOMAN: [SeverityRange; 4] = [
    SeverityRange::new(11.0, f64::INFINITY, Severity::Normal),
    SeverityRange::new(10.0, 10.9, Severity::MildAnemia),
    SeverityRange::new(7.0, 9.9, Severity::ModerateAnemia),
    SeverityRange::new(0.0, 6.9, Severity::SevereAnemia),
];

/// Get the ordered range table for a category
pub fn ranges_for(category: Category) -> &'static [SeverityRange] {
    match category {
        Category::Male => &MALE,
        Category::Female => &FEMALE,
        Category::Child => &CHILD,
        Category::PregnantWoman => &PREGNANT_WOMAN,
    }
}

/// Outcome of classifying one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Assigned tier (`Unknown` on a miss)
    pub severity: Severity,
    /// Preventive-care advice for the tier
    pub advice: &'static Advice,
}

impl Classification {
    fn for_severity(severity: Severity) -> Self {
        Self {
            severity,
            advice: advice_for(severity),
        }
    }

    /// The sentinel returned when nothing in the table matches
    pub fn unknown() -> Self {
        Self::for_severity(Severity::Unknown)
    }

    /// Whether this is the `Unknown` sentinel
    pub fn is_unknown(&self) -> bool {
        self.severity == Severity::Unknown
    }

    /// Advice as newline-separated text
    pub fn advice_text(&self) -> String {
        self.advice.text()
    }
}

/// Classify a hemoglobin reading (g/dL) for a category
///
/// Values outside the form's 4.0–18.0 input range are still classified
/// against the table. Non-finite or negative readings yield `Unknown`.
///
/// # Examples
///
/// ```
/// use anemia_domain::{classify, Category, Severity};
///
/// assert_eq!(classify(13.0, Category::Male).severity, Severity::Normal);
/// assert_eq!(classify(12.9, Category::Male).severity, Severity::MildAnemia);
/// assert_eq!(classify(f64::NAN, Category::Male).severity, Severity::Unknown);
/// ```
pub fn classify(hemoglobin: f64, category: Category) -> Classification {
    if !hemoglobin.is_finite() {
        return Classification::unknown();
    }

    let reading = truncate_to_resolution(hemoglobin);
    ranges_for(category)
        .iter()
        .find(|range| range.contains(reading))
        .map(|range| Classification::for_severity(range.severity))
        .unwrap_or_else(Classification::unknown)
}

/// Classify a reading for a category given by name
///
/// An unrecognised category name yields `Unknown` regardless of the reading.
pub fn classify_named(hemoglobin: f64, category: &str) -> Classification {
    match Category::parse(category) {
        Some(category) => classify(hemoglobin, category),
        None => Classification::unknown(),
    }
}

fn truncate_to_resolution(value: f64) -> f64 {
    (value * STEPS_PER_UNIT + TRUNCATION_SLACK).floor() / STEPS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_boundaries_are_inclusive() {
        assert_eq!(classify(13.0, Category::Male).severity, Severity::Normal);
        assert_eq!(classify(12.9, Category::Male).severity, Severity::MildAnemia);
        assert_eq!(classify(11.0, Category::Male).severity, Severity::MildAnemia);
        assert_eq!(classify(10.9, Category::Male).severity, Severity::ModerateAnemia);
        assert_eq!(classify(8.0, Category::Male).severity, Severity::ModerateAnemia);
        assert_eq!(classify(7.9, Category::Male).severity, Severity::SevereAnemia);

        assert_eq!(classify(12.0, Category::Female).severity, Severity::Normal);
        assert_eq!(classify(11.9, Category::Female).severity, Severity::MildAnemia);

        assert_eq!(classify(11.0, Category::Child).severity, Severity::Normal);
        assert_eq!(classify(10.0, Category::Child).severity, Severity::MildAnemia);
        assert_eq!(classify(9.9, Category::Child).severity, Severity::ModerateAnemia);
        assert_eq!(classify(6.9, Category::Child).severity, Severity::SevereAnemia);

        assert_eq!(classify(7.0, Category::PregnantWoman).severity, Severity::ModerateAnemia);
    }

    #[test]
    fn test_readings_between_published_bounds_take_the_lower_tier() {
        assert_eq!(classify(12.95, Category::Male).severity, Severity::MildAnemia);
        assert_eq!(classify(7.99, Category::Male).severity, Severity::SevereAnemia);
        assert_eq!(classify(10.95, Category::Child).severity, Severity::MildAnemia);
    }

    #[test]
    fn test_example_female_mild() {
        let result = classify(11.5, Category::Female);
        assert_eq!(result.severity, Severity::MildAnemia);
        assert!(result.advice_text().contains("iron-rich foods"));
    }

    #[test]
    fn test_unknown_category_name() {
        let result = classify_named(12.0, "Astronaut");
        assert!(result.is_unknown());
        assert_eq!(result.advice_text(), "Invalid Category or Hemoglobin Value.");
    }

    #[test]
    fn test_named_category_uses_table() {
        let result = classify_named(9.0, "Pregnant Woman");
        assert_eq!(result.severity, Severity::ModerateAnemia);
    }

    #[test]
    fn test_negative_and_non_finite_readings_are_unknown() {
        assert!(classify(-0.5, Category::Female).is_unknown());
        assert!(classify(f64::NAN, Category::Child).is_unknown());
        assert!(classify(f64::INFINITY, Category::Male).is_unknown());
    }

    #[test]
    fn test_values_outside_form_range_still_classified() {
        assert_eq!(classify(2.0, Category::Male).severity, Severity::SevereAnemia);
        assert_eq!(classify(25.0, Category::Female).severity, Severity::Normal);
    }

    #[test]
    fn test_tables_are_ordered_by_descending_lower_bound() {
        for category in Category::ALL {
            let ranges = ranges_for(category);
            assert_eq!(ranges.len(), 4);
            for pair in ranges.windows(2) {
                assert!(pair[0].lower > pair[1].upper, "{category}: overlapping ranges");
            }
        }
    }
}
