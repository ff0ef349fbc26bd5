//! Category module - demographic groups with distinct hemoglobin thresholds

use std::fmt;

/// Demographic category a hemoglobin reading is judged against
///
/// Each category has its own range table because normal hemoglobin levels
/// differ between adult men, adult women, children and pregnant women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Adult male
    Male,

    /// Adult non-pregnant female
    Female,

    /// Child
    Child,

    /// Pregnant woman
    PregnantWoman,
}

impl Category {
    /// Every category, in form order
    pub const ALL: [Category; 4] = [
        Category::Male,
        Category::Female,
        Category::Child,
        Category::PregnantWoman,
    ];

    /// Get the display label, which is also the stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "Male",
            Category::Female => "Female",
            Category::Child => "Child",
            Category::PregnantWoman => "Pregnant Woman",
        }
    }

    /// Parse a category from its label
    ///
    /// Matching is case-insensitive and accepts `-` or `_` in place of the space.
    ///
    /// # Examples
    ///
    /// ```
    /// use anemia_domain::Category;
    ///
    /// assert_eq!(Category::parse("Pregnant Woman"), Some(Category::PregnantWoman));
    /// assert_eq!(Category::parse("pregnant-woman"), Some(Category::PregnantWoman));
    /// assert_eq!(Category::parse("elder"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "male" => Some(Category::Male),
            "female" => Some(Category::Female),
            "child" => Some(Category::Child),
            "pregnant woman" => Some(Category::PregnantWoman),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(Category::parse("MALE"), Some(Category::Male));
        assert_eq!(Category::parse("  female "), Some(Category::Female));
        assert_eq!(Category::parse("pregnant_woman"), Some(Category::PregnantWoman));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Category::parse("").is_none());
        assert!(Category::parse("pregnant").is_none());
        assert!("Adult".parse::<Category>().is_err());
    }
}
