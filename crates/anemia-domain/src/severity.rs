//! Severity module - anemia tiers produced by the classifier

use std::fmt;

/// Anemia severity tier
///
/// Tiers are ordered from least to most severe; `Unknown` sorts last and is
/// only produced when a reading cannot be matched against the range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Hemoglobin at or above the category's normal threshold
    Normal,

    /// Mild anemia
    MildAnemia,

    /// Moderate anemia
    ModerateAnemia,

    /// Severe anemia
    SevereAnemia,

    /// Classification miss (unknown category or value outside every range)
    Unknown,
}

impl Severity {
    /// Every severity, in tier order
    pub const ALL: [Severity; 5] = [
        Severity::Normal,
        Severity::MildAnemia,
        Severity::ModerateAnemia,
        Severity::SevereAnemia,
        Severity::Unknown,
    ];

    /// Get the display label, which is also the stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::MildAnemia => "Mild Anemia",
            Severity::ModerateAnemia => "Moderate Anemia",
            Severity::SevereAnemia => "Severe Anemia",
            Severity::Unknown => "Unknown",
        }
    }

    /// Parse a severity from its stored label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Severity::Normal),
            "mild anemia" => Some(Severity::MildAnemia),
            "moderate anemia" => Some(Severity::ModerateAnemia),
            "severe anemia" => Some(Severity::SevereAnemia),
            "unknown" => Some(Severity::Unknown),
            _ => None,
        }
    }

    /// Whether this tier indicates anemia of any degree
    pub fn is_anemic(&self) -> bool {
        matches!(
            self,
            Severity::MildAnemia | Severity::ModerateAnemia | Severity::SevereAnemia
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}
