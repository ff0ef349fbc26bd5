//! Severity tally - per-tier counts over the ledger

use crate::ReportError;
use anemia_domain::{DiagnosisRecord, Severity};
use std::collections::BTreeMap;
use tracing::debug;

/// Count of records per severity tier
///
/// Derived on demand from the full ledger and never persisted. Tiers with no
/// records are absent rather than stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityTally {
    counts: BTreeMap<Severity, usize>,
}

impl SeverityTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more record for `severity`
    pub fn add(&mut self, severity: Severity) {
        *self.counts.entry(severity).or_insert(0) += 1;
    }

    /// Number of records with `severity`
    pub fn count(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Total number of records counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct tiers present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Non-zero counts, least severe tier first
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        self.counts.iter().map(|(severity, count)| (*severity, *count))
    }

    /// Share of the total for `severity`, in percent
    pub fn percentage(&self, severity: Severity) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(severity) as f64 * 100.0 / total as f64
    }
}

impl FromIterator<Severity> for SeverityTally {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut tally = Self::new();
        for severity in iter {
            tally.add(severity);
        }
        tally
    }
}

/// Count severities across `records`
///
/// Returns [`ReportError::Empty`] when there is nothing to count.
pub fn summarize(records: &[DiagnosisRecord]) -> Result<SeverityTally, ReportError> {
    if records.is_empty() {
        return Err(ReportError::Empty);
    }

    let tally: SeverityTally = records.iter().map(|r| r.severity).collect();
    debug!(records = records.len(), tiers = tally.len(), "Summarized ledger");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anemia_domain::Category;

    fn record(severity: Severity) -> DiagnosisRecord {
        DiagnosisRecord {
            name: "p".to_string(),
            age: 20,
            weight: 60.0,
            category: Category::Female,
            hemoglobin: 12.0,
            severity,
        }
    }

    #[test]
    fn test_counts_each_tier() {
        let records = vec![
            record(Severity::Normal),
            record(Severity::MildAnemia),
            record(Severity::Normal),
            record(Severity::SevereAnemia),
        ];
        let tally = summarize(&records).unwrap();
        assert_eq!(tally.count(Severity::Normal), 2);
        assert_eq!(tally.count(Severity::MildAnemia), 1);
        assert_eq!(tally.count(Severity::SevereAnemia), 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_zero_counts_are_omitted() {
        let tally = summarize(&[record(Severity::ModerateAnemia)]).unwrap();
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.count(Severity::Normal), 0);
        let tiers: Vec<Severity> = tally.iter().map(|(s, _)| s).collect();
        assert_eq!(tiers, [Severity::ModerateAnemia]);
    }

    #[test]
    fn test_empty_records_signal_nothing_to_display() {
        assert!(matches!(summarize(&[]), Err(ReportError::Empty)));
    }

    #[test]
    fn test_iteration_is_in_tier_order() {
        let tally: SeverityTally = [
            Severity::SevereAnemia,
            Severity::Unknown,
            Severity::Normal,
        ]
        .into_iter()
        .collect();
        let tiers: Vec<Severity> = tally.iter().map(|(s, _)| s).collect();
        assert_eq!(tiers, [Severity::Normal, Severity::SevereAnemia, Severity::Unknown]);
    }

    #[test]
    fn test_percentage() {
        let tally: SeverityTally = [Severity::Normal, Severity::Normal, Severity::MildAnemia, Severity::MildAnemia]
            .into_iter()
            .collect();
        assert_eq!(tally.percentage(Severity::Normal), 50.0);
        assert_eq!(SeverityTally::new().percentage(Severity::Normal), 0.0);
    }
}
