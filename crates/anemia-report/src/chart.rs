//! Chart artifact - backend-independent pie layout of a tally

use crate::{ReportError, SeverityTally};
use anemia_domain::Severity;
use std::fmt;
use tracing::debug;

/// Caption drawn above the pie
pub const CHART_TITLE: &str = "Anemia Distribution";

/// Angle of the first slice's leading edge, in degrees (12 o'clock)
pub const START_ANGLE: f64 = 90.0;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fixed slice color for a tier
pub fn color_for(severity: Severity) -> Rgb {
    match severity {
        Severity::Normal => Rgb(0xff, 0x99, 0x99),
        Severity::MildAnemia => Rgb(0x66, 0xb3, 0xff),
        Severity::ModerateAnemia => Rgb(0x99, 0xff, 0x99),
        Severity::SevereAnemia => Rgb(0xff, 0xcc, 0x99),
        Severity::Unknown => Rgb(0xc0, 0xc0, 0xc0),
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Tier the slice represents
    pub severity: Severity,
    /// Records in the tier
    pub count: usize,
    /// Share of the total, in percent
    pub percentage: f64,
    /// Leading edge, degrees counter-clockwise from 3 o'clock
    pub start_angle: f64,
    /// Angular width in degrees
    pub sweep: f64,
    /// Fill color
    pub color: Rgb,
}

impl Slice {
    /// Percentage label, e.g. `"66.7%"`
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// A laid-out pie chart, ready for a drawing backend
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    /// Caption
    pub title: String,
    /// Records represented
    pub total: usize,
    /// Slices, least severe tier first
    pub slices: Vec<Slice>,
}

/// Lay out a pie chart with one slice per non-zero tier
///
/// Returns [`ReportError::Empty`] for an empty tally instead of a degenerate chart.
pub fn render(tally: &SeverityTally) -> Result<ChartArtifact, ReportError> {
    let total = tally.total();
    if total == 0 {
        return Err(ReportError::Empty);
    }

    let mut angle = START_ANGLE;
    let slices: Vec<Slice> = tally
        .iter()
        .map(|(severity, count)| {
            let fraction = count as f64 / total as f64;
            let slice = Slice {
                severity,
                count,
                percentage: fraction * 100.0,
                start_angle: angle,
                sweep: fraction * 360.0,
                color: color_for(severity),
            };
            angle += slice.sweep;
            slice
        })
        .collect();

    debug!(total, slices = slices.len(), "Laid out distribution chart");
    Ok(ChartArtifact {
        title: CHART_TITLE.to_string(),
        total,
        slices,
    })
}
