//! The application's screens.

use std::fmt;

/// One of the four screens, selected explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Welcome screen
    Home,
    /// Diagnosis form and result
    Diagnosis,
    /// Table of stored records
    PatientData,
    /// Severity distribution chart
    Visualization,
}

impl View {
    /// Every view, in navigation order
    pub const ALL: [View; 4] = [
        View::Home,
        View::Diagnosis,
        View::PatientData,
        View::Visualization,
    ];

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Diagnosis => "Diagnosis",
            View::PatientData => "Patient Data",
            View::Visualization => "Visualization",
        }
    }

    /// Command word that opens the view
    pub fn command(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Diagnosis => "diagnose",
            View::PatientData => "records",
            View::Visualization => "chart",
        }
    }

    /// One-line description for menus
    pub fn description(&self) -> &'static str {
        match self {
            View::Home => "Welcome screen and feature overview",
            View::Diagnosis => "Enter a hemoglobin reading and get a diagnosis",
            View::PatientData => "Show stored diagnosis records",
            View::Visualization => "Chart the anemia severity distribution",
        }
    }

    /// Resolve a view from its command word, title or a short alias
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" | "h" => Some(View::Home),
            "diagnose" | "diagnosis" | "d" => Some(View::Diagnosis),
            "records" | "patient data" | "data" | "r" => Some(View::PatientData),
            "chart" | "visualization" | "viz" | "c" => Some(View::Visualization),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
