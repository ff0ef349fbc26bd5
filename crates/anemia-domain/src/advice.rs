//! Preventive-care advice attached to each severity tier

use crate::Severity;
use std::fmt;

/// Treatment tradition a remedy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tradition {
    /// Conventional medicine
    Allopathy,
    /// Ayurvedic medicine
    Ayurveda,
    /// Naturopathy
    Naturopathy,
    /// Homeopathy
    Homeopathy,
}

impl Tradition {
    /// Get the tradition name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tradition::Allopathy => "Allopathy",
            Tradition::Ayurveda => "Ayurveda",
            Tradition::Naturopathy => "Naturopathy",
            Tradition::Homeopathy => "Homeopathy",
        }
    }
}

/// A suggested remedy within one tradition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remedy {
    /// Tradition the remedy comes from
    pub tradition: Tradition,
    /// Remedy description
    pub text: &'static str,
}

/// Fixed block of preventive-care text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// General guidance, most important first
    pub guidance: &'static [&'static str],
    /// Remedies by tradition
    pub remedies: &'static [Remedy],
}

impl Advice {
    /// Iterate the advice as display lines: guidance first, then one line per remedy
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.guidance.iter().map(|line| line.to_string()).chain(
            self.remedies
                .iter()
                .map(|r| format!("{}: {}", r.tradition.as_str(), r.text)),
        )
    }

    /// Render the whole block as newline-separated text
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Text returned alongside an `Unknown` classification
pub const INVALID_INPUT_ADVICE: &str = "Invalid Category or Hemoglobin Value.";

static NORMAL: Advice = Advice {
    guidance: &[
        "Maintain a balanced diet rich in iron, vitamin B12, and folic acid.",
        "Stay hydrated and get regular checkups.",
        "Exercise to improve circulation and oxygen transport.",
    ],
    remedies: &[
        Remedy {
            tradition: Tradition::Allopathy,
            text: "Not required, but Ferrous Sulfate (325mg) can be taken if needed.",
        },
        Remedy {
            tradition: Tradition::Ayurveda,
            text: "Chyawanprash daily and Triphala churna for better iron absorption.",
        },
        Remedy {
            tradition: Tradition::Naturopathy,
            text: "Beetroot & carrot juice, morning sun exposure for Vitamin D.",
        },
        Remedy {
            tradition: Tradition::Homeopathy,
            text: "Ferrum Phosphoricum 6X, a mild iron supplement.",
        },
    ],
};

static MILD: Advice = Advice {
    guidance: &[
        "Increase intake of iron-rich foods (spinach, lentils, red meat).",
        "Take vitamin C-rich foods (oranges, lemons, amla) to enhance iron absorption.",
        "Avoid tea/coffee immediately after meals, as they reduce iron absorption.",
    ],
    remedies: &[
        Remedy {
            tradition: Tradition::Allopathy,
            text: "Ferrous Sulfate tablets, Vitamin C supplements for better absorption.",
        },
        Remedy {
            tradition: Tradition::Ayurveda,
            text: "Ashwagandha, Guduchi, and dates with jaggery.",
        },
        Remedy {
            tradition: Tradition::Naturopathy,
            text: "Pomegranate or wheatgrass juice, deep breathing exercises.",
        },
        Remedy {
            tradition: Tradition::Homeopathy,
            text: "Natrum Muriaticum 30C (useful for chronic anemia).",
        },
    ],
};

static MODERATE: Advice = Advice {
    guidance: &[
        "Consult a doctor for further evaluation.",
        "Include iron, vitamin B12, and folate supplements if recommended.",
        "Monitor your blood tests and avoid excessive alcohol consumption.",
    ],
    remedies: &[
        Remedy {
            tradition: Tradition::Allopathy,
            text: "Ferrous Fumarate, Folic Acid, Vitamin B12 injections (Cyanocobalamin).",
        },
        Remedy {
            tradition: Tradition::Ayurveda,
            text: "Punarnava Mandur tablets, Pomegranate juice daily.",
        },
        Remedy {
            tradition: Tradition::Naturopathy,
            text: "Green smoothies (spinach, kale, moringa), nettle leaf tea.",
        },
        Remedy {
            tradition: Tradition::Homeopathy,
            text: "China Officinalis 30C (for anemia due to blood loss).",
        },
    ],
};

static SEVERE: Advice = Advice {
    guidance: &[
        "Seek immediate medical attention.",
        "You may need specialized treatment like transfusions or medications.",
        "Maintain a high-protein, iron-rich diet with doctor supervision.",
    ],
    remedies: &[
        Remedy {
            tradition: Tradition::Allopathy,
            text: "Iron Sucrose IV infusion, Erythropoietin injections.",
        },
        Remedy {
            tradition: Tradition::Ayurveda,
            text: "Draksharishta (grape-based iron tonic), Mandoor Bhasma.",
        },
        Remedy {
            tradition: Tradition::Naturopathy,
            text: "Fresh Aloe Vera juice, Beetroot juice therapy.",
        },
        Remedy {
            tradition: Tradition::Homeopathy,
            text: "Ferrum Metallicum 30C (for severe weakness and pallor).",
        },
    ],
};

static INVALID: Advice = Advice {
    guidance: &[INVALID_INPUT_ADVICE],
    remedies: &[],
};

/// Look up the advice block for a severity tier
pub fn advice_for(severity: Severity) -> &'static Advice {
    match severity {
        Severity::Normal => &NORMAL,
        Severity::MildAnemia => &MILD,
        Severity::ModerateAnemia => &MODERATE,
        Severity::SevereAnemia => &SEVERE,
        Severity::Unknown => &INVALID,
    }
}
