use serde::{Deserialize, Serialize};

/// Qualitative band a certainty factor falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    NotSure,
    Possible,
    Likely,
    AlmostCertain,
    Certain,
}

impl Interpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::NotSure => "not sure",
            Interpretation::Possible => "possible",
            Interpretation::Likely => "likely",
            Interpretation::AlmostCertain => "almost certain",
            Interpretation::Certain => "certain",
        }
    }
}

/// Map a certainty factor onto its band, first matching upper bound wins.
#[allow(clippy::if_same_then_else)]
pub fn interpret(cf: f64) -> Interpretation {
    if cf < 0.2 {
        Interpretation::NotSure
    } else if cf < 0.4 {
        Interpretation::Possible
    } else if cf < 0.6 {
        Interpretation::Likely
    } else if cf < 0.8 {
        Interpretation::AlmostCertain
    } else if cf <= 0.95 {
        Interpretation::Certain
    } else {
        // No separate band above 0.95.
        Interpretation::Certain
    }
}
