//! Parameter and testing-kit catalog entries.

use serde::{Deserialize, Serialize};

/// One measurable water-quality parameter.
///
/// `critical_range` is a textual threshold specification understood by the
/// engine's range evaluator, e.g. `"<6.5 or >8.5"`, `">5 NTU"`,
/// `"Presence in 100 mL"`. `confidence` is the a-priori reliability of this
/// parameter as a contamination indicator, fixed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Threshold specification for the critical band.
    pub critical_range: String,

    /// What contamination an out-of-range reading points to.
    #[serde(default)]
    pub pathogen_risk: String,

    /// Diseases associated with this contamination, in reporting order.
    #[serde(default)]
    pub diseases: Vec<String>,

    /// A-priori reliability as a contamination indicator, 0.0–1.0.
    pub confidence: f64,
}

/// A catalog testing kit: an ordered set of parameters measured together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestingKit {
    pub name: String,

    /// Human description of what the kit's readings look like.
    #[serde(default)]
    pub result_type: String,

    pub parameters: Vec<Parameter>,
}

impl TestingKit {
    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
