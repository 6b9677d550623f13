//! Submitted observation values.
//!
//! A test-kit reading is either a number or a presence/absence token; both
//! arrive through the same field, so [`SampleValue`] is an untagged union.

use serde::{Deserialize, Serialize};

/// Raw value of one submitted reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(f64),
    Text(String),
}

impl SampleValue {
    /// Numeric view of the value. Non-numeric text parses to `None` rather
    /// than raising; the evaluator treats that as "not critical".
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Textual view of the value, lowercased, for presence/absence tests.
    pub fn text_form(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_lowercase(),
        }
    }
}

impl From<f64> for SampleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for SampleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One submitted reading, keyed to a catalog parameter by name.
/// Created at submission time, consumed once by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub parameter: String,
    pub value: SampleValue,
}

impl ParameterValue {
    pub fn new(parameter: impl Into<String>, value: impl Into<SampleValue>) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
        }
    }
}

/// A community symptom report: how many people are affected and which
/// symptoms were observed. Consumed once by the outbreak scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub affected_count: u32,
    #[serde(default)]
    pub symptoms: Vec<String>,
}
