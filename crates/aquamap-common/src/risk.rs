//! Risk tiers, categories, and the unified outcome type.
//!
//! Every observation kind — community report, kit test, annotation — reduces
//! to a [`RiskOutcome`] so the map collaborator can plot and rank them on one
//! scale.

use serde::{Deserialize, Serialize};

/// Categorical risk of a single classified parameter or a whole kit result.
///
/// Ordered so that "worst observed wins" aggregation is `Iterator::max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Parse a tier label as it appears in externally stored records.
    /// Returns `None` for anything unrecognisable; callers fall back to a
    /// defensive baseline instead of failing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display band of a 0–100 risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a risk percentage to its display band.
///
/// Total over all of `i32`: scores are clamped to [0, 100] upstream, but an
/// out-of-range input still resolves to the nearest band rather than failing.
pub fn categorise(percentage: i32) -> RiskCategory {
    if percentage >= 70 {
        RiskCategory::High
    } else if percentage >= 40 {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

/// The engine's universal output: a clamped percentage plus its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskOutcome {
    /// Always in [0, 100].
    pub percentage: u8,
    /// Pure function of `percentage`; no hidden state.
    pub category: RiskCategory,
}

impl RiskOutcome {
    pub fn from_percentage(percentage: u8) -> Self {
        let percentage = percentage.min(100);
        Self {
            percentage,
            category: categorise(percentage as i32),
        }
    }
}
