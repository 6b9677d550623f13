//! Per-parameter risk classification.

use aquamap_catalog::Parameter;
use aquamap_common::{RiskTier, SampleValue};

use crate::range::evaluate_critical_range;

/// Confidence at or above which a critical reading is flagged `High`.
const HIGH_CONFIDENCE: f64 = 0.8;

/// Tier for a reading given its critical verdict and the parameter's
/// catalog confidence.
///
/// A reading outside the critical band is `Low` regardless of confidence.
/// Inside the band, only a high-confidence parameter escalates to `High`;
/// everything else is `Medium` — a low-confidence critical reading still
/// merits attention and is never dismissed to `Low`.
pub fn tier_for(in_critical_range: bool, confidence: f64) -> RiskTier {
    if !in_critical_range {
        return RiskTier::Low;
    }
    if confidence >= HIGH_CONFIDENCE {
        RiskTier::High
    } else {
        RiskTier::Medium
    }
}

/// Classify one submitted reading against its catalog parameter.
pub fn classify_parameter(parameter: &Parameter, value: &SampleValue) -> RiskTier {
    let in_critical = evaluate_critical_range(&parameter.critical_range, value);
    tier_for(in_critical, parameter.confidence)
}
