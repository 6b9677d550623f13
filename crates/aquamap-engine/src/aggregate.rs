//! Kit-level aggregation of per-parameter classifications.

use serde::{Deserialize, Serialize};

use aquamap_catalog::{Parameter, TestingKit};
use aquamap_common::{ParameterValue, RiskTier, SampleValue};

use crate::classify::tier_for;
use crate::range::evaluate_critical_range;

/// Classification of one submitted reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub parameter: Parameter,
    pub value: SampleValue,
    pub in_critical_range: bool,
    pub risk_level: RiskTier,
}

/// One completed kit test: every classified reading plus the kit-level
/// tier and averaged confidence. Consumed by the risk normaliser and by
/// the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitTestResult {
    pub kit_name: String,
    pub results: Vec<TestResult>,
    pub overall_risk: RiskTier,
    pub confidence: f64,
}

/// Classify every submitted reading of a kit and derive the kit-level tier
/// and confidence.
///
/// Catalog parameters without a submitted value are skipped, not an error.
/// The overall tier is the worst observed: one critical high-confidence
/// parameter dominates the kit no matter how many others read fine.
/// Confidence is the mean catalog confidence of the parameters that
/// actually produced a result (0.0 when none did).
pub fn aggregate_kit_result(kit: &TestingKit, values: &[ParameterValue]) -> KitTestResult {
    let mut results = Vec::new();

    for parameter in &kit.parameters {
        let Some(submitted) = values.iter().find(|v| v.parameter == parameter.name) else {
            continue;
        };
        let in_critical = evaluate_critical_range(&parameter.critical_range, &submitted.value);
        results.push(TestResult {
            parameter: parameter.clone(),
            value: submitted.value.clone(),
            in_critical_range: in_critical,
            risk_level: tier_for(in_critical, parameter.confidence),
        });
    }

    let overall_risk = results
        .iter()
        .map(|r| r.risk_level)
        .max()
        .unwrap_or(RiskTier::Low);

    let confidence = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.parameter.confidence).sum::<f64>() / results.len() as f64
    };

    KitTestResult {
        kit_name: kit.name.clone(),
        results,
        overall_risk,
        confidence,
    }
}
