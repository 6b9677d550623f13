//! Outbreak scoring for community symptom reports.

use tracing::warn;

use aquamap_catalog::SymptomTable;

/// Base risk by affected-person count, inclusive upper bounds.
///
/// The table deliberately tops out at 83 rather than 100: a large count in
/// a dense population is not on its own a confirmed severe outbreak, and
/// the remaining headroom has to come from reported symptoms.
const BASE_RISK_BRACKETS: [(u32, f64); 6] = [
    (1, 10.0),
    (5, 25.0),
    (15, 40.0),
    (30, 55.0),
    (50, 65.0),
    (100, 75.0),
];

const BASE_RISK_CEILING: f64 = 83.0;

fn base_risk(affected_count: u32) -> f64 {
    BASE_RISK_BRACKETS
        .iter()
        .find(|(upper, _)| affected_count <= *upper)
        .map(|(_, risk)| *risk)
        .unwrap_or(BASE_RISK_CEILING)
}

/// Score a community report: affected-count base risk scaled by reported
/// symptom severity, clamped to 100.
///
/// Each recognised symptom adds half its nominal severity bump to a single
/// multiplier — bumps are additive across symptoms, applied once, not
/// compounded per symptom. Symptoms outside the severity table contribute
/// nothing and never fail the call.
pub fn score_outbreak(affected_count: u32, symptoms: &[String], table: &SymptomTable) -> u8 {
    let mut multiplier = 1.0;
    for symptom in symptoms {
        match table.severity(symptom) {
            Some(severity) => multiplier += (severity - 1.0) * 0.5,
            None => warn!("unrecognised symptom '{symptom}' in report; ignoring"),
        }
    }

    let score = (base_risk(affected_count) * multiplier).round();
    score.min(100.0) as u8
}
