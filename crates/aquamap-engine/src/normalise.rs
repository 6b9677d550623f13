//! Kit-result normalisation onto the shared 0–100 risk scale.

use tracing::warn;

use aquamap_common::RiskTier;

use crate::aggregate::KitTestResult;

/// Baseline percentage for a kit-level tier.
///
/// `None` covers tier labels read back from external storage that no longer
/// parse (see [`RiskTier::from_label`]); the 30 default keeps a malformed
/// record on the map instead of failing it.
pub fn tier_baseline(tier: Option<RiskTier>) -> f64 {
    match tier {
        Some(RiskTier::High) => 75.0,
        Some(RiskTier::Medium) => 45.0,
        Some(RiskTier::Low) => 15.0,
        None => {
            warn!("unrecognised risk tier on stored kit result; using defensive baseline");
            30.0
        }
    }
}

/// Fold a completed kit test onto the same 0–100 scale used for community
/// reports.
///
/// The tier baseline is scaled up by the fraction of critical parameters
/// (up to +50%) and by measurement uncertainty (up to +20% at confidence 0;
/// low confidence adds risk, it never subtracts). A result with no readings
/// is "no data" and scores 0 — not to be confused with a confirmed-clean 0.
pub fn normalise_kit_risk(result: &KitTestResult) -> u8 {
    if result.results.is_empty() {
        return 0;
    }

    let baseline = tier_baseline(Some(result.overall_risk));

    let critical_count = result
        .results
        .iter()
        .filter(|r| r.in_critical_range)
        .count();
    let critical_ratio = critical_count as f64 / result.results.len() as f64;
    let critical_multiplier = 1.0 + critical_ratio * 0.5;

    let confidence_adjustment = 1.0 + (1.0 - result.confidence) * 0.2;

    let score = (baseline * critical_multiplier * confidence_adjustment).round();
    score.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TestResult;
    use aquamap_catalog::Parameter;
    use aquamap_common::SampleValue;

    fn result_with(tiers: &[(bool, RiskTier)], overall: RiskTier, confidence: f64) -> KitTestResult {
        let results = tiers
            .iter()
            .map(|&(in_critical, tier)| TestResult {
                parameter: Parameter {
                    name: "p".to_string(),
                    critical_range: String::new(),
                    pathogen_risk: String::new(),
                    diseases: vec![],
                    confidence,
                },
                value: SampleValue::Number(0.0),
                in_critical_range: in_critical,
                risk_level: tier,
            })
            .collect();
        KitTestResult {
            kit_name: "kit".to_string(),
            results,
            overall_risk: overall,
            confidence,
        }
    }

    #[test]
    fn test_tier_baselines() {
        assert_eq!(tier_baseline(Some(RiskTier::High)), 75.0);
        assert_eq!(tier_baseline(Some(RiskTier::Medium)), 45.0);
        assert_eq!(tier_baseline(Some(RiskTier::Low)), 15.0);
        assert_eq!(tier_baseline(None), 30.0);
    }

    #[test]
    fn test_no_data_scores_zero() {
        let empty = KitTestResult {
            kit_name: "kit".to_string(),
            results: vec![],
            overall_risk: RiskTier::Low,
            confidence: 0.0,
        };
        assert_eq!(normalise_kit_risk(&empty), 0);
    }

    #[test]
    fn test_reference_scenario() {
        // Medium tier, half critical, confidence 0.775:
        // round(45 × 1.25 × 1.045) = 59
        let r = result_with(
            &[(true, RiskTier::Medium), (false, RiskTier::Low)],
            RiskTier::Medium,
            0.775,
        );
        assert_eq!(normalise_kit_risk(&r), 59);
    }

    #[test]
    fn test_monotone_in_critical_ratio() {
        let none = result_with(
            &[(false, RiskTier::Medium), (false, RiskTier::Medium)],
            RiskTier::Medium,
            0.7,
        );
        let half = result_with(
            &[(true, RiskTier::Medium), (false, RiskTier::Medium)],
            RiskTier::Medium,
            0.7,
        );
        let all = result_with(
            &[(true, RiskTier::Medium), (true, RiskTier::Medium)],
            RiskTier::Medium,
            0.7,
        );
        let scores = [
            normalise_kit_risk(&none),
            normalise_kit_risk(&half),
            normalise_kit_risk(&all),
        ];
        assert!(scores[0] <= scores[1] && scores[1] <= scores[2]);
    }

    #[test]
    fn test_lower_confidence_never_lowers_risk() {
        let confident = result_with(&[(true, RiskTier::High)], RiskTier::High, 1.0);
        let uncertain = result_with(&[(true, RiskTier::High)], RiskTier::High, 0.0);
        assert!(normalise_kit_risk(&uncertain) >= normalise_kit_risk(&confident));
    }

    #[test]
    fn test_clamped_to_100() {
        // 75 × 1.5 × 1.2 = 135 → clamped
        let r = result_with(&[(true, RiskTier::High)], RiskTier::High, 0.0);
        assert_eq!(normalise_kit_risk(&r), 100);
    }

    #[test]
    fn test_all_clear_kit() {
        // 15 × 1.0 × 1.045 = 15.675 → 16
        let r = result_with(
            &[(false, RiskTier::Low), (false, RiskTier::Low)],
            RiskTier::Low,
            0.775,
        );
        assert_eq!(normalise_kit_risk(&r), 16);
    }
}
