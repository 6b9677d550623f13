//! End-to-end kit scoring against the built-in catalog.

use aquamap_catalog::Catalog;
use aquamap_common::{categorise, ParameterValue, RiskCategory, RiskTier};
use aquamap_engine::{aggregate_kit_result, normalise_kit_risk};

/// The reference scenario: a critical-but-moderate-confidence pH reading
/// alongside a clean high-confidence chlorine reading.
#[test]
fn test_ph_and_chlorine_scenario() {
    let catalog = Catalog::builtin();
    let kit = catalog.kit("Basic Field Kit").unwrap();

    let values = vec![
        ParameterValue::new("pH", 9.0),            // critical, confidence 0.65
        ParameterValue::new("Free Chlorine", 0.5), // fine, confidence 0.90
    ];

    let result = aggregate_kit_result(kit, &values);

    assert_eq!(result.results.len(), 2);
    assert_eq!(result.overall_risk, RiskTier::Medium);
    assert!((result.confidence - 0.775).abs() < 1e-9);

    let ph = &result.results[0];
    assert!(ph.in_critical_range);
    assert_eq!(ph.risk_level, RiskTier::Medium);

    let chlorine = &result.results[1];
    assert!(!chlorine.in_critical_range);
    assert_eq!(chlorine.risk_level, RiskTier::Low);

    // round(45 × 1.25 × 1.045) = 59 → Medium Risk
    let percentage = normalise_kit_risk(&result);
    assert_eq!(percentage, 59);
    assert_eq!(categorise(percentage as i32), RiskCategory::Medium);
}

#[test]
fn test_contaminated_sample_reads_high() {
    let catalog = Catalog::builtin();
    let kit = catalog.kit("Basic Field Kit").unwrap();

    let values = vec![
        ParameterValue::new("pH", 5.9),
        ParameterValue::new("Turbidity", 14.0),
        ParameterValue::new("Free Chlorine", 0.05),
        ParameterValue::new("E. coli", "present"),
    ];

    let result = aggregate_kit_result(kit, &values);
    assert_eq!(result.overall_risk, RiskTier::High);
    assert!(result.results.iter().all(|r| r.in_critical_range));

    let percentage = normalise_kit_risk(&result);
    assert_eq!(categorise(percentage as i32), RiskCategory::High);
    assert!(percentage <= 100);
}

#[test]
fn test_clean_sample_reads_low() {
    let catalog = Catalog::builtin();
    let kit = catalog.kit("Basic Field Kit").unwrap();

    let values = vec![
        ParameterValue::new("pH", 7.1),
        ParameterValue::new("Turbidity", 0.8),
        ParameterValue::new("Free Chlorine", 0.4),
        ParameterValue::new("E. coli", "absent"),
    ];

    let result = aggregate_kit_result(kit, &values);
    assert_eq!(result.overall_risk, RiskTier::Low);

    let percentage = normalise_kit_risk(&result);
    assert_eq!(categorise(percentage as i32), RiskCategory::Low);
}

/// Same inputs, same outputs: the engine holds no state between calls.
#[test]
fn test_scoring_is_repeatable() {
    let catalog = Catalog::builtin();
    let kit = catalog.kit("Advanced Field Kit").unwrap();

    let values = vec![
        ParameterValue::new("Nitrates", 60.0),
        ParameterValue::new("Lead", 0.002),
        ParameterValue::new("Total Coliform", "negative"),
    ];

    let first = aggregate_kit_result(kit, &values);
    let second = aggregate_kit_result(kit, &values);
    assert_eq!(first, second);
    assert_eq!(normalise_kit_risk(&first), normalise_kit_risk(&second));
}
