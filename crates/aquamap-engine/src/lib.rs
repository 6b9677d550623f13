//! aquamap-engine — Risk-assessment engine for field water-quality
//! observations.
//!
//! Pure, synchronous, re-entrant: every function here depends only on its
//! arguments and the read-only catalogs passed in. Fallbacks, not failures:
//! malformed expressions, unparseable values, unknown symptoms, and missing
//! data all resolve to defined safe defaults, so callers can treat every
//! returned risk value as well-formed.

pub mod aggregate;
pub mod classify;
pub mod normalise;
pub mod outbreak;
pub mod range;

use serde::{Deserialize, Serialize};
use tracing::warn;

use aquamap_catalog::{Catalog, SymptomTable};
use aquamap_common::{ParameterValue, Report, RiskOutcome};

pub use aggregate::{aggregate_kit_result, KitTestResult, TestResult};
pub use classify::classify_parameter;
pub use normalise::normalise_kit_risk;
pub use outbreak::score_outbreak;
pub use range::{evaluate_critical_range, parse_range_expression, RangeExpr};

// categorise lives with the tier types; re-exported here as part of the
// engine's public surface.
pub use aquamap_common::categorise;

/// Nominal percentage for a free-form annotation: a data point on the map,
/// not a measured signal.
pub const ANNOTATION_RISK: u8 = 25;

/// Any field observation the engine can reduce to a [`RiskOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Observation {
    /// Community symptom report.
    Report(Report),
    /// A completed test-kit submission, keyed to a catalog kit by name.
    KitTest {
        kit: String,
        values: Vec<ParameterValue>,
    },
    /// Free-form user annotation.
    Annotation { text: String },
}

/// Reduce any observation to the unified `{percentage, category}` outcome.
///
/// This is the single front door the storage/rendering collaborators call.
/// An observation naming an unknown kit scores 0 (no data) rather than
/// failing.
pub fn score_observation(
    catalog: &Catalog,
    symptoms: &SymptomTable,
    observation: &Observation,
) -> RiskOutcome {
    let percentage = match observation {
        Observation::Report(report) => {
            score_outbreak(report.affected_count, &report.symptoms, symptoms)
        }
        Observation::KitTest { kit, values } => match catalog.kit(kit) {
            Some(kit) => normalise_kit_risk(&aggregate_kit_result(kit, values)),
            None => {
                warn!("observation references unknown testing kit '{kit}'; scoring as no data");
                0
            }
        },
        Observation::Annotation { .. } => ANNOTATION_RISK,
    };
    RiskOutcome::from_percentage(percentage)
}

/// Deep catalog validation: structural checks plus range-expression
/// recognisability. Returns warnings; a bad entry degrades to fail-open
/// scoring instead of rejecting the catalog.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut warnings = catalog.validate();
    for kit in &catalog.kits {
        for p in &kit.parameters {
            if parse_range_expression(&p.critical_range) == RangeExpr::Unrecognised {
                warnings.push(format!(
                    "parameter '{}' in kit '{}' has unrecognisable critical range '{}'",
                    p.name, kit.name, p.critical_range
                ));
            }
        }
    }
    warnings
}
