//! Critical-range expression parsing and evaluation.
//!
//! Catalog parameters carry a textual threshold specification in one of
//! three shapes:
//!
//! - presence test: `"Presence in 100 mL"`
//! - two-sided numeric band: `"<6.5 or >8.5"` (clauses OR-combined)
//! - one-sided threshold with optional unit text: `"<0.2 mg/L"`, `">5 NTU"`
//!
//! Parsing produces an explicit [`RangeExpr`] so the fallback policy is
//! visible and testable: anything unrecognisable evaluates to "not
//! critical", never an error.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use aquamap_common::SampleValue;

/// Value tokens accepted as a positive presence reading.
const PRESENCE_TOKENS: [&str; 5] = ["present", "positive", "yes", "1", "true"];

/// `<N` or `>N` clause extractor for two-sided expressions.
fn clause_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([<>])\s*(\d+(?:\.\d+)?)").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundOp {
    Below,
    Above,
}

/// One comparison clause of a numeric range expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub op: BoundOp,
    pub threshold: f64,
}

impl Bound {
    fn matches(&self, value: f64) -> bool {
        match self.op {
            BoundOp::Below => value < self.threshold,
            BoundOp::Above => value > self.threshold,
        }
    }
}

/// Parsed form of a critical-range specification.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeExpr {
    /// Presence/absence test; numeric parsing is bypassed entirely.
    Presence,
    /// OR-combined comparison clauses, e.g. `<6.5 or >8.5`.
    TwoSided(Vec<Bound>),
    /// A single leading comparison, unit text tolerated after the number.
    OneSided(Bound),
    /// No recognisable pattern; always evaluates to "not critical".
    Unrecognised,
}

/// Parse a threshold specification. Shapes are matched in priority order:
/// presence, two-sided, one-sided; everything else is `Unrecognised`.
pub fn parse_range_expression(expression: &str) -> RangeExpr {
    let expr = expression.trim();

    if expr.to_lowercase().contains("presence") {
        return RangeExpr::Presence;
    }

    if expr.contains('<') && expr.contains('>') {
        let bounds: Vec<Bound> = clause_regex()
            .captures_iter(expr)
            .filter_map(|caps| {
                let op = if &caps[1] == "<" {
                    BoundOp::Below
                } else {
                    BoundOp::Above
                };
                caps[2].parse::<f64>().ok().map(|threshold| Bound { op, threshold })
            })
            .collect();
        if bounds.is_empty() {
            return RangeExpr::Unrecognised;
        }
        return RangeExpr::TwoSided(bounds);
    }

    let one_sided = |op: BoundOp, rest: &str| {
        // Number runs up to the first space; trailing unit text is ignored.
        rest.trim_start()
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<f64>().ok())
            .map(|threshold| RangeExpr::OneSided(Bound { op, threshold }))
            .unwrap_or(RangeExpr::Unrecognised)
    };

    if let Some(rest) = expr.strip_prefix('<') {
        return one_sided(BoundOp::Below, rest);
    }
    if let Some(rest) = expr.strip_prefix('>') {
        return one_sided(BoundOp::Above, rest);
    }

    RangeExpr::Unrecognised
}

/// Evaluate a parsed expression against a submitted value.
pub fn evaluate(expr: &RangeExpr, value: &SampleValue) -> bool {
    match expr {
        RangeExpr::Presence => {
            let token = value.text_form();
            PRESENCE_TOKENS.contains(&token.as_str())
        }
        RangeExpr::TwoSided(bounds) => match value.as_f64() {
            Some(v) => bounds.iter().any(|b| b.matches(v)),
            None => false,
        },
        RangeExpr::OneSided(bound) => match value.as_f64() {
            Some(v) => bound.matches(v),
            None => false,
        },
        RangeExpr::Unrecognised => false,
    }
}

/// Is the reading inside the parameter's critical band?
///
/// Total over all inputs: malformed expressions and unparseable values
/// resolve to `false` rather than an error.
pub fn evaluate_critical_range(expression: &str, value: &SampleValue) -> bool {
    let parsed = parse_range_expression(expression);
    if parsed == RangeExpr::Unrecognised {
        warn!("unrecognised critical-range expression '{expression}'; treating reading as not critical");
    }
    evaluate(&parsed, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presence() {
        assert_eq!(parse_range_expression("Presence in 100 mL"), RangeExpr::Presence);
        assert_eq!(parse_range_expression("  PRESENCE/ABSENCE  "), RangeExpr::Presence);
    }

    #[test]
    fn test_parse_two_sided() {
        let expr = parse_range_expression("<6.5 or >8.5");
        match expr {
            RangeExpr::TwoSided(bounds) => {
                assert_eq!(bounds.len(), 2);
                assert_eq!(bounds[0], Bound { op: BoundOp::Below, threshold: 6.5 });
                assert_eq!(bounds[1], Bound { op: BoundOp::Above, threshold: 8.5 });
            }
            other => panic!("expected TwoSided, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_one_sided_with_unit() {
        assert_eq!(
            parse_range_expression("<0.2 mg/L"),
            RangeExpr::OneSided(Bound { op: BoundOp::Below, threshold: 0.2 })
        );
        assert_eq!(
            parse_range_expression(">5 NTU"),
            RangeExpr::OneSided(Bound { op: BoundOp::Above, threshold: 5.0 })
        );
    }

    #[test]
    fn test_parse_unrecognised() {
        assert_eq!(parse_range_expression("mg/L"), RangeExpr::Unrecognised);
        assert_eq!(parse_range_expression(""), RangeExpr::Unrecognised);
        assert_eq!(parse_range_expression("< none"), RangeExpr::Unrecognised);
    }

    #[test]
    fn test_two_sided_clauses_are_or_combined() {
        let expr = "<6.5 or >8.5";
        assert!(!evaluate_critical_range(expr, &SampleValue::Number(7.0)));
        assert!(evaluate_critical_range(expr, &SampleValue::Number(6.0)));
        assert!(evaluate_critical_range(expr, &SampleValue::Number(9.0)));
        // Boundary values are not critical: clauses are strict comparisons.
        assert!(!evaluate_critical_range(expr, &SampleValue::Number(6.5)));
        assert!(!evaluate_critical_range(expr, &SampleValue::Number(8.5)));
    }

    #[test]
    fn test_one_sided_evaluation() {
        assert!(evaluate_critical_range("<0.2 mg/L", &SampleValue::Number(0.1)));
        assert!(!evaluate_critical_range("<0.2 mg/L", &SampleValue::Number(0.5)));
        assert!(evaluate_critical_range(">5 NTU", &SampleValue::Text("12".into())));
        assert!(!evaluate_critical_range(">5 NTU", &SampleValue::Text("3.5".into())));
    }

    #[test]
    fn test_presence_evaluation() {
        let expr = "Presence in 100 mL";
        assert!(evaluate_critical_range(expr, &SampleValue::Text("present".into())));
        assert!(evaluate_critical_range(expr, &SampleValue::Text("Positive".into())));
        assert!(evaluate_critical_range(expr, &SampleValue::Text("1".into())));
        assert!(evaluate_critical_range(expr, &SampleValue::Number(1.0)));
        assert!(!evaluate_critical_range(expr, &SampleValue::Text("absent".into())));
        assert!(!evaluate_critical_range(expr, &SampleValue::Text("negative".into())));
        assert!(!evaluate_critical_range(expr, &SampleValue::Text("0".into())));
        assert!(!evaluate_critical_range(expr, &SampleValue::Text("murky".into())));
    }

    #[test]
    fn test_unparseable_value_is_not_critical() {
        assert!(!evaluate_critical_range("<6.5 or >8.5", &SampleValue::Text("n/a".into())));
        assert!(!evaluate_critical_range(">5 NTU", &SampleValue::Text("high".into())));
    }

    #[test]
    fn test_malformed_expression_is_not_critical() {
        assert!(!evaluate_critical_range("between 2 and 4", &SampleValue::Number(3.0)));
        assert!(!evaluate_critical_range("", &SampleValue::Number(3.0)));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let value = SampleValue::Number(6.0);
        let first = evaluate_critical_range("<6.5 or >8.5", &value);
        let second = evaluate_critical_range("<6.5 or >8.5", &value);
        assert_eq!(first, second);
        assert!(first);
    }
}
