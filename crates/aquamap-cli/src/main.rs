//! Aquamap — Water-quality risk scoring for field observations.
//! Entry point for the command-line runtime.

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use aquamap_catalog::{Catalog, SymptomTable};
use aquamap_common::{ParameterValue, Report, RiskOutcome};
use aquamap_engine::{
    aggregate_kit_result, normalise_kit_risk, score_observation, validate_catalog, Observation,
};

/// A test-kit submission file: which kit was used and what was read.
#[derive(Debug, Deserialize)]
struct KitSubmission {
    kit: String,
    values: Vec<ParameterValue>,
}

fn load_catalog(path: &str) -> anyhow::Result<Catalog> {
    let catalog = if path == "builtin" {
        Catalog::builtin()
    } else if path.ends_with(".json") {
        Catalog::from_json(path).with_context(|| format!("loading catalog from {path}"))?
    } else {
        Catalog::from_yaml(path).with_context(|| format!("loading catalog from {path}"))?
    };
    Ok(catalog)
}

fn print_outcome(outcome: &RiskOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn score_kit(catalog_path: &str, submission_path: &str) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    // Warnings only; a degraded catalog still scores, fail-open.
    let warnings = validate_catalog(&catalog);
    if !warnings.is_empty() {
        tracing::warn!("catalog loaded with {} warning(s)", warnings.len());
    }

    let content = std::fs::read_to_string(submission_path)
        .with_context(|| format!("reading submission {submission_path}"))?;
    let submission: KitSubmission = serde_json::from_str(&content)?;

    // Unlike the map's fail-open scoring path, the CLI rejects an unknown
    // kit outright rather than printing a misleading 0.
    let kit = catalog.require_kit(&submission.kit)?;
    let result = aggregate_kit_result(kit, &submission.values);
    let outcome = RiskOutcome::from_percentage(normalise_kit_risk(&result));
    print_outcome(&outcome)
}

fn score_report(report_path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(report_path)
        .with_context(|| format!("reading report {report_path}"))?;
    let report: Report = serde_json::from_str(&content)?;

    let observation = Observation::Report(report);
    let outcome = score_observation(
        &Catalog::builtin(),
        &SymptomTable::default(),
        &observation,
    );
    print_outcome(&outcome)
}

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  aquamap score-kit <catalog.yaml|builtin> <submission.json>");
    eprintln!("  aquamap score-report <report.json>");
    eprintln!("  aquamap validate <catalog.yaml>");
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("aquamap=debug,info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, catalog, submission] if cmd == "score-kit" => score_kit(catalog, submission),
        [cmd, report] if cmd == "score-report" => score_report(report),
        [cmd, catalog] if cmd == "validate" => {
            let catalog = load_catalog(catalog)?;
            let warnings = validate_catalog(&catalog);
            for w in &warnings {
                println!("warning: {w}");
            }
            if warnings.is_empty() {
                println!("catalog ok: {} kit(s)", catalog.kits.len());
                Ok(())
            } else {
                bail!("catalog has {} warning(s)", warnings.len());
            }
        }
        _ => usage(),
    }
}
