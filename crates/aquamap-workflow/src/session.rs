//! The kit-test submission session.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use aquamap_catalog::{Catalog, TestingKit};
use aquamap_common::{ParameterValue, RiskOutcome, SampleValue};
use aquamap_engine::{aggregate_kit_result, normalise_kit_risk, KitTestResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    LocationInput,
    KitSelection,
    ParameterInput,
    Results,
}

#[derive(Debug, Error, PartialEq)]
pub enum WorkflowError {
    #[error("'{action}' is not valid in state {state:?}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },

    #[error("unknown testing kit: {0}")]
    UnknownKit(String),
}

/// One user's walk through the kit-test flow.
///
/// Readings entered so far and the last scored result are held here until
/// the flow moves on; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct TestSession {
    state: SessionState,
    location: Option<String>,
    kit: Option<TestingKit>,
    values: Vec<ParameterValue>,
    last_result: Option<(KitTestResult, RiskOutcome)>,
}

impl TestSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::LocationInput,
            location: None,
            kit: None,
            values: Vec::new(),
            last_result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn kit(&self) -> Option<&TestingKit> {
        self.kit.as_ref()
    }

    pub fn values(&self) -> &[ParameterValue] {
        &self.values
    }

    /// The scored result shown on the results screen, if any.
    pub fn last_result(&self) -> Option<&(KitTestResult, RiskOutcome)> {
        self.last_result.as_ref()
    }

    /// Record the sampling location and advance to kit selection.
    pub fn set_location(&mut self, location: impl Into<String>) -> Result<(), WorkflowError> {
        if self.state != SessionState::LocationInput {
            return Err(self.invalid("set_location"));
        }
        self.location = Some(location.into());
        self.state = SessionState::KitSelection;
        Ok(())
    }

    /// Choose a catalog kit and advance to parameter entry.
    pub fn select_kit(&mut self, catalog: &Catalog, name: &str) -> Result<(), WorkflowError> {
        if self.state != SessionState::KitSelection {
            return Err(self.invalid("select_kit"));
        }
        let kit = catalog
            .kit(name)
            .ok_or_else(|| WorkflowError::UnknownKit(name.to_string()))?;
        self.kit = Some(kit.clone());
        self.state = SessionState::ParameterInput;
        Ok(())
    }

    /// Record one reading. Re-entering a parameter replaces the earlier
    /// value; the aggregator consumes at most one reading per parameter.
    pub fn record_value(
        &mut self,
        parameter: impl Into<String>,
        value: impl Into<SampleValue>,
    ) -> Result<(), WorkflowError> {
        if self.state != SessionState::ParameterInput {
            return Err(self.invalid("record_value"));
        }
        let parameter = parameter.into();
        self.values.retain(|v| v.parameter != parameter);
        self.values.push(ParameterValue {
            parameter,
            value: value.into(),
        });
        Ok(())
    }

    /// Score the entered readings and advance to the results screen.
    pub fn submit(&mut self) -> Result<&(KitTestResult, RiskOutcome), WorkflowError> {
        if self.state != SessionState::ParameterInput {
            return Err(self.invalid("submit"));
        }
        // select_kit is the only path into ParameterInput, so a kit is set.
        let kit = self.kit.as_ref().ok_or(WorkflowError::InvalidTransition {
            state: self.state,
            action: "submit",
        })?;

        let result = aggregate_kit_result(kit, &self.values);
        let outcome = RiskOutcome::from_percentage(normalise_kit_risk(&result));
        debug!(
            "kit test scored: {} → {} ({})",
            result.kit_name, outcome.percentage, outcome.category
        );

        self.state = SessionState::Results;
        Ok(self.last_result.insert((result, outcome)))
    }

    /// Step back to the predecessor state, dropping whatever the current
    /// state had accumulated.
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        self.state = match self.state {
            SessionState::LocationInput => return Err(self.invalid("back")),
            SessionState::KitSelection => {
                self.location = None;
                SessionState::LocationInput
            }
            SessionState::ParameterInput => {
                self.kit = None;
                self.values.clear();
                SessionState::KitSelection
            }
            SessionState::Results => {
                self.last_result = None;
                SessionState::ParameterInput
            }
        };
        Ok(())
    }

    /// From the results screen, start a fresh test with the same kit.
    pub fn run_new_test(&mut self) -> Result<(), WorkflowError> {
        if self.state != SessionState::Results {
            return Err(self.invalid("run_new_test"));
        }
        self.values.clear();
        self.last_result = None;
        self.state = SessionState::ParameterInput;
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            state: self.state,
            action,
        }
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
