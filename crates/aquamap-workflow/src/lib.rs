//! aquamap-workflow — Kit-test session state machine.
//!
//! Owns the sequencing the UI walks through when submitting a kit test:
//! `LocationInput → KitSelection → ParameterInput → Results`, with `back`
//! to the predecessor from any state and `run_new_test` from Results back
//! to ParameterInput (same kit, fresh readings). The engine stays
//! stateless; all mutation lives in the session.

pub mod session;

pub use session::{SessionState, TestSession, WorkflowError};
