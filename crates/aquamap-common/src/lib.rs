//! aquamap-common — Shared types and errors used across all Aquamap crates.

pub mod error;
pub mod risk;
pub mod value;

// Re-export commonly used types
pub use error::{AquamapError, Result};
pub use risk::{categorise, RiskCategory, RiskOutcome, RiskTier};
pub use value::{ParameterValue, Report, SampleValue};
