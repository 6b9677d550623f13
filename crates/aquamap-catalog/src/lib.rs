//! aquamap-catalog — Static configuration data for the risk engine.
//!
//! Testing-kit and parameter definitions plus the symptom-severity table.
//! Everything here is loaded once (built-in defaults or a YAML/JSON file)
//! and never mutated at runtime; the engine treats it as read-only input.

pub mod catalog;
pub mod parameter;
pub mod symptoms;

pub use catalog::Catalog;
pub use parameter::{Parameter, TestingKit};
pub use symptoms::SymptomTable;
