//! Symptom severity table for outbreak scoring.
//!
//! Severities are nominal multipliers (1.0 = no bump); the scorer applies
//! half of each bump additively, see `aquamap-engine::outbreak`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aquamap_common::Result;

/// Built-in severity table. Keys match the report form's fixed vocabulary.
fn builtin_severities() -> HashMap<String, f64> {
    let mut m = HashMap::new();
    m.insert("Diarrhea".to_string(), 1.2);
    m.insert("Vomiting".to_string(), 1.3);
    m.insert("Fever".to_string(), 1.4);
    m.insert("Abdominal pain".to_string(), 1.1);
    m.insert("Skin rashes".to_string(), 1.15);
    m.insert("Other".to_string(), 1.1);
    m
}

/// Severity lookup for reported symptoms.
///
/// Loaded once; deployments may extend the vocabulary from a YAML file
/// without touching the scoring algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomTable {
    pub severities: HashMap<String, f64>,
}

impl Default for SymptomTable {
    fn default() -> Self {
        Self {
            severities: builtin_severities(),
        }
    }
}

impl SymptomTable {
    /// Load from a YAML file, replacing the built-in table.
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: Self = serde_yaml::from_str(&content)?;
        Ok(table)
    }

    /// Nominal severity of a symptom. `None` for anything outside the
    /// vocabulary; unrecognised symptoms never contribute to a score.
    pub fn severity(&self, symptom: &str) -> Option<f64> {
        self.severities.get(symptom).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = SymptomTable::default();
        assert_eq!(table.severity("Fever"), Some(1.4));
        assert_eq!(table.severity("Diarrhea"), Some(1.2));
        assert_eq!(table.severity("Skin rashes"), Some(1.15));
        assert_eq!(table.severity("Headache"), None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let table = SymptomTable::default();
        let yaml = serde_yaml::to_string(&table).unwrap();
        let parsed: SymptomTable = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(table, parsed);
    }

    #[test]
    fn test_from_yaml_missing_file_is_io_error() {
        let err = SymptomTable::from_yaml("/nonexistent/aquamap-symptoms.yaml").unwrap_err();
        assert!(matches!(err, aquamap_common::AquamapError::Io(_)));
    }
}
