//! The testing-kit catalog: built-in defaults and file loading.
//!
//! Deployments start from [`Catalog::builtin`] and may override it with a
//! YAML or JSON file. Loading is the only fallible surface; once loaded the
//! catalog is read-only.

use serde::{Deserialize, Serialize};
use tracing::warn;

use aquamap_common::{AquamapError, Result};

use crate::parameter::{Parameter, TestingKit};

/// The fixed list of testing-kit definitions the engine scores against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub kits: Vec<TestingKit>,
}

impl Catalog {
    /// Load from a YAML file.
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Self = serde_yaml::from_str(&content)?;
        Ok(catalog)
    }

    /// Load from a JSON file.
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Save to a YAML file.
    pub fn to_yaml(&self, path: &str) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look up a kit by name.
    pub fn kit(&self, name: &str) -> Option<&TestingKit> {
        self.kits.iter().find(|k| k.name == name)
    }

    /// Look up a kit by name, failing with [`AquamapError::KitNotFound`].
    ///
    /// For boundaries that should reject an unknown kit outright; the
    /// engine's own scoring path stays fail-open and uses [`Catalog::kit`].
    pub fn require_kit(&self, name: &str) -> Result<&TestingKit> {
        self.kit(name)
            .ok_or_else(|| AquamapError::KitNotFound(name.to_string()))
    }

    /// Structural sanity check for operator-supplied catalogs.
    ///
    /// Returns human-readable warnings instead of failing: a bad entry
    /// degrades to the engine's fail-open behaviour (never critical, low
    /// tier) rather than taking a deployment down.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for kit in &self.kits {
            if kit.parameters.is_empty() {
                warnings.push(format!("kit '{}' has no parameters", kit.name));
            }
            for p in &kit.parameters {
                if !(0.0..=1.0).contains(&p.confidence) {
                    warnings.push(format!(
                        "parameter '{}' in kit '{}' has confidence {} outside [0, 1]",
                        p.name, kit.name, p.confidence
                    ));
                }
                if p.critical_range.trim().is_empty() {
                    warnings.push(format!(
                        "parameter '{}' in kit '{}' has an empty critical range",
                        p.name, kit.name
                    ));
                }
            }
        }
        for w in &warnings {
            warn!("catalog validation: {w}");
        }
        warnings
    }

    /// The built-in catalog shipped with Aquamap.
    ///
    /// Two field kits covering the common contamination indicators. Ranges
    /// follow WHO drinking-water guideline values; confidence scores reflect
    /// how directly each parameter indicates faecal contamination.
    pub fn builtin() -> Self {
        Self {
            kits: vec![
                TestingKit {
                    name: "Basic Field Kit".to_string(),
                    result_type: "Strip and visual readings".to_string(),
                    parameters: vec![
                        Parameter {
                            name: "pH".to_string(),
                            critical_range: "<6.5 or >8.5".to_string(),
                            pathogen_risk: "Corrosion by-products; reduced disinfection efficacy"
                                .to_string(),
                            diseases: vec![
                                "Gastrointestinal irritation".to_string(),
                            ],
                            confidence: 0.65,
                        },
                        Parameter {
                            name: "Turbidity".to_string(),
                            critical_range: ">5 NTU".to_string(),
                            pathogen_risk: "Particulates shielding microbial contamination"
                                .to_string(),
                            diseases: vec![
                                "Giardiasis".to_string(),
                                "Cryptosporidiosis".to_string(),
                            ],
                            confidence: 0.70,
                        },
                        Parameter {
                            name: "Free Chlorine".to_string(),
                            critical_range: "<0.2 mg/L".to_string(),
                            pathogen_risk: "Insufficient residual disinfectant".to_string(),
                            diseases: vec![
                                "Cholera".to_string(),
                                "Typhoid".to_string(),
                            ],
                            confidence: 0.90,
                        },
                        Parameter {
                            name: "E. coli".to_string(),
                            critical_range: "Presence in 100 mL".to_string(),
                            pathogen_risk: "Direct faecal contamination indicator".to_string(),
                            diseases: vec![
                                "Diarrhoeal disease".to_string(),
                                "Dysentery".to_string(),
                                "Haemolytic uraemic syndrome".to_string(),
                            ],
                            confidence: 0.95,
                        },
                    ],
                },
                TestingKit {
                    name: "Advanced Field Kit".to_string(),
                    result_type: "Colorimetric and culture readings".to_string(),
                    parameters: vec![
                        Parameter {
                            name: "Nitrates".to_string(),
                            critical_range: ">50 mg/L".to_string(),
                            pathogen_risk: "Agricultural runoff or sewage infiltration"
                                .to_string(),
                            diseases: vec!["Methaemoglobinaemia".to_string()],
                            confidence: 0.80,
                        },
                        Parameter {
                            name: "Lead".to_string(),
                            critical_range: ">0.01 mg/L".to_string(),
                            pathogen_risk: "Leaching from pipework".to_string(),
                            diseases: vec![
                                "Lead poisoning".to_string(),
                                "Developmental impairment".to_string(),
                            ],
                            confidence: 0.85,
                        },
                        Parameter {
                            name: "Total Coliform".to_string(),
                            critical_range: "Presence in 100 mL".to_string(),
                            pathogen_risk: "General microbial contamination".to_string(),
                            diseases: vec!["Diarrhoeal disease".to_string()],
                            confidence: 0.75,
                        },
                        Parameter {
                            name: "Dissolved Oxygen".to_string(),
                            critical_range: "<5 mg/L".to_string(),
                            pathogen_risk: "Organic pollution load".to_string(),
                            diseases: vec![],
                            confidence: 0.50,
                        },
                    ],
                },
            ],
        }
    }
}
