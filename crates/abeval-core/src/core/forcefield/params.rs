use crate::core::models::sequence::Monomer;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Coefficients of the AB off-lattice energy.
///
/// The defaults are the canonical 3D AB model: unit bonds, a bending term with
/// weight 1, a torsion term with weight -1/2, and contact strengths of 1 for a
/// hydrophobic pair and 1/2 for every other pair.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct AbParameters {
    pub bond_length: f64,
    pub bending_coefficient: f64,
    pub torsion_coefficient: f64,
    pub hydrophobic_contact: f64,
    pub mixed_contact: f64,
}

impl Default for AbParameters {
    fn default() -> Self {
        Self {
            bond_length: 1.0,
            bending_coefficient: 1.0,
            torsion_coefficient: -0.5,
            hydrophobic_contact: 1.0,
            mixed_contact: 0.5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid parameter '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl AbParameters {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        debug!("Loading AB model parameters from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        if !(self.bond_length.is_finite() && self.bond_length > 0.0) {
            return Err(ParamLoadError::Invalid {
                name: "bond-length",
                reason: format!("must be positive and finite, got {}", self.bond_length),
            });
        }
        let finite = [
            ("bending-coefficient", self.bending_coefficient),
            ("torsion-coefficient", self.torsion_coefficient),
            ("hydrophobic-contact", self.hydrophobic_contact),
            ("mixed-contact", self.mixed_contact),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParamLoadError::Invalid {
                    name,
                    reason: format!("must be finite, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Contact strength `C_ij` for a pair of monomers.
    #[inline]
    pub fn contact_strength(&self, a: Monomer, b: Monomer) -> f64 {
        if a.is_hydrophobic() && b.is_hydrophobic() {
            self.hydrophobic_contact
        } else {
            self.mixed_contact
        }
    }
}
