use crate::core::models::sequence::MIN_MONOMERS;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("A chain needs at least 3 monomers, got {0}")]
    TooFewMonomers(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    pub sequence_path: PathBuf,
    pub n_monomer: usize,
    /// Parameter file; the canonical AB coefficients are used when absent.
    pub parameters_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    sequence_path: Option<PathBuf>,
    n_monomer: Option<usize>,
    parameters_path: Option<PathBuf>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence_path(mut self, path: PathBuf) -> Self {
        self.sequence_path = Some(path);
        self
    }
    pub fn n_monomer(mut self, n: usize) -> Self {
        self.n_monomer = Some(n);
        self
    }
    pub fn parameters_path(mut self, path: Option<PathBuf>) -> Self {
        self.parameters_path = path;
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let sequence_path = self
            .sequence_path
            .ok_or(ConfigError::MissingParameter("sequence_path"))?;
        let n_monomer = self
            .n_monomer
            .ok_or(ConfigError::MissingParameter("n_monomer"))?;
        if n_monomer < MIN_MONOMERS {
            return Err(ConfigError::TooFewMonomers(n_monomer));
        }
        Ok(EvaluationConfig {
            sequence_path,
            n_monomer,
            parameters_path: self.parameters_path,
        })
    }
}
