use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;
use crate::core::forcefield::scoring::ScoringError;
use crate::core::io::sequence_file::SequenceFileError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load sequence: {source}")]
    Sequence {
        #[from]
        source: SequenceFileError,
    },

    #[error("Failed to load model parameters: {source}")]
    Parameters {
        #[from]
        source: ParamLoadError,
    },

    #[error("Energy evaluation failed for angle vector {index}: {source}")]
    Evaluation {
        index: usize,
        #[source]
        source: ScoringError,
    },

    #[error("Energy scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },
}
