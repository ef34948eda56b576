use abeval::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Everything that can stop an `abeval` subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the sequence or parameters, or scoring a vector, failed.
    #[error(transparent)]
    Evaluation(#[from] EngineError),

    /// The config file, flags and `--set` values do not add up to a run.
    #[error("Cannot assemble the run configuration: {0}")]
    Config(String),

    /// An angle or config file was readable but malformed.
    #[error("'{path}' is malformed: {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Reading or writing failed: {0}")]
    Io(#[from] std::io::Error),

    /// Writing an energy or coordinate table failed.
    #[error("Cannot write CSV output: {0}")]
    Csv(#[from] csv::Error),

    /// A flag value is outside what the model accepts.
    #[error("Bad argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
