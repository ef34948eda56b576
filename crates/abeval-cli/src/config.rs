use crate::cli::EnergyArgs;
use crate::error::{CliError, Result};
use abeval::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSequenceConfig {
    path: Option<PathBuf>,
    monomers: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialForcefieldConfig {
    #[serde(rename = "parameters-path")]
    parameters_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEvaluationConfig {
    sequence: Option<PartialSequenceConfig>,
    forcefield: Option<PartialForcefieldConfig>,
}

impl PartialEvaluationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final configuration. `--set` values win over CLI
    /// arguments, which win over the file. `inferred_monomers` is the last
    /// resort for the chain length.
    pub fn merge_with_cli(
        self,
        args: &EnergyArgs,
        inferred_monomers: Option<usize>,
    ) -> Result<core_config::EvaluationConfig> {
        let mut overrides = PartialEvaluationConfig::default();
        overrides.apply_set_values(&args.set_values)?;

        let seq_file = self.sequence.unwrap_or_default();
        let seq_set = overrides.sequence.unwrap_or_default();
        let ff_file = self.forcefield.unwrap_or_default();
        let ff_set = overrides.forcefield.unwrap_or_default();

        let sequence_path = seq_set
            .path
            .or_else(|| args.sequence.clone())
            .or(seq_file.path)
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'sequence.path' is required either in the config file or via --sequence."
                        .to_string(),
                )
            })?;

        let n_monomer = seq_set
            .monomers
            .or(args.monomers)
            .or(seq_file.monomers)
            .or(inferred_monomers)
            .ok_or_else(|| {
                CliError::Config(
                    "The chain length could not be determined; pass --monomers.".to_string(),
                )
            })?;

        let parameters_path = ff_set
            .parameters_path
            .or_else(|| args.parameters.clone())
            .or(ff_file.parameters_path);

        core_config::EvaluationConfigBuilder::new()
            .sequence_path(sequence_path)
            .n_monomer(n_monomer)
            .parameters_path(parameters_path)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            }
            let key = parts[0];
            let value_str = parts[1];

            match key {
                "sequence.path" => {
                    self.sequence.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "sequence.monomers" => {
                    self.sequence.get_or_insert_with(Default::default).monomers =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "forcefield.parameters-path" => {
                    self.forcefield
                        .get_or_insert_with(Default::default)
                        .parameters_path = Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
