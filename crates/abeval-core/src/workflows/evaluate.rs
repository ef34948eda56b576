use crate::core::forcefield::params::AbParameters;
use crate::core::forcefield::scoring::{Evaluator, ScoringError};
use crate::core::forcefield::term::EnergyTerm;
use crate::core::io::sequence_file::SequenceFile;
use crate::core::models::conformation::Conformation;
use crate::core::models::sequence::Sequence;
use crate::engine::config::EvaluationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRecord {
    /// 1-based position of the vector in the input batch.
    pub index: usize,
    pub terms: EnergyTerm,
}

impl EvaluationRecord {
    #[inline]
    pub fn total(&self) -> f64 {
        self.terms.total()
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub sequence: Sequence,
    pub parameters: AbParameters,
    pub records: Vec<EvaluationRecord>,
}

impl EvaluationResult {
    pub fn lowest(&self) -> Option<&EvaluationRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.total().total_cmp(&b.total()))
    }
}

/// Loads the sequence and coefficients a configuration points at.
pub fn load_model(config: &EvaluationConfig) -> Result<(Sequence, AbParameters), EngineError> {
    let sequence = SequenceFile::read_from_path(&config.sequence_path, config.n_monomer)?;
    let parameters = match &config.parameters_path {
        Some(path) => AbParameters::load(path)?,
        None => AbParameters::default(),
    };
    Ok((sequence, parameters))
}

#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    config: &EvaluationConfig,
    angle_vectors: &[Vec<f64>],
    reporter: &ProgressReporter,
) -> Result<EvaluationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading model",
    });
    info!(
        "Loading {} monomer sequence from {:?}",
        config.n_monomer, config.sequence_path
    );
    let (sequence, parameters) = load_model(config)?;
    reporter.report(Progress::PhaseFinish);

    let evaluator = Evaluator::new(&sequence, &parameters)?;
    info!(
        "Scoring {} angle vector(s) of dimension {} for sequence {}",
        angle_vectors.len(),
        evaluator.dimension(),
        sequence
    );
    let records = score_all(&evaluator, angle_vectors, reporter)?;

    Ok(EvaluationResult {
        sequence,
        parameters,
        records,
    })
}

/// Scores every vector with `evaluator`, in input order.
pub fn score_all(
    evaluator: &Evaluator,
    angle_vectors: &[Vec<f64>],
    reporter: &ProgressReporter,
) -> Result<Vec<EvaluationRecord>, EngineError> {
    reporter.report(Progress::TaskStart {
        total_steps: angle_vectors.len() as u64,
    });

    let mut records = Vec::with_capacity(angle_vectors.len());
    for (i, angles) in angle_vectors.iter().enumerate() {
        let index = i + 1;
        let terms = evaluator
            .evaluate_terms(angles)
            .map_err(|source| EngineError::Evaluation { index, source })?;
        if let Some(note) = non_finite_note(index, terms.total()) {
            warn!("{}", note);
            reporter.report(Progress::Message(note));
        }
        reporter.report(Progress::VectorEvaluated {
            index,
            energy: terms.total(),
        });
        records.push(EvaluationRecord { index, terms });
    }

    reporter.report(Progress::TaskFinish);
    Ok(records)
}

fn non_finite_note(index: usize, energy: f64) -> Option<String> {
    if energy == f64::INFINITY {
        Some(format!(
            "Angle vector {} places non-bonded monomers on top of each other (energy {})",
            index, energy
        ))
    } else if !energy.is_finite() {
        Some(format!(
            "Angle vector {} has a non-finite energy ({}); check the input angles",
            index, energy
        ))
    } else {
        None
    }
}

/// Monomer positions for `angles`, monomer 1 first. Needs no sequence.
pub fn positions(angles: &[f64], bond_length: f64) -> Result<Vec<Point3<f64>>, ScoringError> {
    Conformation::from_angles(angles, bond_length)
        .map(|c| c.positions().to_vec())
        .map_err(|_| ScoringError::InvalidDimension {
            n_dimension: angles.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EvaluationConfigBuilder;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config_for(sequence_path: PathBuf, n_monomer: usize) -> EvaluationConfig {
        EvaluationConfigBuilder::new()
            .sequence_path(sequence_path)
            .n_monomer(n_monomer)
            .build()
            .unwrap()
    }

    #[test]
    fn run_scores_every_vector_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = write_file(&dir, "seq.txt", "1 1 0 0 1\n");
        let config = config_for(seq_path, 5);
        let vectors = vec![vec![0.0; 5], vec![0.3, 1.2, 2.5, 0.7, 1.9]];

        let result = run(&config, &vectors, &ProgressReporter::new()).unwrap();

        assert_eq!(result.sequence.to_string(), "AABBA");
        assert_eq!(result.parameters, AbParameters::default());
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].index, 1);
        assert_eq!(result.records[1].index, 2);

        let evaluator = Evaluator::new(&result.sequence, &result.parameters).unwrap();
        for (record, angles) in result.records.iter().zip(&vectors) {
            assert_eq!(record.total(), evaluator.evaluate(angles).unwrap());
        }
    }

    #[test]
    fn run_uses_parameter_file_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = write_file(&dir, "seq.txt", "1 0 1");
        let params_path = write_file(&dir, "ab.toml", "hydrophobic-contact = 2.0\n");
        let config = EvaluationConfigBuilder::new()
            .sequence_path(seq_path)
            .n_monomer(3)
            .parameters_path(Some(params_path))
            .build()
            .unwrap();

        let result = run(&config, &[vec![1.0]], &ProgressReporter::new()).unwrap();
        assert_eq!(result.parameters.hydrophobic_contact, 2.0);
    }

    #[test]
    fn run_fails_when_the_sequence_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path().join("missing.txt"), 5);
        let result = run(&config, &[vec![0.0; 5]], &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Sequence { .. })));
    }

    #[test]
    fn run_reports_which_vector_has_the_wrong_length() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = write_file(&dir, "seq.txt", "1 1 0 0 1");
        let config = config_for(seq_path, 5);
        let vectors = vec![vec![0.0; 5], vec![0.0; 7]];

        let result = run(&config, &vectors, &ProgressReporter::new());
        match result {
            Err(EngineError::Evaluation { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(
                    source,
                    ScoringError::SequenceLengthMismatch { .. }
                ));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn run_emits_progress_for_each_vector() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = write_file(&dir, "seq.txt", "1 1 0 0 1");
        let config = config_for(seq_path, 5);
        let vectors = vec![vec![0.0; 5]; 3];

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        }));
        run(&config, &vectors, &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let evaluated = events
            .iter()
            .filter(|p| matches!(p, Progress::VectorEvaluated { .. }))
            .count();
        assert_eq!(evaluated, 3);
        assert!(events.contains(&Progress::TaskStart { total_steps: 3 }));
        assert_eq!(events.last(), Some(&Progress::TaskFinish));
    }

    #[test]
    fn non_finite_energy_is_reported_as_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = write_file(&dir, "seq.txt", "1 1 0 0 1");
        let config = config_for(seq_path, 5);
        let vectors = vec![vec![0.0; 5], vec![0.3, f64::NAN, 2.5, 0.7, 1.9]];

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        }));
        let result = run(&config, &vectors, &reporter).unwrap();
        drop(reporter);

        assert!(result.records[1].total().is_nan());
        let messages: Vec<_> = events
            .into_inner()
            .unwrap()
            .into_iter()
            .filter_map(|p| match p {
                Progress::Message(msg) => Some(msg),
                _ => None,
            })
            .collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Angle vector 2 "));
    }

    #[test]
    fn overlap_note_names_the_vector() {
        let note = non_finite_note(7, f64::INFINITY).unwrap();
        assert!(note.contains("vector 7"));
        assert!(note.contains("on top of each other"));
        assert_eq!(non_finite_note(7, -3.25), None);
        assert!(non_finite_note(7, f64::NAN).unwrap().contains("non-finite"));
    }

    #[test]
    fn lowest_picks_the_minimum_total() {
        let result = EvaluationResult {
            sequence: Sequence::from_labels(vec![1, 0, 1]),
            parameters: AbParameters::default(),
            records: vec![
                EvaluationRecord {
                    index: 1,
                    terms: EnergyTerm::new(1.0, 0.0, 0.0),
                },
                EvaluationRecord {
                    index: 2,
                    terms: EnergyTerm::new(-1.0, 0.0, -0.5),
                },
                EvaluationRecord {
                    index: 3,
                    terms: EnergyTerm::new(0.0, 0.0, f64::INFINITY),
                },
            ],
        };
        assert_eq!(result.lowest().map(|r| r.index), Some(2));
    }

    #[test]
    fn positions_follow_the_chain() {
        let chain = positions(&[0.0; 5], 1.0).unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain[4], Point3::new(2.0, 0.0, 2.0));
        assert!(positions(&[0.0; 2], 1.0).is_err());
    }
}
