use crate::core::models::sequence::{MIN_MONOMERS, Sequence};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SequenceFileError {
    #[error("Cannot open sequence file '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid monomer label '{token}' at position {position}")]
    InvalidLabel { position: usize, token: String },
    #[error("Sequence file holds {found} monomer labels, expected {expected}")]
    Truncated { expected: usize, found: usize },
    #[error("A chain needs at least 3 monomers, got {n_monomer}")]
    TooShort { n_monomer: usize },
}

/// Reader for whitespace-separated monomer label files.
///
/// The file has no header; the first `n_monomer` integers are taken in order and
/// anything after them is ignored.
pub struct SequenceFile;

impl SequenceFile {
    pub fn read_from(
        reader: &mut impl BufRead,
        n_monomer: usize,
    ) -> Result<Sequence, SequenceFileError> {
        if n_monomer < MIN_MONOMERS {
            return Err(SequenceFileError::TooShort { n_monomer });
        }

        let mut labels = Vec::with_capacity(n_monomer);
        'lines: for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                let label = token
                    .parse::<i64>()
                    .map_err(|_| SequenceFileError::InvalidLabel {
                        position: labels.len() + 1,
                        token: token.to_string(),
                    })?;
                labels.push(label);
                if labels.len() == n_monomer {
                    break 'lines;
                }
            }
        }

        if labels.len() < n_monomer {
            return Err(SequenceFileError::Truncated {
                expected: n_monomer,
                found: labels.len(),
            });
        }

        Ok(Sequence::from_labels(labels))
    }

    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        n_monomer: usize,
    ) -> Result<Sequence, SequenceFileError> {
        let path = path.as_ref();
        debug!("Loading {} monomer labels from {:?}", n_monomer, path);
        let file = File::open(path).map_err(|source| SequenceFileError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let sequence = Self::read_from(&mut reader, n_monomer)?;
        debug!(
            "Loaded sequence {} ({} hydrophobic)",
            sequence,
            sequence.hydrophobic_count()
        );
        Ok(sequence)
    }
}
