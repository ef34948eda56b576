use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AngleFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid angle value '{token}' on line {line}")]
    InvalidValue { line: usize, token: String },
    #[error("Line {line} holds {found} angles, expected {expected} like the first vector")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Plain-text angle vectors, one per line.
///
/// Values are whitespace-separated reals; blank lines and lines starting with `#`
/// are skipped. All vectors in a file must have the same length.
pub struct AngleFile;

impl AngleFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<Vec<f64>>, AngleFileError> {
        let mut vectors: Vec<Vec<f64>> = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let angles = trimmed
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<f64>()
                        .map_err(|_| AngleFileError::InvalidValue {
                            line: line_num + 1,
                            token: token.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = vectors.first() {
                if first.len() != angles.len() {
                    return Err(AngleFileError::RaggedLine {
                        line: line_num + 1,
                        expected: first.len(),
                        found: angles.len(),
                    });
                }
            }
            vectors.push(angles);
        }

        Ok(vectors)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, AngleFileError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let vectors = Self::read_from(&mut reader)?;
        debug!("Read {} angle vector(s) from {:?}", vectors.len(), path);
        Ok(vectors)
    }
}
