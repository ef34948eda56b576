use super::params::AbParameters;
use super::potentials;
use super::term::EnergyTerm;
use crate::core::models::conformation::Conformation;
use crate::core::models::sequence::{MIN_MONOMERS, Monomer, Sequence, monomers_for};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoringError {
    #[error("Angle vector of length {n_dimension} does not describe a chain (expected 2 * N - 5 for N >= 3)")]
    InvalidDimension { n_dimension: usize },
    #[error(
        "Angle vector describes {from_angles} monomers but the loaded sequence has {sequence}"
    )]
    SequenceLengthMismatch { sequence: usize, from_angles: usize },
    #[error("Sequence of {0} monomers is too short to evaluate (need at least 3)")]
    SequenceTooShort(usize),
    #[error("Coordinate index {index} is outside 1..={n_dimension}")]
    CoordinateOutOfRange { index: usize, n_dimension: usize },
}

/// Admissible range of the 1-based coordinate `index` of an angle vector.
///
/// Every angle is a free real parameter; wrapping happens inside the evaluator, so
/// the range is always the whole real line.
pub fn coordinate_bounds(index: usize, n_dimension: usize) -> Result<(f64, f64), ScoringError> {
    if index == 0 || index > n_dimension {
        return Err(ScoringError::CoordinateOutOfRange { index, n_dimension });
    }
    Ok((f64::NEG_INFINITY, f64::INFINITY))
}

/// Bounds of coordinates `1..=n_dimension`, in order. Lazy, so huge dimensions
/// cost nothing until consumed.
pub fn all_bounds(n_dimension: usize) -> impl Iterator<Item = (f64, f64)> {
    std::iter::repeat_n((f64::NEG_INFINITY, f64::INFINITY), n_dimension)
}

/// Bending energy: `coefficient * sum(b_i . b_{i+1})` over consecutive bonds.
pub fn bending_energy(bonds: &[Vector3<f64>], coefficient: f64) -> f64 {
    bonds.windows(2).fold(0.0, |acc, pair| {
        acc + potentials::bond_angle(&pair[0], &pair[1], coefficient)
    })
}

/// Torsion energy: `coefficient * sum(b_i . b_{i+2})` over bonds one apart.
pub fn torsion_energy(bonds: &[Vector3<f64>], coefficient: f64) -> f64 {
    bonds.windows(3).fold(0.0, |acc, triple| {
        acc + potentials::torsion(&triple[0], &triple[2], coefficient)
    })
}

/// Contact energy over every non-bonded pair `(i, j)` with `j >= i + 2`.
///
/// `positions` and `monomers` are paired by index. Pairs are accumulated with
/// `i` ascending, then `j` ascending.
pub fn pair_energy(positions: &[Point3<f64>], monomers: &[Monomer], params: &AbParameters) -> f64 {
    debug_assert_eq!(positions.len(), monomers.len());
    let n = positions.len().min(monomers.len());

    let mut energy = 0.0;
    for i in 0..n {
        for j in (i + 2)..n {
            let strength = params.contact_strength(monomers[i], monomers[j]);
            let dist = (positions[i] - positions[j]).norm();
            energy += potentials::ab_lennard_jones(dist, strength);
        }
    }
    energy
}

/// Energy evaluator for one chain.
///
/// Borrows an immutable sequence and parameter set; every call builds its own
/// conformation, so an evaluator can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    sequence: &'a Sequence,
    params: &'a AbParameters,
    n_dimension: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(sequence: &'a Sequence, params: &'a AbParameters) -> Result<Self, ScoringError> {
        let n_dimension = sequence
            .dimension()
            .ok_or(ScoringError::SequenceTooShort(sequence.len()))?;
        Ok(Self {
            sequence,
            params,
            n_dimension,
        })
    }

    /// Length of the angle vectors this evaluator accepts.
    pub fn dimension(&self) -> usize {
        self.n_dimension
    }

    pub fn bounds(&self, index: usize) -> Result<(f64, f64), ScoringError> {
        coordinate_bounds(index, self.n_dimension)
    }

    pub fn conformation(&self, angles: &[f64]) -> Result<Conformation, ScoringError> {
        self.check_dimension(angles.len())?;
        Conformation::from_angles(angles, self.params.bond_length).map_err(|_| {
            ScoringError::InvalidDimension {
                n_dimension: angles.len(),
            }
        })
    }

    pub fn evaluate_terms(&self, angles: &[f64]) -> Result<EnergyTerm, ScoringError> {
        let conformation = self.conformation(angles)?;
        Ok(self.score_conformation(&conformation))
    }

    /// The AB energy of `angles`: bending plus torsion plus contact energy.
    pub fn evaluate(&self, angles: &[f64]) -> Result<f64, ScoringError> {
        self.evaluate_terms(angles).map(|terms| terms.total())
    }

    fn score_conformation(&self, conformation: &Conformation) -> EnergyTerm {
        let bonds = conformation.bonds();
        EnergyTerm {
            bend: bending_energy(bonds, self.params.bending_coefficient),
            torsion: torsion_energy(bonds, self.params.torsion_coefficient),
            lennard_jones: pair_energy(
                conformation.positions(),
                self.sequence.monomers(),
                self.params,
            ),
        }
    }

    fn check_dimension(&self, n_dimension: usize) -> Result<(), ScoringError> {
        if n_dimension == self.n_dimension {
            return Ok(());
        }
        match monomers_for(n_dimension).filter(|&n| n >= MIN_MONOMERS) {
            Some(from_angles) => Err(ScoringError::SequenceLengthMismatch {
                sequence: self.sequence.len(),
                from_angles,
            }),
            None => Err(ScoringError::InvalidDimension { n_dimension }),
        }
    }
}
