use std::fmt;

/// File label marking a hydrophobic monomer. Every other label is polar.
pub const HYDROPHOBIC_LABEL: i64 = 1;

/// The smallest chain with at least one free angle.
pub const MIN_MONOMERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Monomer {
    Hydrophobic, // A
    Polar,       // B
}

impl Monomer {
    pub fn from_label(label: i64) -> Self {
        if label == HYDROPHOBIC_LABEL {
            Monomer::Hydrophobic
        } else {
            Monomer::Polar
        }
    }

    #[inline]
    pub fn is_hydrophobic(&self) -> bool {
        matches!(self, Monomer::Hydrophobic)
    }
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Monomer::Hydrophobic => write!(f, "A"),
            Monomer::Polar => write!(f, "B"),
        }
    }
}

/// An immutable hydrophobic/polar chain.
///
/// Monomers are addressed 1-based through [`Sequence::monomer`] so that monomer 1
/// is the first residue of the chain. The raw integer labels read from the
/// sequence file are kept alongside the classified monomers for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    labels: Vec<i64>,
    monomers: Vec<Monomer>,
}

impl Sequence {
    pub fn from_labels(labels: Vec<i64>) -> Self {
        let monomers = labels.iter().copied().map(Monomer::from_label).collect();
        Self { labels, monomers }
    }

    pub fn from_monomers(monomers: Vec<Monomer>) -> Self {
        let labels = monomers
            .iter()
            .map(|m| if m.is_hydrophobic() { HYDROPHOBIC_LABEL } else { 0 })
            .collect();
        Self { labels, monomers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// Number of free angles for a chain of this length, `2 * N - 5`.
    ///
    /// Returns `None` for chains shorter than [`MIN_MONOMERS`].
    pub fn dimension(&self) -> Option<usize> {
        dimension_for(self.len())
    }

    /// Returns the monomer at the 1-based position `index`.
    pub fn monomer(&self, index: usize) -> Option<Monomer> {
        index
            .checked_sub(1)
            .and_then(|i| self.monomers.get(i))
            .copied()
    }

    pub fn label(&self, index: usize) -> Option<i64> {
        index
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .copied()
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    pub fn hydrophobic_count(&self) -> usize {
        self.monomers.iter().filter(|m| m.is_hydrophobic()).count()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.monomers {
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

/// Angle count for `n_monomer` monomers. `None` below three monomers or when
/// `2 * n_monomer` does not fit in `usize`.
pub fn dimension_for(n_monomer: usize) -> Option<usize> {
    if n_monomer < MIN_MONOMERS {
        return None;
    }
    n_monomer.checked_mul(2).map(|twice| twice - 5)
}

/// Monomer count implied by an angle vector of length `n_dimension`.
///
/// The length must be odd; anything else does not correspond to a chain.
pub fn monomers_for(n_dimension: usize) -> Option<usize> {
    if n_dimension % 2 == 0 {
        return None;
    }
    Some(n_dimension / 2 + 3)
}
