/// Energy of one conformation split by contribution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    /// Bending energy, summed over consecutive bond pairs.
    pub bend: f64,
    /// Torsion energy, summed over bonds two apart.
    pub torsion: f64,
    /// Species-dependent contact energy over non-bonded pairs. `+inf` when two
    /// monomers coincide.
    pub lennard_jones: f64,
}

impl EnergyTerm {
    pub fn new(bend: f64, torsion: f64, lennard_jones: f64) -> Self {
        Self {
            bend,
            torsion,
            lennard_jones,
        }
    }

    /// Sum of the three contributions, added in the order bend, torsion, contact.
    #[inline]
    pub fn total(&self) -> f64 {
        self.bend + self.torsion + self.lennard_jones
    }
}
