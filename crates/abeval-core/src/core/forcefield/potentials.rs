use nalgebra::Vector3;

/// Lennard-Jones-like contact potential of the AB model, `4 C (d^-12 - d^-6)`.
///
/// Evaluated as `4 C d^-6 (d^-6 - 1)` so that coincident monomers (`d = 0`)
/// give `+inf` instead of `inf - inf`. There is no short-range clamp.
#[inline]
pub fn ab_lennard_jones(dist: f64, contact_strength: f64) -> f64 {
    let inv6 = dist.powi(-6);
    4.0 * contact_strength * inv6 * (inv6 - 1.0)
}

/// Bending contribution of two consecutive bond vectors.
#[inline]
pub fn bond_angle(b1: &Vector3<f64>, b2: &Vector3<f64>, coefficient: f64) -> f64 {
    coefficient * b1.dot(b2)
}

/// Torsional contribution of two bond vectors separated by one bond.
#[inline]
pub fn torsion(b1: &Vector3<f64>, b3: &Vector3<f64>, coefficient: f64) -> f64 {
    coefficient * b1.dot(b3)
}
