use super::sequence::{MIN_MONOMERS, monomers_for};
use crate::core::utils::geometry::{
    integrate_steps, planar_to_cartesian, spherical_to_cartesian, wrap_floored,
};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;
use thiserror::Error;

const AZIMUTHAL_PERIOD: f64 = 2.0 * PI;
// Polar angles wrap with period pi rather than reflecting into [0, pi].
const POLAR_PERIOD: f64 = PI;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConformationError {
    #[error("Angle vector of length {0} does not describe a chain (expected 2 * N - 5 for N >= 3)")]
    InvalidDimension(usize),
}

/// A chain geometry derived from an angle vector.
///
/// The angle vector holds the `N - 2` azimuthal angles theta(3..=N) followed by
/// the `N - 3` polar angles phi(4..=N). Both are wrapped on construction. The
/// gauge is fixed by placing monomer 1 at the origin, bond 1 along the x-axis and
/// bond 2 in the xy-plane, so no global rotation or translation is left free.
#[derive(Debug, Clone, PartialEq)]
pub struct Conformation {
    azimuthal: Vec<f64>,
    polar: Vec<f64>,
    bonds: Vec<Vector3<f64>>,
    positions: Vec<Point3<f64>>,
}

impl Conformation {
    pub fn from_angles(angles: &[f64], bond_length: f64) -> Result<Self, ConformationError> {
        let n_monomer = monomers_for(angles.len())
            .filter(|&n| n >= MIN_MONOMERS)
            .ok_or(ConformationError::InvalidDimension(angles.len()))?;

        let (raw_azimuthal, raw_polar) = angles.split_at(n_monomer - 2);

        let azimuthal: Vec<f64> = raw_azimuthal
            .iter()
            .map(|&theta| wrap_floored(theta, AZIMUTHAL_PERIOD))
            .collect();
        let polar: Vec<f64> = raw_polar
            .iter()
            .map(|&phi| wrap_floored(phi, POLAR_PERIOD))
            .collect();

        let mut bonds = Vec::with_capacity(n_monomer - 1);
        bonds.push(Vector3::new(bond_length, 0.0, 0.0));
        bonds.push(planar_to_cartesian(bond_length, azimuthal[0]));
        bonds.extend(
            azimuthal[1..]
                .iter()
                .zip(&polar)
                .map(|(&theta, &phi)| spherical_to_cartesian(bond_length, theta, phi)),
        );

        let positions = integrate_steps(&bonds);

        Ok(Self {
            azimuthal,
            polar,
            bonds,
            positions,
        })
    }

    #[inline]
    pub fn monomer_count(&self) -> usize {
        self.positions.len()
    }

    /// Wrapped azimuthal angles, theta(3) first.
    pub fn azimuthal_angles(&self) -> &[f64] {
        &self.azimuthal
    }

    /// Wrapped polar angles, phi(4) first.
    pub fn polar_angles(&self) -> &[f64] {
        &self.polar
    }

    /// Bond vectors; element `k` joins monomer `k + 1` to monomer `k + 2`.
    pub fn bonds(&self) -> &[Vector3<f64>] {
        &self.bonds
    }

    /// Monomer positions; element `k` is monomer `k + 1`.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Position of the 1-based monomer `index`.
    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        index.checked_sub(1).and_then(|i| self.positions.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-12;

    fn points_approx_equal(a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a - b).norm() < TOLERANCE
    }

    #[test]
    fn from_angles_rejects_even_and_empty_vectors() {
        assert_eq!(
            Conformation::from_angles(&[], 1.0),
            Err(ConformationError::InvalidDimension(0))
        );
        assert_eq!(
            Conformation::from_angles(&[0.0, 0.0], 1.0),
            Err(ConformationError::InvalidDimension(2))
        );
    }

    #[test]
    fn three_monomer_chain_has_one_planar_bend() {
        let conf = Conformation::from_angles(&[FRAC_PI_2], 1.0).unwrap();
        assert_eq!(conf.monomer_count(), 3);
        assert_eq!(conf.bonds().len(), 2);
        assert!(conf.polar_angles().is_empty());
        assert!(points_approx_equal(
            conf.position(3).unwrap(),
            &Point3::new(1.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn gauge_is_fixed_for_the_first_two_bonds() {
        let conf = Conformation::from_angles(&[1.1, 2.2, 3.3, 0.4, 0.5], 1.0).unwrap();
        assert_eq!(conf.positions()[0], Point3::origin());
        assert_eq!(conf.bonds()[0], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(conf.bonds()[1].z, 0.0);
    }

    #[test]
    fn all_zero_angles_build_an_l_shaped_chain() {
        let conf = Conformation::from_angles(&[0.0; 5], 1.0).unwrap();
        let expected = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 2.0),
        ];
        assert_eq!(conf.positions(), &expected);
    }

    #[test]
    fn angles_are_split_into_azimuthal_and_polar_parts() {
        let conf = Conformation::from_angles(&[0.1, 0.2, 0.3, 0.4, 0.5], 1.0).unwrap();
        assert_eq!(conf.azimuthal_angles(), &[0.1, 0.2, 0.3]);
        assert_eq!(conf.polar_angles(), &[0.4, 0.5]);
    }

    #[test]
    fn angles_are_wrapped_on_construction() {
        let conf = Conformation::from_angles(&[-0.5, 7.0, 1.0, 4.0, -1.0], 1.0).unwrap();
        for &theta in conf.azimuthal_angles() {
            assert!((0.0..2.0 * PI).contains(&theta));
        }
        for &phi in conf.polar_angles() {
            assert!((0.0..PI).contains(&phi));
        }
        assert!((conf.polar_angles()[0] - (4.0 - PI)).abs() < TOLERANCE);
    }

    #[test]
    fn bonds_have_the_requested_length() {
        let conf = Conformation::from_angles(&[0.3, 1.4, 2.5, 0.6, 2.7], 2.0).unwrap();
        for bond in conf.bonds() {
            assert!((bond.norm() - 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn consecutive_positions_differ_by_their_bond() {
        let conf = Conformation::from_angles(&[0.3, 1.4, 2.5, 0.6, 2.7], 1.0).unwrap();
        for (k, bond) in conf.bonds().iter().enumerate() {
            let step = conf.positions()[k + 1] - conf.positions()[k];
            assert!((step - bond).norm() < TOLERANCE);
        }
    }
}
