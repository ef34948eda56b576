use nalgebra::{Point3, Vector3};

/// Floored modulo: `angle - floor(angle / period) * period`.
///
/// The result lies in `[0, period]`. It is below `period` in exact arithmetic,
/// but a tiny negative `angle` rounds up to exactly `period`. Both ends give the
/// same bond direction.
#[inline]
pub fn wrap_floored(angle: f64, period: f64) -> f64 {
    angle - (angle / period).floor() * period
}

/// Cartesian vector for spherical coordinates `(radius, theta, phi)`, where `theta`
/// is the azimuth in the xy-plane from the x-axis and `phi` the polar angle
/// from the positive z-axis.
#[inline]
pub fn spherical_to_cartesian(radius: f64, theta: f64, phi: f64) -> Vector3<f64> {
    let sin_phi = phi.sin();
    Vector3::new(
        radius * theta.cos() * sin_phi,
        radius * theta.sin() * sin_phi,
        radius * phi.cos(),
    )
}

/// Cartesian vector in the xy-plane, i.e. with the polar angle fixed at pi/2.
#[inline]
pub fn planar_to_cartesian(radius: f64, theta: f64) -> Vector3<f64> {
    Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
}

/// Chains `steps` head to tail starting from the origin.
pub fn integrate_steps(steps: &[Vector3<f64>]) -> Vec<Point3<f64>> {
    let mut positions = Vec::with_capacity(steps.len() + 1);
    let mut current = Point3::origin();
    positions.push(current);
    for step in steps {
        current += step;
        positions.push(current);
    }
    positions
}
