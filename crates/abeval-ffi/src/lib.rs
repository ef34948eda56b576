//! C ABI for external samplers.
//!
//! A sampler loads a sequence once with [`abeval_load_sequence`], receives an
//! opaque handle and the search-space dimension, then calls [`abeval_cost`] for
//! every candidate vector. [`abeval_cost_bounds`] reports the per-coordinate
//! box and [`abeval_free_sequence`] releases the handle.
//!
//! A sequence that cannot be loaded is fatal: a diagnostic is printed and the
//! process aborts. Contract violations during evaluation return NaN.

use abeval::core::forcefield::params::AbParameters;
use abeval::core::forcefield::scoring::Evaluator;
use abeval::core::io::sequence_file::SequenceFile;
use abeval::core::models::sequence::Sequence;
use abeval::engine::error::EngineError;
use std::ffi::{CStr, c_char, c_int};
use std::path::Path;
use tracing::{debug, error};

/// A loaded sequence together with the coefficients it is scored with.
pub struct AbevalModel {
    sequence: Sequence,
    parameters: AbParameters,
    n_dimension: usize,
}

impl AbevalModel {
    fn load(path: &Path, n_monomer: usize) -> Result<Self, EngineError> {
        let sequence = SequenceFile::read_from_path(path, n_monomer)?;
        let parameters = AbParameters::default();
        let n_dimension = Evaluator::new(&sequence, &parameters)?.dimension();
        Ok(Self {
            sequence,
            parameters,
            n_dimension,
        })
    }

    fn cost(&self, angles: &[f64]) -> f64 {
        let result = Evaluator::new(&self.sequence, &self.parameters)
            .and_then(|evaluator| evaluator.evaluate(angles));
        match result {
            Ok(energy) => energy,
            Err(e) => {
                error!("abeval_cost: {}", e);
                f64::NAN
            }
        }
    }
}

fn fatal(message: &str) -> ! {
    error!("{}", message);
    eprintln!("abeval: {}", message);
    std::process::abort()
}

/// Loads the first `n_monomer` labels of the sequence file at `path`.
///
/// Writes `2 * n_monomer - 5` to `n_dimension` when it is non-null.
///
/// # Safety
///
/// `path` must be a valid NUL-terminated string. `n_dimension` must be null or
/// point to writable memory for one `c_int`. The returned handle must be
/// released with [`abeval_free_sequence`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abeval_load_sequence(
    path: *const c_char,
    n_monomer: c_int,
    n_dimension: *mut c_int,
) -> *mut AbevalModel {
    if path.is_null() {
        fatal("sequence path is null");
    }
    let path = unsafe { CStr::from_ptr(path) };
    let Ok(path) = path.to_str() else {
        fatal("sequence path is not valid UTF-8");
    };
    let Ok(n_monomer) = usize::try_from(n_monomer) else {
        fatal(&format!("invalid monomer count {}", n_monomer));
    };

    let model = match AbevalModel::load(Path::new(path), n_monomer) {
        Ok(model) => model,
        Err(e) => fatal(&e.to_string()),
    };
    debug!(
        "Loaded sequence {} ({} coordinates) from {}",
        model.sequence, model.n_dimension, path
    );

    if !n_dimension.is_null() {
        // n_dimension < 2 * n_monomer, which already fit in a c_int.
        unsafe { *n_dimension = model.n_dimension as c_int };
    }
    Box::into_raw(Box::new(model))
}

/// Total AB energy of the angle vector at `angles`.
///
/// Returns NaN for a null handle, a null vector or a length that does not match
/// the loaded sequence.
///
/// # Safety
///
/// `model` must be null or a handle from [`abeval_load_sequence`] that has not
/// been freed. `angles` must be null or point to `n_dimension` readable `f64`s.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abeval_cost(
    model: *const AbevalModel,
    angles: *const f64,
    n_dimension: c_int,
) -> f64 {
    let Some(model) = (unsafe { model.as_ref() }) else {
        error!("abeval_cost called with a null model");
        return f64::NAN;
    };
    if angles.is_null() {
        error!("abeval_cost called with a null angle vector");
        return f64::NAN;
    }
    let Ok(len) = usize::try_from(n_dimension) else {
        error!("abeval_cost called with negative dimension {}", n_dimension);
        return f64::NAN;
    };
    let angles = unsafe { std::slice::from_raw_parts(angles, len) };
    model.cost(angles)
}

/// Writes the bounds of coordinate `i` (1-based). Every coordinate is
/// unbounded. Outputs are left untouched when `i` is not positive.
///
/// # Safety
///
/// `z_min` and `z_max` must each be null or point to a writable `f64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abeval_cost_bounds(z_min: *mut f64, z_max: *mut f64, i: c_int) {
    if i <= 0 {
        return;
    }
    if !z_min.is_null() {
        unsafe { *z_min = f64::NEG_INFINITY };
    }
    if !z_max.is_null() {
        unsafe { *z_max = f64::INFINITY };
    }
}

/// Releases a handle from [`abeval_load_sequence`]. Null is ignored.
///
/// # Safety
///
/// `model` must be null or a handle that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abeval_free_sequence(model: *mut AbevalModel) {
    if !model.is_null() {
        drop(unsafe { Box::from_raw(model) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::fs;
    use std::ptr;

    fn load(content: &str, n_monomer: c_int) -> (tempfile::TempDir, *mut AbevalModel, c_int) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.txt");
        fs::write(&path, content).unwrap();
        let c_path = CString::new(path.to_str().unwrap()).unwrap();

        let mut n_dimension: c_int = 0;
        let model = unsafe { abeval_load_sequence(c_path.as_ptr(), n_monomer, &mut n_dimension) };
        (dir, model, n_dimension)
    }

    #[test]
    fn load_reports_the_search_space_dimension() {
        let (_dir, model, n_dimension) = load("1 1 0 0 1\n", 5);
        assert!(!model.is_null());
        assert_eq!(n_dimension, 5);
        unsafe { abeval_free_sequence(model) };
    }

    #[test]
    fn cost_matches_the_library_evaluator() {
        let (_dir, model, n_dimension) = load("1 1 0 0 1 0 1", 5);
        let angles = [0.3, 1.2, 2.5, 0.7, 1.9];

        let cost = unsafe { abeval_cost(model, angles.as_ptr(), n_dimension) };

        let sequence = Sequence::from_labels(vec![1, 1, 0, 0, 1]);
        let parameters = AbParameters::default();
        let expected = Evaluator::new(&sequence, &parameters)
            .unwrap()
            .evaluate(&angles)
            .unwrap();
        assert_eq!(cost, expected);
        unsafe { abeval_free_sequence(model) };
    }

    #[test]
    fn wrong_dimension_gives_nan() {
        let (_dir, model, _) = load("1 1 0 0 1", 5);
        let angles = [0.0; 7];
        let cost = unsafe { abeval_cost(model, angles.as_ptr(), 7) };
        assert!(cost.is_nan());
        let cost = unsafe { abeval_cost(model, angles.as_ptr(), -1) };
        assert!(cost.is_nan());
        unsafe { abeval_free_sequence(model) };
    }

    #[test]
    fn null_arguments_give_nan() {
        let angles = [0.0; 5];
        assert!(unsafe { abeval_cost(ptr::null(), angles.as_ptr(), 5) }.is_nan());

        let (_dir, model, _) = load("1 1 0 0 1", 5);
        assert!(unsafe { abeval_cost(model, ptr::null(), 5) }.is_nan());
        unsafe { abeval_free_sequence(model) };
    }

    #[test]
    fn bounds_are_infinite_for_positive_indices() {
        let mut lo = 0.0;
        let mut hi = 0.0;
        unsafe { abeval_cost_bounds(&mut lo, &mut hi, 3) };
        assert_eq!(lo, f64::NEG_INFINITY);
        assert_eq!(hi, f64::INFINITY);
    }

    #[test]
    fn bounds_leave_outputs_untouched_for_non_positive_indices() {
        let mut lo = 1.5;
        let mut hi = 2.5;
        unsafe { abeval_cost_bounds(&mut lo, &mut hi, 0) };
        unsafe { abeval_cost_bounds(&mut lo, &mut hi, -4) };
        assert_eq!((lo, hi), (1.5, 2.5));
    }

    #[test]
    fn freeing_null_is_a_no_op() {
        unsafe { abeval_free_sequence(ptr::null_mut()) };
    }
}
