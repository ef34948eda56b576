//! # Force Field Module
//!
//! Energy of the three-dimensional AB off-lattice model. A conformation is scored as
//! the sum of three contributions:
//!
//! - **Bending** - dot products of consecutive bond vectors
//! - **Torsion** - dot products of bond vectors one bond apart, weighted by -1/2
//! - **Contact** - a Lennard-Jones-like `4 C (d^-12 - d^-6)` over non-bonded pairs,
//!   where `C` is 1 for two hydrophobic monomers and 1/2 otherwise
//!
//! ## Key Components
//!
//! - [`params`] - Model coefficients and their TOML loader
//! - [`scoring`] - The [`scoring::Evaluator`] and the coordinate bounds
//! - [`term`] - Per-contribution energy breakdown
//!
//! ```ignore
//! use abeval::core::forcefield::{params::AbParameters, scoring::Evaluator};
//!
//! let params = AbParameters::default();
//! let evaluator = Evaluator::new(&sequence, &params)?;
//! let energy = evaluator.evaluate(&angles)?;
//! ```

pub mod params;
pub mod potentials;
pub mod scoring;
pub mod term;
