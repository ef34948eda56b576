//! # Core Module
//!
//! Stateless building blocks of the AB off-lattice evaluator.
//!
//! - **Chain models** ([`models`]) - The hydrophobic/polar sequence and the conformation
//!   derived from an angle vector
//! - **Energy** ([`forcefield`]) - Bending, torsion and contact terms, model coefficients
//!   and the evaluator entry point
//! - **File I/O** ([`io`]) - Sequence label files and angle vector files
//! - **Geometry** ([`utils`]) - Angle wrapping and spherical-to-Cartesian conversion

pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
