//! # abeval
//!
//! Energy evaluation for the three-dimensional AB off-lattice protein model, in which
//! a chain of hydrophobic (A) and polar (B) monomers joined by unit bonds is described
//! by its azimuthal and polar bond angles.
//!
//! The library keeps the same three layers throughout:
//!
//! - **[`core`]: The Foundation.** Stateless models (`Sequence`, `Conformation`), the
//!   file readers, geometry, and the energy function itself (`forcefield`).
//!
//! - **[`engine`]: Runtime plumbing.** Configuration, the aggregated error type and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Batch evaluation of angle vectors against a
//!   sequence loaded from disk.
//!
//! ```ignore
//! use abeval::core::forcefield::{params::AbParameters, scoring::Evaluator};
//! use abeval::core::io::sequence_file::SequenceFile;
//!
//! let sequence = SequenceFile::read_from_path("seq.txt", 13)?;
//! let params = AbParameters::default();
//! let evaluator = Evaluator::new(&sequence, &params)?;
//! let energy = evaluator.evaluate(&vec![0.0; evaluator.dimension()])?;
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
