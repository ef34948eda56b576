//! # Core Models Module
//!
//! Data structures describing an AB chain: the hydrophobic/polar [`sequence`] that
//! is loaded once and shared read-only, and the per-evaluation [`conformation`]
//! derived from an angle vector.
//!
//! ```ignore
//! use abeval::core::models::{conformation::Conformation, sequence::Sequence};
//!
//! let sequence = Sequence::from_labels(vec![1, 1, 0, 0, 1]);
//! let conformation = Conformation::from_angles(&[0.0; 5], 1.0)?;
//! assert_eq!(conformation.monomer_count(), sequence.len());
//! ```

pub mod conformation;
pub mod sequence;
