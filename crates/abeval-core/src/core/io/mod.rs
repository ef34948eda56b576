//! Readers for the plain-text inputs of the evaluator: the monomer label file
//! ([`sequence_file`]) and files of angle vectors ([`angle_file`]).

pub mod angle_file;
pub mod sequence_file;
