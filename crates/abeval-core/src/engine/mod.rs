//! # Engine Module
//!
//! Runtime plumbing shared by the workflows: configuration with its builder
//! ([`config`]), the aggregated error type ([`error`]) and progress reporting
//! ([`progress`]) for front ends that want feedback during batch evaluation.

pub mod config;
pub mod error;
pub mod progress;
