//! # Workflows Module
//!
//! End-to-end procedures built on the [`core`](crate::core) and
//! [`engine`](crate::engine) layers.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Loads the sequence and model parameters
//!   named by an [`EvaluationConfig`](crate::engine::config::EvaluationConfig) and scores
//!   a batch of angle vectors in order, reporting progress as it goes.

pub mod evaluate;
