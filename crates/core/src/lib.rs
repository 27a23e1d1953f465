//! # PawPlan Core
//!
//! Pure computation for the PawPlan dog-training service. Nothing in this crate
//! performs I/O or holds mutable shared state.
//!
//! - [`potty`]: builds a one-day elimination schedule from a dog's age and
//!   its wake, meal and bed times
//! - [`grading`]: maps cumulative scores to grades and behaviors to expected phases
//! - [`catalog`]: the static behavior catalog and its per-grade expectation tables
//! - [`models`]: the data types shared by the engines and the API

/// Static behavior catalog
pub mod catalog;
/// Error types shared across the workspace
pub mod errors;
/// Grade lookup and progression
pub mod grading;
/// Data model
pub mod models;
/// Potty schedule generation
pub mod potty;
