//! Domain layer containing the ranking logic and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, error codes)
//! - `ranking` - Pure domain services for TOPSIS ranking and matrix diagnostics

pub mod foundation;
pub mod ranking;
