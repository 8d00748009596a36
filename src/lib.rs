//! topsis-ranker - Multi-criteria ranking with TOPSIS
//!
//! Ranks a set of alternatives, each measured on the same numeric criteria,
//! by their relative closeness to an ideal best and an ideal worst point.
//!
//! # Layers
//!
//! - `domain` - Pure ranking engine and its value objects
//! - `ports` - Source and sink contracts
//! - `adapters` - CSV and JSON implementations of the ports
//! - `application` - The ranking command handler
//! - `config` - Environment-driven settings
//!
//! # Example
//!
//! ```
//! use topsis_ranker::domain::ranking::{DecisionMatrix, ImpactVector, TopsisRanker, WeightVector};
//!
//! let matrix = DecisionMatrix::builder()
//!     .row([540.0, 9.0, 1.3])
//!     .row([620.0, 7.0, 1.1])
//!     .row([580.0, 8.0, 1.5])
//!     .build()
//!     .unwrap();
//! let weights: WeightVector = "3,2,1".parse().unwrap();
//! let impacts: ImpactVector = "-,+,-".parse().unwrap();
//!
//! let results = TopsisRanker::rank(&matrix, &weights, &impacts).unwrap();
//! let ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
//! assert_eq!(ranks, vec![1, 3, 2]);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
