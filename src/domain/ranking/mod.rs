//! Ranking Module - Pure domain services for TOPSIS ranking.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria table
//! - `WeightVector` / `ImpactVector` - Per-criterion weights and directions
//! - `TopsisRanker` - Closeness scoring and rank assignment
//! - `CriteriaAnalyzer` - Dominance and non-discriminating criteria
//! - `RankingReport` - Labeled output handed to result sinks
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Inputs are validated when the value
//! objects are built and again for mutual alignment before any arithmetic.
//! Nothing here performs I/O, so no ports are involved.

mod criteria;
mod criteria_analyzer;
mod decision_matrix;
mod errors;
mod rank_result;
mod report;
mod topsis;

pub use criteria::{ImpactVector, WeightVector};
pub use criteria_analyzer::{CriteriaAnalyzer, DominatedAlternative, NonDiscriminatingCriterion};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder, LabeledMatrix};
pub use errors::{RankingError, ShapeViolation, WeightViolation};
pub use rank_result::{RankResult, RankingExt};
pub use report::{RankingReport, ReportEntry};
pub use topsis::{IdealDistances, TopsisEvaluation, TopsisRanker, COINCIDENT_IDEALS_SCORE};
