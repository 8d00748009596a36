//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error codes
//! that form the vocabulary of the ranking domain.

mod errors;
mod ids;
mod impact;
mod timestamp;

pub use errors::ErrorCode;
pub use ids::RankingId;
pub use impact::Impact;
pub use timestamp::Timestamp;
