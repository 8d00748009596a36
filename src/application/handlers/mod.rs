//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

mod rank_alternatives;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult,
};
