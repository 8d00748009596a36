//! Rank Result - Score and rank of one alternative.

use serde::{Deserialize, Serialize};

/// Outcome for a single alternative.
///
/// `index` is the alternative's position in the input matrix; result slices
/// returned by the ranker are ordered by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub index: usize,
    /// Closeness to the ideal solution, in [0, 1]. Higher is better.
    pub score: f64,
    /// 1 is best. Ranks over one run form a permutation of 1..=n.
    pub rank: usize,
}

/// Convenience queries over a ranker's output.
pub trait RankingExt {
    /// The alternative ranked first, if any.
    fn best(&self) -> Option<&RankResult>;

    /// Results sorted by rank, best first.
    fn in_rank_order(&self) -> Vec<RankResult>;
}

impl RankingExt for [RankResult] {
    fn best(&self) -> Option<&RankResult> {
        self.iter().find(|r| r.rank == 1)
    }

    fn in_rank_order(&self) -> Vec<RankResult> {
        let mut ordered = self.to_vec();
        ordered.sort_by_key(|r| r.rank);
        ordered
    }
}
