//! Ranking Report - Everything a result sink needs to render one run.

use serde::{Deserialize, Serialize};

use super::criteria::ImpactVector;
use super::criteria_analyzer::{DominatedAlternative, NonDiscriminatingCriterion};
use super::decision_matrix::LabeledMatrix;
use super::rank_result::RankResult;
use crate::domain::foundation::{RankingId, Timestamp};

/// One output row: the source row followed by its score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: usize,
}

/// A completed ranking run, in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub ranking_id: RankingId,
    pub computed_at: Timestamp,
    pub label_header: String,
    pub criterion_headers: Vec<String>,
    pub impacts: ImpactVector,
    /// Weights after rescaling to sum to 1.
    pub weights: Vec<f64>,
    pub entries: Vec<ReportEntry>,
    #[serde(default)]
    pub dominated: Vec<DominatedAlternative>,
    #[serde(default)]
    pub non_discriminating: Vec<NonDiscriminatingCriterion>,
}

impl RankingReport {
    /// Joins ranker output with the labels and source text it was computed from.
    ///
    /// `results` must be in input order, as returned by the ranker.
    pub fn new(
        ranking_id: RankingId,
        source: &LabeledMatrix,
        impacts: ImpactVector,
        weights: Vec<f64>,
        results: &[RankResult],
    ) -> Self {
        let entries = source
            .labels()
            .iter()
            .zip(source.cells())
            .zip(results)
            .map(|((label, cells), result)| ReportEntry {
                label: label.clone(),
                cells: cells.clone(),
                score: result.score,
                rank: result.rank,
            })
            .collect();

        Self {
            ranking_id,
            computed_at: Timestamp::now(),
            label_header: source.label_header().to_string(),
            criterion_headers: source.criterion_headers().to_vec(),
            impacts,
            weights,
            entries,
            dominated: Vec::new(),
            non_discriminating: Vec::new(),
        }
    }

    /// Attaches pre-ranking diagnostics.
    pub fn with_diagnostics(
        mut self,
        dominated: Vec<DominatedAlternative>,
        non_discriminating: Vec<NonDiscriminatingCriterion>,
    ) -> Self {
        self.dominated = dominated;
        self.non_discriminating = non_discriminating;
        self
    }

    /// The top-ranked entry.
    pub fn winner(&self) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.rank == 1)
    }

    pub fn alternative_count(&self) -> usize {
        self.entries.len()
    }
}
