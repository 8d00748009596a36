//! Criteria Analyzer - Dominance detection and non-discriminating criteria.

use serde::{Deserialize, Serialize};

use super::criteria::ImpactVector;
use super::decision_matrix::DecisionMatrix;

/// An alternative that is dominated by another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatedAlternative {
    pub alternative: usize,
    pub dominated_by: usize,
    /// Criteria on which the dominator is strictly better.
    pub better_on: Vec<usize>,
}

/// A criterion on which every alternative has the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonDiscriminatingCriterion {
    pub criterion: usize,
    pub uniform_value: f64,
}

/// Pre-ranking analysis of a decision matrix.
pub struct CriteriaAnalyzer;

impl CriteriaAnalyzer {
    /// Finds all dominated alternatives.
    ///
    /// Alternative A dominates alternative B if, according to each
    /// criterion's impact:
    /// 1. A is at least as good as B on ALL criteria
    /// 2. A is strictly better than B on AT LEAST ONE criterion
    ///
    /// # Edge Cases
    /// - Single alternative: Returns empty Vec
    /// - Identical rows: Neither dominates the other
    /// - Impacts not covering every criterion: only covered criteria are compared
    pub fn find_dominated(
        matrix: &DecisionMatrix,
        impacts: &ImpactVector,
    ) -> Vec<DominatedAlternative> {
        let mut dominated = Vec::new();
        let n = matrix.alternative_count();

        if n < 2 {
            return dominated;
        }

        for candidate in 0..n {
            for dominator in 0..n {
                if candidate == dominator {
                    continue;
                }

                if let Some(better_on) = Self::dominance(matrix, impacts, dominator, candidate) {
                    dominated.push(DominatedAlternative {
                        alternative: candidate,
                        dominated_by: dominator,
                        better_on,
                    });
                    break; // one dominator per candidate is enough
                }
            }
        }

        dominated
    }

    /// Returns the criteria where `a` beats `b` if `a` dominates `b`.
    fn dominance(
        matrix: &DecisionMatrix,
        impacts: &ImpactVector,
        a: usize,
        b: usize,
    ) -> Option<Vec<usize>> {
        let (row_a, row_b) = (matrix.row(a)?, matrix.row(b)?);
        let mut better_on = Vec::new();

        for (criterion, impact) in impacts.as_slice().iter().enumerate() {
            let (value_a, value_b) = (*row_a.get(criterion)?, *row_b.get(criterion)?);

            if impact.prefers(value_b, value_a) {
                return None;
            }
            if impact.prefers(value_a, value_b) {
                better_on.push(criterion);
            }
        }

        if better_on.is_empty() {
            None
        } else {
            Some(better_on)
        }
    }

    /// Finds criteria that cannot distinguish between alternatives.
    ///
    /// Such a criterion has best = worst ideal value and so contributes
    /// nothing to any distance.
    ///
    /// # Edge Cases
    /// - Single alternative: Returns empty Vec (no comparison possible)
    pub fn find_non_discriminating(matrix: &DecisionMatrix) -> Vec<NonDiscriminatingCriterion> {
        if matrix.alternative_count() < 2 {
            return Vec::new();
        }

        (0..matrix.criterion_count())
            .filter_map(|criterion| {
                let mut values = matrix.column(criterion);
                let first = values.next()?;
                values
                    .all(|v| v == first)
                    .then_some(NonDiscriminatingCriterion {
                        criterion,
                        uniform_value: first,
                    })
            })
            .collect()
    }

    /// Counts criteria of each impact direction as (benefit, cost).
    pub fn impact_balance(impacts: &ImpactVector) -> (usize, usize) {
        let benefit = impacts.as_slice().iter().filter(|i| i.is_benefit()).count();
        (benefit, impacts.len() - benefit)
    }
}
