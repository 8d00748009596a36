//! TOPSIS Ranker - Closeness-to-ideal scoring and ranking.
//!
//! # Algorithm
//!
//! 1. Weights are rescaled to sum to 1.
//! 2. Each column is divided by its Euclidean norm. A column of zeros stays zero.
//! 3. Normalized values are multiplied by their column weight.
//! 4. Per column, the ideal best and worst values are taken according to the
//!    column's impact (max/min for Benefit, min/max for Cost).
//! 5. Each row's Euclidean distance to both ideal points is measured.
//! 6. Score = dWorst / (dBest + dWorst); 0.5 when both distances are zero.
//! 7. Rank 1 goes to the highest score. Exactly equal scores are ordered by
//!    input position, earlier rows first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::criteria::{ImpactVector, WeightVector};
use super::decision_matrix::DecisionMatrix;
use super::errors::{RankingError, ShapeViolation};
use super::rank_result::RankResult;
use crate::domain::foundation::Impact;

/// Score assigned when an alternative coincides with both ideal points.
pub const COINCIDENT_IDEALS_SCORE: f64 = 0.5;

/// Distances of one alternative to the two reference points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealDistances {
    pub to_best: f64,
    pub to_worst: f64,
}

impl IdealDistances {
    /// Relative closeness to the ideal best point.
    pub fn closeness(&self) -> f64 {
        let total = self.to_best + self.to_worst;
        if total == 0.0 {
            COINCIDENT_IDEALS_SCORE
        } else {
            self.to_worst / total
        }
    }
}

/// Full output of a TOPSIS run, including intermediate artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisEvaluation {
    /// Weights after rescaling to sum to 1.
    pub weights: Vec<f64>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    /// Per alternative, in input order.
    pub distances: Vec<IdealDistances>,
    /// Per alternative, in input order.
    pub results: Vec<RankResult>,
}

/// TOPSIS ranking functions.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Scores and ranks every alternative.
    ///
    /// `results[i]` describes row `i` of `matrix`.
    ///
    /// # Errors
    /// `ShapeMismatch` if weights or impacts do not cover exactly the
    /// matrix's criteria. Nothing is computed in that case.
    pub fn rank(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Vec<RankResult>, RankingError> {
        Ok(Self::evaluate(matrix, weights, impacts)?.results)
    }

    /// Same as [`TopsisRanker::rank`] but also returns the ideal points and distances.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisEvaluation, RankingError> {
        Self::check_alignment(matrix, weights, impacts)?;

        let weights = weights.normalized();
        let weighted = Self::weighted_normalized(matrix, &weights);
        let (ideal_best, ideal_worst) = Self::ideal_points(&weighted, impacts.as_slice());

        let distances: Vec<IdealDistances> = weighted
            .iter()
            .map(|row| IdealDistances {
                to_best: euclidean_distance(row, &ideal_best),
                to_worst: euclidean_distance(row, &ideal_worst),
            })
            .collect();

        let scores: Vec<f64> = distances.iter().map(IdealDistances::closeness).collect();
        let results = Self::assign_ranks(&scores);

        Ok(TopsisEvaluation {
            weights,
            ideal_best,
            ideal_worst,
            distances,
            results,
        })
    }

    fn check_alignment(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<(), RankingError> {
        let criteria = matrix.criterion_count();

        if weights.len() != criteria {
            return Err(RankingError::shape(ShapeViolation::WeightCount {
                expected: criteria,
                actual: weights.len(),
            }));
        }
        if impacts.len() != criteria {
            return Err(RankingError::shape(ShapeViolation::ImpactCount {
                expected: criteria,
                actual: impacts.len(),
            }));
        }
        Ok(())
    }

    /// Column-normalizes the matrix and applies the (already normalized) weights.
    fn weighted_normalized(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<Vec<f64>> {
        let scales: Vec<ColumnScale> = (0..matrix.criterion_count())
            .map(|column| ColumnScale::of(matrix.column(column)))
            .collect();

        matrix
            .rows()
            .map(|row| {
                row.iter()
                    .zip(&scales)
                    .zip(weights)
                    .map(|((&value, scale), &weight)| scale.normalize(value) * weight)
                    .collect()
            })
            .collect()
    }

    /// Returns (ideal best, ideal worst), one value per criterion.
    fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(column, impact)| {
                let (min, max) = weighted.iter().map(|row| row[column]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(min, max), v| (min.min(v), max.max(v)),
                );
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip()
    }

    /// Assigns ranks by descending score, ties broken by ascending input position.
    fn assign_ranks(scores: &[f64]) -> Vec<RankResult> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| Self::rank_order(scores[a], a, scores[b], b));

        let mut ranks = vec![0; scores.len()];
        for (position, &index) in order.iter().enumerate() {
            ranks[index] = position + 1;
        }

        scores
            .iter()
            .zip(ranks)
            .enumerate()
            .map(|(index, (&score, rank))| RankResult { index, score, rank })
            .collect()
    }

    fn rank_order(score_a: f64, index_a: usize, score_b: f64, index_b: usize) -> Ordering {
        score_b
            .total_cmp(&score_a)
            .then_with(|| index_a.cmp(&index_b))
    }
}

/// Euclidean norm of one column, kept as (largest magnitude, scaled root) so
/// that squaring large values cannot overflow.
#[derive(Debug, Clone, Copy)]
struct ColumnScale {
    largest: f64,
    scaled_root: f64,
}

impl ColumnScale {
    fn of(values: impl Iterator<Item = f64> + Clone) -> Self {
        let largest = values.clone().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if largest == 0.0 {
            return Self {
                largest,
                scaled_root: 0.0,
            };
        }
        let sum_of_squares: f64 = values.map(|v| (v / largest).powi(2)).sum();
        Self {
            largest,
            scaled_root: sum_of_squares.sqrt(),
        }
    }

    /// `value / norm`, or 0 for an all-zero column.
    fn normalize(&self, value: f64) -> f64 {
        if self.largest == 0.0 {
            0.0
        } else {
            (value / self.largest) / self.scaled_root
        }
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::RankingExt;

    const EPS: f64 = 1e-9;

    fn phones() -> DecisionMatrix {
        DecisionMatrix::builder()
            .row([540.0, 9.0, 1.3])
            .row([620.0, 7.0, 1.1])
            .row([580.0, 8.0, 1.5])
            .build()
            .unwrap()
    }

    fn weights(values: &[f64]) -> WeightVector {
        WeightVector::new(values.to_vec()).unwrap()
    }

    fn impacts(symbols: &str) -> ImpactVector {
        symbols.parse().unwrap()
    }

    fn ranks(results: &[RankResult]) -> Vec<usize> {
        results.iter().map(|r| r.rank).collect()
    }

    // Scoring Tests

    #[test]
    fn phone_scenario_scores_and_ranks() {
        let results = TopsisRanker::rank(&phones(), &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!((results[0].score - 0.813_169_283_476_416_8).abs() < EPS);
        assert!((results[1].score - 0.320_718_235_503_175_6).abs() < EPS);
        assert!((results[2].score - 0.420_984_855_708_423_6).abs() < EPS);
        assert_eq!(ranks(&results), vec![1, 3, 2]);
    }

    #[test]
    fn results_preserve_input_order() {
        let results = TopsisRanker::rank(&phones(), &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
            .unwrap();
        let indices: Vec<_> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(results.best().map(|r| r.index), Some(0));
    }

    #[test]
    fn improving_one_phone_does_not_worsen_its_rank() {
        let improved = DecisionMatrix::builder()
            .row([540.0, 9.0, 1.3])
            .row([600.0, 8.0, 1.1])
            .row([580.0, 8.0, 1.5])
            .build()
            .unwrap();

        let before = TopsisRanker::rank(&phones(), &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
            .unwrap();
        let after = TopsisRanker::rank(&improved, &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
            .unwrap();

        assert!(after[1].rank <= before[1].rank);
        assert!(after[1].score >= before[1].score);
        assert_eq!(ranks(&after), vec![1, 2, 3]);
    }

    #[test]
    fn weight_scale_does_not_change_ranking() {
        let small = TopsisRanker::rank(&phones(), &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
            .unwrap();
        let large = TopsisRanker::rank(&phones(), &weights(&[30.0, 20.0, 10.0]), &impacts("-,+,-"))
            .unwrap();

        assert_eq!(ranks(&small), ranks(&large));
        for (a, b) in small.iter().zip(&large) {
            assert!((a.score - b.score).abs() < EPS);
        }
    }

    #[test]
    fn benefit_and_cost_are_mirror_images() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        let benefit = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,+")).unwrap();
        let cost = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("-,-")).unwrap();

        assert_eq!(ranks(&benefit), vec![2, 1]);
        assert_eq!(ranks(&cost), vec![1, 2]);
        assert!((benefit[1].score - 1.0).abs() < EPS);
        assert!(benefit[0].score.abs() < EPS);
    }

    #[test]
    fn zero_weight_criterion_is_ignored() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 100.0], vec![2.0, 1.0]]).unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 0.0]), &impacts("+,+")).unwrap();
        assert_eq!(ranks(&results), vec![2, 1]);
    }

    // Edge Cases

    #[test]
    fn single_alternative_scores_one_half() {
        let matrix = DecisionMatrix::from_rows(vec![vec![10.0, 3.0]]).unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,-")).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, COINCIDENT_IDEALS_SCORE);
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn identical_rows_tie_and_keep_input_order() {
        let matrix = DecisionMatrix::from_rows(vec![
            vec![4.0, 2.0],
            vec![4.0, 2.0],
            vec![4.0, 2.0],
        ])
        .unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 2.0]), &impacts("+,-")).unwrap();

        for result in &results {
            assert_eq!(result.score, COINCIDENT_IDEALS_SCORE);
        }
        assert_eq!(ranks(&results), vec![1, 2, 3]);
    }

    #[test]
    fn exact_ties_rank_earlier_rows_first() {
        // Rows 0 and 2 are identical and therefore score exactly the same.
        let matrix = DecisionMatrix::from_rows(vec![
            vec![2.0, 5.0],
            vec![9.0, 1.0],
            vec![2.0, 5.0],
        ])
        .unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,+")).unwrap();

        assert_eq!(results[0].score, results[2].score);
        assert!(results[0].rank < results[2].rank);
        assert_eq!(results[2].rank, results[0].rank + 1);
    }

    #[test]
    fn all_zero_column_contributes_nothing() {
        let matrix = DecisionMatrix::from_rows(vec![
            vec![0.0, 1.0],
            vec![0.0, 3.0],
            vec![0.0, 2.0],
        ])
        .unwrap();
        let evaluation =
            TopsisRanker::evaluate(&matrix, &weights(&[5.0, 1.0]), &impacts("+,+")).unwrap();

        assert_eq!(evaluation.ideal_best[0], 0.0);
        assert_eq!(evaluation.ideal_worst[0], 0.0);
        assert_eq!(ranks(&evaluation.results), vec![3, 1, 2]);
        for result in &evaluation.results {
            assert!(result.score.is_finite());
        }
    }

    #[test]
    fn constant_column_does_not_separate_equal_rows() {
        let matrix = DecisionMatrix::from_rows(vec![
            vec![5.0, 1.0],
            vec![5.0, 3.0],
            vec![5.0, 2.0],
        ])
        .unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,+")).unwrap();

        assert!(results[0].score.abs() < EPS);
        assert!((results[1].score - 1.0).abs() < EPS);
        assert!((results[2].score - 0.5).abs() < EPS);
        assert_eq!(ranks(&results), vec![3, 1, 2]);
    }

    #[test]
    fn huge_finite_values_do_not_overflow() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1e300, 2.0], vec![5e299, 1.0]]).unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,+")).unwrap();

        assert!((results[0].score - 1.0).abs() < EPS);
        assert!(results[1].score.abs() < EPS);
        assert_eq!(ranks(&results), vec![1, 2]);
    }

    #[test]
    fn negative_values_are_accepted() {
        let matrix = DecisionMatrix::from_rows(vec![vec![-3.0, 1.0], vec![2.0, 1.0]]).unwrap();
        let results = TopsisRanker::rank(&matrix, &weights(&[1.0, 1.0]), &impacts("+,+")).unwrap();

        assert_eq!(ranks(&results), vec![2, 1]);
        for result in &results {
            assert!((0.0..=1.0).contains(&result.score));
        }
    }

    // Evaluation Artifacts

    #[test]
    fn evaluate_exposes_ideal_points_and_distances() {
        let evaluation =
            TopsisRanker::evaluate(&phones(), &weights(&[3.0, 2.0, 1.0]), &impacts("-,+,-"))
                .unwrap();

        assert!((evaluation.weights.iter().sum::<f64>() - 1.0).abs() < EPS);
        assert!((evaluation.ideal_best[0] - 0.268_341_409_054_794_4).abs() < EPS);
        assert!((evaluation.ideal_worst[0] - 0.308_095_691_877_726_9).abs() < EPS);
        assert!((evaluation.ideal_best[1] - 0.215_387_447_585_321_5).abs() < EPS);
        assert!((evaluation.distances[0].to_best - 0.014_688_421_641_307_722).abs() < EPS);
        assert!((evaluation.distances[0].to_worst - 0.063_930_458_137_241_1).abs() < EPS);
    }

    #[test]
    fn closeness_handles_coincident_ideals() {
        let coincident = IdealDistances {
            to_best: 0.0,
            to_worst: 0.0,
        };
        assert_eq!(coincident.closeness(), COINCIDENT_IDEALS_SCORE);

        let at_best = IdealDistances {
            to_best: 0.0,
            to_worst: 2.0,
        };
        assert_eq!(at_best.closeness(), 1.0);
    }

    // Validation Tests

    #[test]
    fn weight_count_mismatch_is_rejected() {
        let err = TopsisRanker::rank(&phones(), &weights(&[1.0, 2.0]), &impacts("-,+,-"))
            .unwrap_err();
        assert_eq!(
            err,
            RankingError::shape(ShapeViolation::WeightCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn impact_count_mismatch_is_rejected() {
        let err = TopsisRanker::rank(&phones(), &weights(&[1.0, 2.0, 1.0]), &impacts("-,+"))
            .unwrap_err();
        assert_eq!(
            err,
            RankingError::shape(ShapeViolation::ImpactCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn weight_count_is_checked_before_impact_count() {
        let err = TopsisRanker::rank(&phones(), &weights(&[1.0]), &impacts("+")).unwrap_err();
        assert!(matches!(
            err,
            RankingError::ShapeMismatch(ShapeViolation::WeightCount { .. })
        ));
    }
}
