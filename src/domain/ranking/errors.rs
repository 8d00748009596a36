//! Ranking-specific error types.
//!
//! Row and criterion indices carried by these errors are zero-based positions
//! in the decision matrix, not line numbers of whatever source produced it.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Which dimensional invariant of the ranking inputs was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("decision matrix has no alternatives")]
    EmptyMatrix,

    #[error("decision matrix has no criteria")]
    NoCriteria,

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{actual} weights given for {expected} criteria")]
    WeightCount { expected: usize, actual: usize },

    #[error("{actual} impacts given for {expected} criteria")]
    ImpactCount { expected: usize, actual: usize },

    #[error("{actual} labels given for {expected} alternatives")]
    LabelCount { expected: usize, actual: usize },

    #[error("{actual} source rows given for {expected} alternatives")]
    SourceRowCount { expected: usize, actual: usize },

    #[error("{actual} headers given for {expected} criteria")]
    HeaderCount { expected: usize, actual: usize },
}

/// Which weight invariant was violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightViolation {
    #[error("weight {criterion} is negative ({value})")]
    Negative { criterion: usize, value: f64 },

    #[error("weight {criterion} is not finite ({value})")]
    NonFinite { criterion: usize, value: f64 },

    #[error("weight {criterion} is not a number: '{text}'")]
    Unparsable { criterion: usize, text: String },

    #[error("all weights are zero")]
    AllZero,
}

/// Errors raised while validating ranking inputs.
///
/// Validation always completes before any arithmetic, so an error means no
/// score was computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(ShapeViolation),

    #[error("Invalid weight: {0}")]
    InvalidWeight(WeightViolation),

    #[error("Invalid impact at criterion {criterion}: '{symbol}' (expected '+' or '-')")]
    InvalidImpact { criterion: usize, symbol: String },

    #[error("Non-numeric entry at row {row}, criterion {column}: {value}")]
    NonNumericEntry { row: usize, column: usize, value: f64 },
}

impl RankingError {
    pub fn shape(violation: ShapeViolation) -> Self {
        RankingError::ShapeMismatch(violation)
    }

    pub fn weight(violation: WeightViolation) -> Self {
        RankingError::InvalidWeight(violation)
    }

    pub fn invalid_impact(criterion: usize, symbol: impl Into<String>) -> Self {
        RankingError::InvalidImpact {
            criterion,
            symbol: symbol.into(),
        }
    }

    pub fn non_numeric(row: usize, column: usize, value: f64) -> Self {
        RankingError::NonNumericEntry { row, column, value }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::ShapeMismatch(_) => ErrorCode::ShapeMismatch,
            RankingError::InvalidWeight(_) => ErrorCode::InvalidWeight,
            RankingError::InvalidImpact { .. } => ErrorCode::InvalidImpact,
            RankingError::NonNumericEntry { .. } => ErrorCode::NonNumericEntry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_counts() {
        let err = RankingError::shape(ShapeViolation::WeightCount {
            expected: 3,
            actual: 2,
        });
        assert_eq!(err.to_string(), "Shape mismatch: 2 weights given for 3 criteria");
        assert_eq!(err.code(), ErrorCode::ShapeMismatch);
    }

    #[test]
    fn ragged_row_message_names_row() {
        let err = RankingError::shape(ShapeViolation::RaggedRow {
            row: 4,
            expected: 3,
            actual: 2,
        });
        assert!(err.to_string().contains("row 4 has 2 values, expected 3"));
    }

    #[test]
    fn weight_errors_carry_criterion() {
        let err = RankingError::weight(WeightViolation::Negative {
            criterion: 1,
            value: -2.0,
        });
        assert_eq!(err.to_string(), "Invalid weight: weight 1 is negative (-2)");
        assert_eq!(err.code(), ErrorCode::InvalidWeight);
    }

    #[test]
    fn invalid_impact_quotes_symbol() {
        let err = RankingError::invalid_impact(2, "*");
        assert!(err.to_string().contains("'*'"));
        assert_eq!(err.code(), ErrorCode::InvalidImpact);
    }

    #[test]
    fn non_numeric_entry_names_cell() {
        let err = RankingError::non_numeric(0, 2, f64::NAN);
        assert_eq!(err.to_string(), "Non-numeric entry at row 0, criterion 2: NaN");
        assert_eq!(err.code(), ErrorCode::NonNumericEntry);
    }
}
