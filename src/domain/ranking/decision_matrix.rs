//! Decision Matrix - Alternatives x criteria table of finite values.

use serde::{Deserialize, Serialize};

use super::errors::{RankingError, ShapeViolation};

/// A rectangular table of alternatives (rows) by criteria (columns).
///
/// # Invariants
/// - At least one alternative and one criterion
/// - Every row has the same number of values
/// - Every value is finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl DecisionMatrix {
    /// Creates a matrix from rows, validating shape first and then every cell.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        let criteria = match rows.first() {
            None => return Err(RankingError::shape(ShapeViolation::EmptyMatrix)),
            Some(first) if first.is_empty() => {
                return Err(RankingError::shape(ShapeViolation::NoCriteria))
            }
            Some(first) => first.len(),
        };

        for (row, values) in rows.iter().enumerate() {
            if values.len() != criteria {
                return Err(RankingError::shape(ShapeViolation::RaggedRow {
                    row,
                    expected: criteria,
                    actual: values.len(),
                }));
            }
        }

        for (row, values) in rows.iter().enumerate() {
            if let Some((column, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(RankingError::non_numeric(row, column, value));
            }
        }

        Ok(Self { rows, criteria })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Returns one alternative's values.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over the rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over one criterion's values in row order.
    ///
    /// `column` must be below `criterion_count()`.
    pub(crate) fn column(&self, column: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[column])
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = RankingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative.
    pub fn row(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.rows.push(values.into());
        self
    }

    /// Validates and builds the matrix.
    pub fn build(self) -> Result<DecisionMatrix, RankingError> {
        DecisionMatrix::from_rows(self.rows)
    }
}

/// A decision matrix together with the text it was read from.
///
/// Labels and original cell text are carried for output association only;
/// ranking uses the numeric matrix alone.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    label_header: String,
    criterion_headers: Vec<String>,
    labels: Vec<String>,
    cells: Vec<Vec<String>>,
    matrix: DecisionMatrix,
}

impl LabeledMatrix {
    /// Pairs a validated matrix with its headers, labels and source text.
    pub fn new(
        label_header: impl Into<String>,
        criterion_headers: Vec<String>,
        labels: Vec<String>,
        cells: Vec<Vec<String>>,
        matrix: DecisionMatrix,
    ) -> Result<Self, RankingError> {
        let alternatives = matrix.alternative_count();
        let criteria = matrix.criterion_count();

        if criterion_headers.len() != criteria {
            return Err(RankingError::shape(ShapeViolation::HeaderCount {
                expected: criteria,
                actual: criterion_headers.len(),
            }));
        }
        if labels.len() != alternatives {
            return Err(RankingError::shape(ShapeViolation::LabelCount {
                expected: alternatives,
                actual: labels.len(),
            }));
        }
        if cells.len() != alternatives {
            return Err(RankingError::shape(ShapeViolation::SourceRowCount {
                expected: alternatives,
                actual: cells.len(),
            }));
        }
        for (row, text) in cells.iter().enumerate() {
            if text.len() != criteria {
                return Err(RankingError::shape(ShapeViolation::RaggedRow {
                    row,
                    expected: criteria,
                    actual: text.len(),
                }));
            }
        }

        Ok(Self {
            label_header: label_header.into(),
            criterion_headers,
            labels,
            cells,
            matrix,
        })
    }

    /// Builds a labeled matrix whose cell text is the default rendering of each value.
    pub fn from_values(
        label_header: impl Into<String>,
        criterion_headers: Vec<String>,
        labels: Vec<String>,
        matrix: DecisionMatrix,
    ) -> Result<Self, RankingError> {
        let cells = matrix
            .rows()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        Self::new(label_header, criterion_headers, labels, cells, matrix)
    }

    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    pub fn criterion_headers(&self) -> &[String] {
        &self.criterion_headers
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_rows_accepts_rectangular_finite_matrix() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(matrix.row(2), None);
    }

    #[test]
    fn from_rows_rejects_empty_matrix() {
        let err = DecisionMatrix::from_rows(vec![]).unwrap_err();
        assert_eq!(err, RankingError::shape(ShapeViolation::EmptyMatrix));
    }

    #[test]
    fn from_rows_rejects_rows_without_criteria() {
        let err = DecisionMatrix::from_rows(vec![vec![], vec![]]).unwrap_err();
        assert_eq!(err, RankingError::shape(ShapeViolation::NoCriteria));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            RankingError::shape(ShapeViolation::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn from_rows_rejects_non_finite_values() {
        let err = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, f64::INFINITY]])
            .unwrap_err();
        assert!(matches!(
            err,
            RankingError::NonNumericEntry { row: 1, column: 1, .. }
        ));

        let err = DecisionMatrix::from_rows(vec![vec![f64::NAN]]).unwrap_err();
        assert!(matches!(
            err,
            RankingError::NonNumericEntry { row: 0, column: 0, .. }
        ));
    }

    #[test]
    fn shape_is_checked_before_cells() {
        // Row 1 is ragged and row 0 holds a NaN; the shape error wins.
        let err = DecisionMatrix::from_rows(vec![vec![f64::NAN, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, RankingError::ShapeMismatch(_)));
    }

    #[test]
    fn builder_creates_matrix() {
        let matrix = DecisionMatrix::builder()
            .row([540.0, 9.0, 1.3])
            .row([620.0, 7.0, 1.1])
            .build()
            .unwrap();

        assert_eq!(matrix.row(0), Some(&[540.0, 9.0, 1.3][..]));
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![9.0, 7.0]);
    }

    #[test]
    fn matrix_deserializes_through_validation() {
        let matrix: DecisionMatrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(matrix.alternative_count(), 2);

        let ragged = serde_json::from_str::<DecisionMatrix>("[[1.0, 2.0], [3.0]]");
        assert!(ragged.is_err());
    }

    #[test]
    fn matrix_serializes_as_nested_arrays() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.5, 2.0]]).unwrap();
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[1.5,2.0]]");
    }

    #[test]
    fn labeled_matrix_checks_label_count() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        let err = LabeledMatrix::from_values("Model", headers(&["Price"]), headers(&["A"]), matrix)
            .unwrap_err();
        assert_eq!(
            err,
            RankingError::shape(ShapeViolation::LabelCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn labeled_matrix_checks_header_count() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let err = LabeledMatrix::from_values("Model", headers(&["Price"]), headers(&["A"]), matrix)
            .unwrap_err();
        assert!(matches!(
            err,
            RankingError::ShapeMismatch(ShapeViolation::HeaderCount { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn labeled_matrix_keeps_source_text() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.5]]).unwrap();
        let labeled = LabeledMatrix::new(
            "Model",
            headers(&["Price", "Weight"]),
            headers(&["A"]),
            vec![headers(&["1.00", "2.5"])],
            matrix,
        )
        .unwrap();

        assert_eq!(labeled.label_header(), "Model");
        assert_eq!(labeled.cells()[0][0], "1.00");
        assert_eq!(labeled.matrix().row(0), Some(&[1.0, 2.5][..]));
    }

    #[test]
    fn from_values_renders_cells() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.5]]).unwrap();
        let labeled =
            LabeledMatrix::from_values("Model", headers(&["Price", "Weight"]), headers(&["A"]), matrix)
                .unwrap();
        assert_eq!(labeled.cells()[0], headers(&["1", "2.5"]));
    }
}
