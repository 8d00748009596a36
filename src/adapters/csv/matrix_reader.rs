//! CSV Matrix Reader - Implementation of MatrixSource for CSV files.
//!
//! The header row names the label column followed by one column per
//! criterion; every data row carries an alternative label and its numeric
//! values. Whitespace around fields is ignored.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

use crate::config::IngestionConfig;
use crate::domain::ranking::{DecisionMatrix, LabeledMatrix};
use crate::ports::{IngestionError, MatrixSource};

/// Reads a labeled decision matrix from a CSV file.
///
/// # Usage
///
/// ```rust,ignore
/// let reader = CsvMatrixReader::new("phones.csv", IngestionConfig::default());
/// let labeled = reader.load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CsvMatrixReader {
    path: PathBuf,
    limits: IngestionConfig,
}

impl CsvMatrixReader {
    pub fn new(path: impl Into<PathBuf>, limits: IngestionConfig) -> Self {
        Self {
            path: path.into(),
            limits,
        }
    }

    /// Parses CSV content that is already in memory.
    ///
    /// # Errors
    ///
    /// Format problems are reported with 1-based line numbers. Cells that
    /// parse as numbers but are not finite (`NaN`, `inf`) are rejected by
    /// matrix validation as `Invalid(NonNumericEntry)`.
    pub fn parse(content: &[u8], limits: &IngestionConfig) -> Result<LabeledMatrix, IngestionError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(IngestionError::MissingHeader);
        }
        if headers.len() < 2 {
            return Err(IngestionError::TooFewColumns {
                found: headers.len(),
            });
        }
        let criteria = headers.len() - 1;
        if criteria > limits.max_criteria {
            return Err(IngestionError::TooLarge {
                limit: "criteria",
                max: limits.max_criteria,
            });
        }

        let mut labels = Vec::new();
        let mut cells = Vec::new();
        let mut rows = Vec::new();

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map_or(i + 2, |position| position.line() as usize);

            if rows.len() == limits.max_rows {
                return Err(IngestionError::TooLarge {
                    limit: "row",
                    max: limits.max_rows,
                });
            }
            if record.len() != headers.len() {
                return Err(IngestionError::RaggedRow {
                    line,
                    expected: headers.len(),
                    actual: record.len(),
                });
            }

            let mut text = Vec::with_capacity(criteria);
            let mut values = Vec::with_capacity(criteria);
            for (column, field) in headers.iter().zip(record.iter()).skip(1) {
                let value = field
                    .parse::<f64>()
                    .map_err(|_| IngestionError::MalformedNumber {
                        line,
                        column: column.to_string(),
                        value: field.to_string(),
                    })?;
                text.push(field.to_string());
                values.push(value);
            }

            labels.push(record.get(0).unwrap_or_default().to_string());
            cells.push(text);
            rows.push(values);
        }

        if rows.is_empty() {
            return Err(IngestionError::NoRows);
        }

        let matrix = DecisionMatrix::from_rows(rows)?;
        let criterion_headers = headers.iter().skip(1).map(str::to_string).collect();
        let labeled = LabeledMatrix::new(&headers[0], criterion_headers, labels, cells, matrix)?;
        Ok(labeled)
    }
}

#[async_trait]
impl MatrixSource for CsvMatrixReader {
    async fn load(&self) -> Result<LabeledMatrix, IngestionError> {
        let content = fs::read(&self.path)
            .await
            .map_err(|e| IngestionError::io(self.describe(), e))?;

        debug!(path = %self.path.display(), bytes = content.len(), "Read CSV source");

        let labeled = Self::parse(&content, &self.limits).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Rejected CSV source");
            e
        })?;

        debug!(
            path = %self.path.display(),
            alternatives = labeled.matrix().alternative_count(),
            criteria = labeled.matrix().criterion_count(),
            "Parsed decision matrix"
        );
        Ok(labeled)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
