//! Matrix Source Port - Ingestion interface.
//!
//! This port defines the contract for obtaining a labeled decision matrix
//! from some tabular source. The application depends on this trait, while
//! adapters (like CsvMatrixReader) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::ranking::{LabeledMatrix, RankingError};

/// Port for loading the matrix to rank.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first column as the alternative label and the rest as criteria
/// - Report every format problem (malformed number, ragged row, missing
///   header) as an `IngestionError` before anything is ranked
/// - Never coerce bad cells into numbers
///
/// # Usage
///
/// ```rust,ignore
/// let source: &dyn MatrixSource = get_source();
/// let labeled = source.load().await?;
/// println!("{} alternatives", labeled.matrix().alternative_count());
/// ```
#[async_trait]
pub trait MatrixSource: Send + Sync {
    /// Reads and parses the source.
    async fn load(&self) -> Result<LabeledMatrix, IngestionError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while reading a matrix source.
///
/// Line numbers are 1-based positions in the source, header included.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Source has no header row")]
    MissingHeader,

    #[error("Source needs a label column and at least one criterion column, found {found} column(s)")]
    TooFewColumns { found: usize },

    #[error("Source has no data rows")]
    NoRows,

    #[error("Line {line} has {actual} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Line {line}, column '{column}': '{value}' is not a number")]
    MalformedNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Source exceeds the {limit} limit of {max}")]
    TooLarge { limit: &'static str, max: usize },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Invalid(#[from] RankingError),
}

impl IngestionError {
    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        IngestionError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IngestionError::Io { .. } => ErrorCode::StorageError,
            IngestionError::TooLarge { .. } => ErrorCode::InputTooLarge,
            IngestionError::Invalid(inner) => inner.code(),
            IngestionError::MissingHeader
            | IngestionError::TooFewColumns { .. }
            | IngestionError::NoRows
            | IngestionError::RaggedRow { .. }
            | IngestionError::MalformedNumber { .. }
            | IngestionError::Csv(_) => ErrorCode::MalformedInput,
        }
    }
}
