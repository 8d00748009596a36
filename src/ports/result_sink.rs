//! Result Sink Port - Export interface.
//!
//! This port defines the contract for rendering a ranking report and handing
//! it to its destination. Adapters (CsvResultWriter, JsonResultWriter)
//! provide the implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::ranking::RankingReport;

/// Port for delivering ranking results.
///
/// # Contract
///
/// Implementations must:
/// - Emit entries in input row order
/// - Never leave a partially written destination behind on failure
/// - Report every failure as an `ExportError`
///
/// # Usage
///
/// ```rust,ignore
/// let sink: &dyn ResultSink = get_sink();
/// let receipt = sink.deliver(&report).await?;
/// println!("wrote {} bytes to {}", receipt.bytes_written, receipt.destination);
/// ```
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Renders and delivers the report.
    async fn deliver(&self, report: &RankingReport) -> Result<ExportReceipt, ExportError>;

    /// The format this sink produces.
    fn format(&self) -> ExportFormat;
}

/// Confirmation of a completed delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub destination: String,
    pub bytes_written: usize,
}

/// Export formats supported by the result sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Original columns plus score and rank columns.
    #[default]
    Csv,
    /// Full report including diagnostics.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while exporting results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to render results: {0}")]
    Serialization(String),

    #[error("Failed to write {destination}: {message}")]
    Io { destination: String, message: String },
}

impl ExportError {
    pub fn serialization(err: impl std::fmt::Display) -> Self {
        ExportError::Serialization(err.to_string())
    }

    pub fn io(destination: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ExportError::Io {
            destination: destination.into(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            ExportError::Serialization(_) => ErrorCode::SerializationError,
            ExportError::Io { .. } => ErrorCode::StorageError,
        }
    }
}
