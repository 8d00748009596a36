//! Ingestion configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Size limits applied while reading a source
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct IngestionConfig {
    /// Maximum data rows (alternatives)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Maximum criterion columns, label column excluded
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,
}

impl IngestionConfig {
    /// Validate ingestion limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_rows == 0 {
            return Err(ValidationError::InvalidIngestionLimit("max_rows"));
        }
        if self.max_criteria == 0 {
            return Err(ValidationError::InvalidIngestionLimit("max_criteria"));
        }
        Ok(())
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            max_criteria: default_max_criteria(),
        }
    }
}

fn default_max_rows() -> usize {
    100_000
}

fn default_max_criteria() -> usize {
    1_000
}
