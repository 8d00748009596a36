//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Largest number of decimals a score may be rendered with.
pub const MAX_SCORE_PRECISION: u8 = 12;

/// How result sinks render a report
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Decimals in the CSV score column
    #[serde(default = "default_score_precision")]
    pub score_precision: u8,

    /// Header of the appended score column
    #[serde(default = "default_score_header")]
    pub score_header: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_header")]
    pub rank_header: String,

    /// Format used when none is given on the command line
    #[serde(default)]
    pub format: ExportFormat,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_precision > MAX_SCORE_PRECISION {
            return Err(ValidationError::InvalidScorePrecision(self.score_precision));
        }
        if self.score_header.trim().is_empty() {
            return Err(ValidationError::EmptyHeader("score_header"));
        }
        if self.rank_header.trim().is_empty() {
            return Err(ValidationError::EmptyHeader("rank_header"));
        }
        if self.score_header == self.rank_header {
            return Err(ValidationError::DuplicateHeaders);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            score_precision: default_score_precision(),
            score_header: default_score_header(),
            rank_header: default_rank_header(),
            format: ExportFormat::default(),
        }
    }
}

fn default_score_precision() -> u8 {
    4
}

fn default_score_header() -> String {
    "Topsis Score".to_string()
}

fn default_rank_header() -> String {
    "Rank".to_string()
}
