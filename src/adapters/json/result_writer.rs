//! JSON Result Writer - Implementation of ResultSink producing JSON.
//!
//! The whole report is serialized, including the run id, the rescaled
//! weights and the dominance and criterion diagnostics.

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::OutputTarget;
use crate::domain::ranking::RankingReport;
use crate::ports::{ExportError, ExportFormat, ExportReceipt, ResultSink};

#[derive(Debug, Clone)]
pub struct JsonResultWriter {
    target: OutputTarget,
}

impl JsonResultWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Pretty-printed report followed by a newline.
    pub fn render(&self, report: &RankingReport) -> Result<Vec<u8>, ExportError> {
        let mut content = serde_json::to_vec_pretty(report).map_err(ExportError::serialization)?;
        content.push(b'\n');
        Ok(content)
    }
}

#[async_trait]
impl ResultSink for JsonResultWriter {
    async fn deliver(&self, report: &RankingReport) -> Result<ExportReceipt, ExportError> {
        let content = self.render(report)?;
        let bytes_written = self.target.write(&content).await?;

        debug!(
            ranking_id = %report.ranking_id,
            destination = %self.target.describe(),
            bytes = bytes_written,
            "Wrote JSON results"
        );

        Ok(ExportReceipt {
            format: ExportFormat::Json,
            destination: self.target.describe(),
            bytes_written,
        })
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }
}
