//! CSV Result Writer - Implementation of ResultSink producing CSV.
//!
//! Output is the source table with two columns appended: the closeness
//! score, rendered with a fixed number of decimals, and the rank.

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::OutputTarget;
use crate::config::ExportConfig;
use crate::domain::ranking::RankingReport;
use crate::ports::{ExportError, ExportFormat, ExportReceipt, ResultSink};

#[derive(Debug, Clone)]
pub struct CsvResultWriter {
    target: OutputTarget,
    settings: ExportConfig,
}

impl CsvResultWriter {
    pub fn new(target: OutputTarget, settings: ExportConfig) -> Self {
        Self { target, settings }
    }

    /// Renders the report without writing it anywhere.
    pub fn render(&self, report: &RankingReport) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let precision = usize::from(self.settings.score_precision);

        let header = std::iter::once(report.label_header.as_str())
            .chain(report.criterion_headers.iter().map(String::as_str))
            .chain([
                self.settings.score_header.as_str(),
                self.settings.rank_header.as_str(),
            ]);
        writer
            .write_record(header)
            .map_err(ExportError::serialization)?;

        for entry in &report.entries {
            let score = format!("{:.*}", precision, entry.score);
            let rank = entry.rank.to_string();
            let record = std::iter::once(entry.label.as_str())
                .chain(entry.cells.iter().map(String::as_str))
                .chain([score.as_str(), rank.as_str()]);
            writer
                .write_record(record)
                .map_err(ExportError::serialization)?;
        }

        writer.into_inner().map_err(ExportError::serialization)
    }
}

#[async_trait]
impl ResultSink for CsvResultWriter {
    async fn deliver(&self, report: &RankingReport) -> Result<ExportReceipt, ExportError> {
        let content = self.render(report)?;
        let bytes_written = self.target.write(&content).await?;

        debug!(
            ranking_id = %report.ranking_id,
            destination = %self.target.describe(),
            bytes = bytes_written,
            "Wrote CSV results"
        );

        Ok(ExportReceipt {
            format: ExportFormat::Csv,
            destination: self.target.describe(),
            bytes_written,
        })
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }
}
