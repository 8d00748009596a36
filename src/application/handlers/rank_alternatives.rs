//! RankAlternativesHandler - Command handler for one ranking run.
//!
//! Loads the matrix from its source, ranks it, attaches the dominance and
//! criterion diagnostics, and hands the report to the result sink.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{ErrorCode, RankingId};
use crate::domain::ranking::{
    CriteriaAnalyzer, ImpactVector, RankingError, RankingReport, TopsisRanker, WeightVector,
};
use crate::ports::{ExportError, ExportReceipt, IngestionError, MatrixSource, ResultSink};

/// Command to rank every alternative of the configured source.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub report: RankingReport,
    pub receipt: ExportReceipt,
}

/// Failure of a ranking run, by stage.
#[derive(Debug, Error)]
pub enum RankAlternativesError {
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl RankAlternativesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RankAlternativesError::Ingestion(e) => e.code(),
            RankAlternativesError::Ranking(e) => e.code(),
            RankAlternativesError::Export(e) => e.code(),
        }
    }
}

/// Handler for ranking runs.
pub struct RankAlternativesHandler {
    source: Arc<dyn MatrixSource>,
    sink: Arc<dyn ResultSink>,
}

impl RankAlternativesHandler {
    pub fn new(source: Arc<dyn MatrixSource>, sink: Arc<dyn ResultSink>) -> Self {
        Self { source, sink }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        let ranking_id = RankingId::new();

        // 1. Load source
        let labeled = self.source.load().await?;
        let matrix = labeled.matrix();

        debug!(
            ranking_id = %ranking_id,
            source = %self.source.describe(),
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Loaded decision matrix"
        );

        // 2. Rank (validates alignment before any arithmetic)
        let evaluation = TopsisRanker::evaluate(matrix, &cmd.weights, &cmd.impacts)?;

        // 3. Diagnostics
        let dominated = CriteriaAnalyzer::find_dominated(matrix, &cmd.impacts);
        let uniform = CriteriaAnalyzer::find_non_discriminating(matrix);

        for d in &dominated {
            info!(
                ranking_id = %ranking_id,
                alternative = %labeled.labels()[d.alternative],
                dominated_by = %labeled.labels()[d.dominated_by],
                "Alternative is dominated"
            );
        }
        for u in &uniform {
            warn!(
                ranking_id = %ranking_id,
                criterion = %labeled.criterion_headers()[u.criterion],
                value = u.uniform_value,
                "Criterion has the same value for every alternative"
            );
        }

        let report = RankingReport::new(
            ranking_id,
            &labeled,
            cmd.impacts,
            evaluation.weights,
            &evaluation.results,
        )
        .with_diagnostics(dominated, uniform);

        if let Some(winner) = report.winner() {
            info!(
                ranking_id = %ranking_id,
                winner = %winner.label,
                score = winner.score,
                alternatives = report.alternative_count(),
                "Ranked alternatives"
            );
        }

        // 4. Deliver
        let receipt = self.sink.deliver(&report).await?;

        debug!(
            ranking_id = %ranking_id,
            format = %receipt.format,
            destination = %receipt.destination,
            bytes = receipt.bytes_written,
            "Delivered ranking report"
        );

        Ok(RankAlternativesResult { report, receipt })
    }
}
