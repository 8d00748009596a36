use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use topsis_ranker::adapters::{CsvMatrixReader, CsvResultWriter, JsonResultWriter, OutputTarget};
use topsis_ranker::application::{
    RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
};
use topsis_ranker::config::{AppConfig, LoggingConfig};
use topsis_ranker::domain::ranking::{ImpactVector, WeightVector};
use topsis_ranker::ports::{ExportFormat, ResultSink};

const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_EXPORT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "topsis-ranker")]
#[command(about = "Rank alternatives against weighted criteria with TOPSIS", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file: a label column followed by one numeric column per criterion
    #[arg(short, long)]
    input: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,2,1"
    #[arg(short, long, allow_hyphen_values = true)]
    weights: WeightVector,

    /// Comma-separated impacts, '+' (benefit) or '-' (cost), e.g. "+,-,+"
    #[arg(short = 'm', long, allow_hyphen_values = true)]
    impacts: ImpactVector,

    /// Result file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Result format: csv or json (defaults to TOPSIS__EXPORT__FORMAT, then csv)
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Decimals in the CSV score column
    #[arg(long)]
    precision: Option<u8>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(precision) = cli.precision {
        config.export.score_precision = precision;
    }
    if let Err(e) = config.validate() {
        eprintln!("Config error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    init_tracing(&config.logging);

    let target = OutputTarget::from_path(cli.output);
    let sink: Arc<dyn ResultSink> = match cli.format.unwrap_or(config.export.format) {
        ExportFormat::Csv => Arc::new(CsvResultWriter::new(target, config.export.clone())),
        ExportFormat::Json => Arc::new(JsonResultWriter::new(target)),
    };
    let source = Arc::new(CsvMatrixReader::new(cli.input, config.ingestion));
    let handler = RankAlternativesHandler::new(source, sink);

    let cmd = RankAlternativesCommand {
        weights: cli.weights,
        impacts: cli.impacts,
    };

    if let Err(e) = handler.handle(cmd).await {
        eprintln!("Error [{}]: {}", e.code(), e);
        std::process::exit(exit_code(&e));
    }
}

/// Logs go to stderr; stdout may carry the results.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn exit_code(err: &RankAlternativesError) -> i32 {
    match err {
        RankAlternativesError::Ingestion(_) | RankAlternativesError::Ranking(_) => {
            EXIT_INVALID_INPUT
        }
        RankAlternativesError::Export(_) => EXIT_EXPORT,
    }
}
