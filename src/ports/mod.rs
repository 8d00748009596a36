//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking domain and the outside world. Adapters implement these ports.
//!
//! - `MatrixSource` - Loads a labeled decision matrix (ingestion)
//! - `ResultSink` - Renders and delivers a ranking report (export)

mod matrix_source;
mod result_sink;

pub use matrix_source::{IngestionError, MatrixSource};
pub use result_sink::{ExportError, ExportFormat, ExportReceipt, ResultSink};
