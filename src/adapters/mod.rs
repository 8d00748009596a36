//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ranking domain to the filesystem:
//! - `csv` - CSV matrix source and result sink
//! - `json` - JSON result sink
//! - `OutputTarget` - Stdout or atomically replaced file

pub mod csv;
pub mod json;
mod output;

pub use self::csv::{CsvMatrixReader, CsvResultWriter};
pub use self::json::JsonResultWriter;
pub use output::OutputTarget;
