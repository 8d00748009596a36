//! CSV adapters - Source and sink for comma-separated tables.
//!
//! - `CsvMatrixReader` - Reads a labeled decision matrix
//! - `CsvResultWriter` - Writes the table back with score and rank columns

mod matrix_reader;
mod result_writer;

pub use matrix_reader::CsvMatrixReader;
pub use result_writer::CsvResultWriter;
