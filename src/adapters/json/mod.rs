//! JSON adapters.

mod result_writer;

pub use result_writer::JsonResultWriter;
