//! Error codes shared across the domain, ports and adapters.

use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Ranking input errors
    ShapeMismatch,
    InvalidWeight,
    InvalidImpact,
    NonNumericEntry,

    // Ingestion errors
    MalformedInput,
    InputTooLarge,

    // Export errors
    UnsupportedFormat,
    SerializationError,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidImpact => "INVALID_IMPACT",
            ErrorCode::NonNumericEntry => "NON_NUMERIC_ENTRY",
            ErrorCode::MalformedInput => "MALFORMED_INPUT",
            ErrorCode::InputTooLarge => "INPUT_TOO_LARGE",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}
