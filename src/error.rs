//! Error types for cirro-rs.
//!
//! This module defines domain-specific error types organized by functional area.

use crate::types::ColumnType;
use thiserror::Error;

/// Top-level error type encompassing all possible errors.
#[derive(Error, Debug)]
pub enum CirroError {
    /// Query submission/lifecycle errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Result decoding errors
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Transport-level errors
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors produced while decoding result cells into typed values.
///
/// All variants are local, recoverable-by-caller conditions: a bad cell fails
/// the whole row's conversion and is returned to the caller, which decides
/// whether to abort the result set or skip the row. No conversion error is
/// swallowed or defaulted to a placeholder value.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Text is not a valid base-10 integer, or exceeds the target width's
    /// signed range, for an integer-typed column.
    #[error("cannot parse '{text}' as a {bits}-bit signed integer")]
    UnparsableNumber { text: String, bits: u32 },

    /// Text is neither `"true"` nor `"false"` for a boolean-typed column.
    #[error("cannot parse '{text}' as boolean")]
    UnparsableBoolean { text: String },

    /// Text is not a valid floating-point literal for a
    /// float/double/decimal-typed column.
    #[error("cannot parse '{text}' as a {bits}-bit float")]
    UnparsableFloat { text: String, bits: u32 },

    /// Text is not a syntactically valid JSON array for an `array` column.
    #[error("malformed array '{text}': {source}")]
    MalformedArray {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    /// The number of cells in a row does not match the number of declared
    /// columns. Fatal for that row, not for the whole result set.
    #[error("row has {cells} cells but the schema declares {columns} columns")]
    RowShapeMismatch { columns: usize, cells: usize },

    /// A cell-level error enriched with the position it occurred at.
    #[error("column {index} ('{name}', {column_type}): {source}")]
    AtColumn {
        index: usize,
        name: String,
        column_type: ColumnType,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Wrap a cell-level error with the column it occurred at.
    pub(crate) fn at_column(self, index: usize, name: &str, column_type: ColumnType) -> Self {
        DecodeError::AtColumn {
            index,
            name: name.to_string(),
            column_type,
            source: Box::new(self),
        }
    }
}

/// Errors related to query submission and lifecycle.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The remote engine reported the query as failed
    #[error("Query execution failed: {0}")]
    ExecutionFailed(String),

    /// The query was cancelled before completing
    #[error("Query was cancelled")]
    Cancelled,

    /// No result set is available for this query
    #[error("Result set not available: {0}")]
    NoResultSet(String),
}

/// Errors related to the result-delivery transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Query submission to the remote service failed
    #[error("Failed to submit query: {0}")]
    SubmitFailed(String),

    /// Fetching a result page failed
    #[error("Failed to fetch result page: {0}")]
    FetchFailed(String),

    /// Downloading or decompressing a spooled result export failed
    #[error("Failed to download spooled results: {0}")]
    DownloadFailed(String),

    /// The service returned a response the driver cannot interpret
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Network I/O error
    #[error("Network I/O error: {0}")]
    IoError(String),
}

// Conversions from external error types
impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::InvalidResponse(err.to_string())
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::IoError(err.to_string())
    }
}
