//! # cirro-rs
//!
//! SQL-driver adapter for Cirro, a remote, asynchronous, schema-on-read
//! query service. Queries execute remotely; results come back as
//! text-encoded cells tagged with a declared column type name, through one
//! of three delivery mechanisms (direct API pages, plain CSV exports, and
//! downloaded/decompressed CSV fields). This crate turns those loosely-typed
//! cells into strongly-typed [`Value`]s behind a generic row cursor.
//!
//! Decoding is pure and synchronous: every conversion works on inputs
//! already in memory and rows may be decoded in parallel. Networking lives
//! behind the [`QueryTransport`] trait.
//!
//! ## Example
//!
//! ```
//! use cirro_rs::{decode_csv_row, ColumnInfo, Value};
//!
//! let columns = vec![
//!     ColumnInfo::new("id", "bigint"),
//!     ColumnInfo::new("price", "decimal(10,2)"),
//!     ColumnInfo::new("note", "varchar"),
//! ];
//!
//! // `\N` is the CSV export's NULL sentinel.
//! let row = decode_csv_row(&columns, &["7", "123.45", "\\N"])?;
//! assert_eq!(row[0], Value::BigInt(7));
//! assert_eq!(row[1], Value::Double(123.45));
//! assert_eq!(row[2], Value::Null);
//! # Ok::<(), cirro_rs::DecodeError>(())
//! ```
//!
//! Note that `decimal` values decode through 64-bit floats: the
//! precision/scale suffix is discarded and exact decimal semantics are not
//! preserved. See [`Value`] for details.

// Module declarations
pub mod decode;
pub mod error;
pub mod poll;
pub mod query;
pub mod transport;
pub mod types;

// Re-export public API
pub use decode::{decode_api_row, decode_cell, decode_csv_row, decode_download_row, CSV_NULL_SENTINEL};
pub use error::{CirroError, DecodeError, QueryError, TransportError};
pub use poll::PollMode;
pub use query::RowCursor;
pub use transport::{
    ColumnInfo, Datum, DownloadField, PageToken, QueryConfig, QueryHandle, QueryStatus,
    QueryTransport, ResultPage,
};
pub use types::{ColumnType, Value};
