//! Type-directed decoding of raw result cells.
//!
//! This is the core of the driver: a pure conversion layer turning the
//! engine's text-encoded cells into typed [`Value`](crate::types::Value)s.
//! It is synchronous, stateless, and free of side effects; rows and cells
//! may be decoded in parallel without coordination.

mod cell;
mod row;

pub use cell::decode_cell;
pub use row::{decode_api_row, decode_csv_row, decode_download_row, CSV_NULL_SENTINEL};
