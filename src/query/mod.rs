//! Query result consumption.
//!
//! The cursor here is the outbound edge of the crate: decoded rows flow from
//! the row adapters to the consumer one `Vec<Value>` at a time.

mod cursor;

pub use cursor::RowCursor;
