//! Declared column types and decoded values.

mod label;
mod value;

pub use label::ColumnType;
pub use value::Value;

/// strftime layout of a `timestamp` column's text rendering.
///
/// The driver does not parse temporal text itself; these layouts are carried
/// for callers that do.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// strftime layout of a `timestamp with time zone` column's text rendering.
pub const TIMESTAMP_WITH_TIME_ZONE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f %Z";

/// strftime layout of a `date` column's text rendering.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";
