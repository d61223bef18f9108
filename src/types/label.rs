//! Declared column type labels.
//!
//! The remote engine tags every result column with a textual type label.
//! Rule selection happens over a closed enumeration of those labels rather
//! than over raw strings, so adding support for a new declared type is a
//! compile-time-checked decision with an explicit fallback arm.

use std::fmt;

/// A declared column type, as reported by the engine's result-set schema.
///
/// Labels outside the known vocabulary (including `map` and `row`, which the
/// driver deliberately does not decode structurally) fall into
/// [`ColumnType::Other`], which preserves the original label for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 8-bit signed integer
    TinyInt,
    /// 16-bit signed integer
    SmallInt,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// Boolean
    Boolean,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Arbitrary-precision decimal. The precision/scale suffix of a
    /// `decimal(p,s)` label is discarded at parse time; values decode through
    /// 64-bit floats (see [`crate::decode::decode_cell`]).
    Decimal,
    /// Variable-length text
    Varchar,
    /// Timestamp without time zone, passed through as text
    Timestamp,
    /// Timestamp with time zone, passed through as text
    TimestampWithTimeZone,
    /// Calendar date, passed through as text
    Date,
    /// Time of day without time zone, passed through as text
    Time,
    /// Time of day with time zone, passed through as text
    TimeWithTimeZone,
    /// Array; elements decode as dynamically-typed JSON values
    Array,
    /// Map, left as an opaque raw payload
    Map,
    /// Row/struct, left as an opaque raw payload
    Row,
    /// Any label outside the known vocabulary, left as an opaque raw payload
    Other(String),
}

impl ColumnType {
    /// Parse a declared type label.
    ///
    /// Never fails: unknown labels become [`ColumnType::Other`]. Any
    /// `decimal(p,s)`-shaped label normalizes to [`ColumnType::Decimal`];
    /// precision and scale are not retained.
    pub fn parse(label: &str) -> Self {
        // The engine reports decimals as e.g. `decimal(10,2)`.
        if label.len() > 7 && label.starts_with("decimal") {
            return ColumnType::Decimal;
        }

        match label {
            "tinyint" => ColumnType::TinyInt,
            "smallint" => ColumnType::SmallInt,
            "integer" => ColumnType::Integer,
            "bigint" => ColumnType::BigInt,
            "boolean" => ColumnType::Boolean,
            "float" => ColumnType::Float,
            "double" => ColumnType::Double,
            "decimal" => ColumnType::Decimal,
            "varchar" => ColumnType::Varchar,
            "timestamp" => ColumnType::Timestamp,
            "timestamp with time zone" => ColumnType::TimestampWithTimeZone,
            "date" => ColumnType::Date,
            "time" => ColumnType::Time,
            "time with time zone" => ColumnType::TimeWithTimeZone,
            "array" => ColumnType::Array,
            "map" => ColumnType::Map,
            "row" => ColumnType::Row,
            other => ColumnType::Other(other.to_string()),
        }
    }

    /// The canonical label for this type.
    pub fn as_label(&self) -> &str {
        match self {
            ColumnType::TinyInt => "tinyint",
            ColumnType::SmallInt => "smallint",
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint",
            ColumnType::Boolean => "boolean",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Decimal => "decimal",
            ColumnType::Varchar => "varchar",
            ColumnType::Timestamp => "timestamp",
            ColumnType::TimestampWithTimeZone => "timestamp with time zone",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::TimeWithTimeZone => "time with time zone",
            ColumnType::Array => "array",
            ColumnType::Map => "map",
            ColumnType::Row => "row",
            ColumnType::Other(label) => label,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
