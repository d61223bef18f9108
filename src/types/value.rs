//! Decoded cell values.

use std::fmt;

/// A decoded, strongly-typed result cell.
///
/// Integer widths follow the declared column type. Temporal columns are not
/// parsed into calendar types; they arrive as [`Value::Varchar`] text exactly
/// as the engine rendered them. `decimal` columns decode through 64-bit
/// floats, discarding precision/scale: a deliberate, lossy simplification
/// that callers requiring exact decimal arithmetic must handle upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL, whatever the declared column type
    Null,
    /// `tinyint`
    TinyInt(i8),
    /// `smallint`
    SmallInt(i16),
    /// `integer`
    Integer(i32),
    /// `bigint`
    BigInt(i64),
    /// `boolean`
    Boolean(bool),
    /// `float`. Parsed with 32-bit rounding semantics, then widened
    /// losslessly to 64 bits for storage.
    Float(f64),
    /// `double` and `decimal`
    Double(f64),
    /// `varchar` and the temporal types, passed through unchanged
    Varchar(String),
    /// `array`. Element type metadata is not available at this layer, so
    /// elements stay dynamically typed.
    Array(Vec<serde_json::Value>),
    /// Opaque payload for `map`, `row`, and unrecognized declared types
    Raw(Vec<u8>),
}

impl Value {
    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The value as a 64-bit integer, if it is any integer width.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::TinyInt(v) => Some(i64::from(*v)),
            Value::SmallInt(v) => Some(i64::from(*v)),
            Value::Integer(v) => Some(i64::from(*v)),
            Value::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a 64-bit float, if it is a floating-point value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) | Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as text, if it is a textual value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Varchar(s) => Some(s),
            _ => None,
        }
    }

    /// The value as raw bytes, if it is an opaque payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Raw(b) => Some(b),
            _ => None,
        }
    }

    /// The array elements, if this is an `array` value.
    pub fn as_array(&self) -> Option<&[serde_json::Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::TinyInt(v) => write!(f, "{v}"),
            Value::SmallInt(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Float(v) | Value::Double(v) => write!(f, "{v}"),
            Value::Varchar(s) => f.write_str(s),
            Value::Array(elements) => {
                let rendered = serde_json::to_string(elements).map_err(|_| fmt::Error)?;
                f.write_str(&rendered)
            }
            Value::Raw(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_checks() {
        assert!(Value::Null.is_null());
        assert!(!Value::Boolean(false).is_null());
        assert_eq!(Value::Null.as_i64(), None);
    }

    #[test]
    fn test_integer_widening() {
        assert_eq!(Value::TinyInt(-5).as_i64(), Some(-5));
        assert_eq!(Value::SmallInt(300).as_i64(), Some(300));
        assert_eq!(Value::Integer(70_000).as_i64(), Some(70_000));
        assert_eq!(Value::BigInt(i64::MAX).as_i64(), Some(i64::MAX));
        assert_eq!(Value::Double(1.0).as_i64(), None);
    }

    #[test]
    fn test_float_access() {
        assert_eq!(Value::Float(1.75).as_f64(), Some(1.75));
        assert_eq!(Value::Double(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::BigInt(1).as_f64(), None);
    }

    #[test]
    fn test_text_and_bytes_access() {
        let text = Value::Varchar("2024-01-01 00:00:00.000 UTC".to_string());
        assert_eq!(text.as_str(), Some("2024-01-01 00:00:00.000 UTC"));
        assert_eq!(text.as_bytes(), None);

        let raw = Value::Raw(b"{a=1}".to_vec());
        assert_eq!(raw.as_bytes(), Some(&b"{a=1}"[..]));
        assert_eq!(raw.as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::TinyInt(7).to_string(), "7");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Varchar("abc".to_string()).to_string(), "abc");
        assert_eq!(
            Value::Array(vec![serde_json::json!(1), serde_json::json!(2)]).to_string(),
            "[1,2]"
        );
    }
}
