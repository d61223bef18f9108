//! The type coercion rule table.
//!
//! Converts one (declared type, optional raw text) pair into a [`Value`].
//! Pure and stateless: cells may be decoded in any order, on any thread.

use crate::error::DecodeError;
use crate::types::{ColumnType, Value};

/// Decode one raw cell according to its declared column type.
///
/// `None` means SQL NULL and decodes to [`Value::Null`] for every declared
/// type, without attempting any parsing.
///
/// Integer types parse base-10 with an optional leading sign; values outside
/// the target width's signed range are rejected, never truncated or wrapped.
/// `boolean` accepts exactly `"true"` or `"false"`. `float` parses with
/// 32-bit rounding semantics and widens the result to 64 bits; `double` and
/// `decimal` parse as 64-bit floats, and any `decimal(p,s)` precision/scale
/// is discarded, a deliberate lossy simplification. `varchar` and the temporal
/// types pass through unchanged. `array` must be valid JSON; its elements
/// stay dynamically typed because element type metadata is not available
/// here. Everything else, including `map` and `row`, degrades to the raw
/// text as an opaque byte payload rather than failing the row.
pub fn decode_cell(column_type: &ColumnType, raw: Option<&str>) -> Result<Value, DecodeError> {
    let Some(text) = raw else {
        return Ok(Value::Null);
    };

    match column_type {
        ColumnType::TinyInt => parse_int::<i8>(text, 8).map(Value::TinyInt),
        ColumnType::SmallInt => parse_int::<i16>(text, 16).map(Value::SmallInt),
        ColumnType::Integer => parse_int::<i32>(text, 32).map(Value::Integer),
        ColumnType::BigInt => parse_int::<i64>(text, 64).map(Value::BigInt),

        ColumnType::Boolean => match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            other => Err(DecodeError::UnparsableBoolean {
                text: other.to_string(),
            }),
        },

        ColumnType::Float => {
            let parsed = text
                .parse::<f32>()
                .map_err(|_| DecodeError::UnparsableFloat {
                    text: text.to_string(),
                    bits: 32,
                })?;
            // Round at 32 bits, store at 64; the widening is exact.
            Ok(Value::Float(f64::from(parsed)))
        }

        ColumnType::Double | ColumnType::Decimal => text
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| DecodeError::UnparsableFloat {
                text: text.to_string(),
                bits: 64,
            }),

        ColumnType::Varchar
        | ColumnType::Timestamp
        | ColumnType::TimestampWithTimeZone
        | ColumnType::Date
        | ColumnType::Time
        | ColumnType::TimeWithTimeZone => Ok(Value::Varchar(text.to_string())),

        ColumnType::Array => serde_json::from_str::<Vec<serde_json::Value>>(text)
            .map(Value::Array)
            .map_err(|source| DecodeError::MalformedArray {
                text: text.to_string(),
                source,
            }),

        ColumnType::Map | ColumnType::Row | ColumnType::Other(_) => {
            Ok(Value::Raw(text.as_bytes().to_vec()))
        }
    }
}

fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    text: &str,
    bits: u32,
) -> Result<T, DecodeError> {
    text.parse::<T>().map_err(|_| DecodeError::UnparsableNumber {
        text: text.to_string(),
        bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_short_circuits_every_type() {
        for ty in [
            ColumnType::TinyInt,
            ColumnType::Boolean,
            ColumnType::Double,
            ColumnType::Varchar,
            ColumnType::Array,
            ColumnType::Map,
            ColumnType::Other("geometry".to_string()),
        ] {
            assert_eq!(decode_cell(&ty, None).unwrap(), Value::Null);
        }
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(
            decode_cell(&ColumnType::TinyInt, Some("123")).unwrap(),
            Value::TinyInt(123)
        );
        assert_eq!(
            decode_cell(&ColumnType::SmallInt, Some("123")).unwrap(),
            Value::SmallInt(123)
        );
        assert_eq!(
            decode_cell(&ColumnType::Integer, Some("123")).unwrap(),
            Value::Integer(123)
        );
        assert_eq!(
            decode_cell(&ColumnType::BigInt, Some("123")).unwrap(),
            Value::BigInt(123)
        );
    }

    #[test]
    fn test_bigint_max() {
        assert_eq!(
            decode_cell(&ColumnType::BigInt, Some("9223372036854775807")).unwrap(),
            Value::BigInt(i64::MAX)
        );
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(
            decode_cell(&ColumnType::TinyInt, Some("-128")).unwrap(),
            Value::TinyInt(i8::MIN)
        );
        assert_eq!(
            decode_cell(&ColumnType::Integer, Some("+42")).unwrap(),
            Value::Integer(42)
        );
    }

    #[test]
    fn test_out_of_range_integer_rejected() {
        let err = decode_cell(&ColumnType::TinyInt, Some("99999")).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnparsableNumber { bits: 8, ref text } if text == "99999"
        ));

        assert!(decode_cell(&ColumnType::SmallInt, Some("40000")).is_err());
        assert!(decode_cell(&ColumnType::Integer, Some("3000000000")).is_err());
        assert!(decode_cell(&ColumnType::BigInt, Some("9223372036854775808")).is_err());
    }

    #[test]
    fn test_non_numeric_integer_rejected() {
        assert!(decode_cell(&ColumnType::BigInt, Some("12a")).is_err());
        assert!(decode_cell(&ColumnType::Integer, Some(" 1")).is_err());
        assert!(decode_cell(&ColumnType::Integer, Some("")).is_err());
        assert!(decode_cell(&ColumnType::Integer, Some("0x10")).is_err());
    }

    #[test]
    fn test_boolean_exact_forms_only() {
        assert_eq!(
            decode_cell(&ColumnType::Boolean, Some("true")).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            decode_cell(&ColumnType::Boolean, Some("false")).unwrap(),
            Value::Boolean(false)
        );

        for bad in ["True", "FALSE", "1", "0", "yes", ""] {
            let err = decode_cell(&ColumnType::Boolean, Some(bad)).unwrap_err();
            assert!(matches!(err, DecodeError::UnparsableBoolean { .. }));
        }
    }

    #[test]
    fn test_float_and_double() {
        assert_eq!(
            decode_cell(&ColumnType::Float, Some("1.75")).unwrap(),
            Value::Float(1.75)
        );
        assert_eq!(
            decode_cell(&ColumnType::Double, Some("1.75")).unwrap(),
            Value::Double(1.75)
        );
    }

    #[test]
    fn test_float_uses_32_bit_rounding() {
        // 0.1 is not exactly representable; the f32 rounding differs from f64.
        let decoded = decode_cell(&ColumnType::Float, Some("0.1")).unwrap();
        assert_eq!(decoded, Value::Float(f64::from(0.1f32)));
        assert_ne!(decoded, Value::Float(0.1f64));
    }

    #[test]
    fn test_decimal_is_lossy_double() {
        assert_eq!(
            decode_cell(&ColumnType::parse("decimal(10,2)"), Some("123.45")).unwrap(),
            Value::Double(123.45)
        );
    }

    #[test]
    fn test_unparsable_float() {
        let err = decode_cell(&ColumnType::Double, Some("abc")).unwrap_err();
        assert!(matches!(err, DecodeError::UnparsableFloat { bits: 64, .. }));

        let err = decode_cell(&ColumnType::Float, Some("1.2.3")).unwrap_err();
        assert!(matches!(err, DecodeError::UnparsableFloat { bits: 32, .. }));
    }

    #[test]
    fn test_text_types_pass_through() {
        for ty in [
            ColumnType::Varchar,
            ColumnType::Timestamp,
            ColumnType::TimestampWithTimeZone,
            ColumnType::Date,
            ColumnType::Time,
            ColumnType::TimeWithTimeZone,
        ] {
            let text = "2024-07-01 12:34:56.789 CEST";
            assert_eq!(
                decode_cell(&ty, Some(text)).unwrap(),
                Value::Varchar(text.to_string())
            );
        }
    }

    #[test]
    fn test_array_decoding() {
        let decoded = decode_cell(&ColumnType::Array, Some("[1,2,3]")).unwrap();
        assert_eq!(
            decoded,
            Value::Array(vec![
                serde_json::json!(1),
                serde_json::json!(2),
                serde_json::json!(3)
            ])
        );

        // Elements are dynamically typed.
        let decoded = decode_cell(&ColumnType::Array, Some(r#"[1, "a", null]"#)).unwrap();
        assert_eq!(decoded.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_malformed_array() {
        let err = decode_cell(&ColumnType::Array, Some("[1,2")).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedArray { .. }));

        let err = decode_cell(&ColumnType::Array, Some(r#"{"a":1}"#)).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedArray { .. }));
    }

    #[test]
    fn test_fallback_types_never_fail() {
        let payload = "{k1=v1, k2=v2}";
        for ty in [
            ColumnType::Map,
            ColumnType::Row,
            ColumnType::Other("ipaddress".to_string()),
        ] {
            assert_eq!(
                decode_cell(&ty, Some(payload)).unwrap(),
                Value::Raw(payload.as_bytes().to_vec())
            );
        }
    }
}
