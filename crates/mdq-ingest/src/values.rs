//! Conversion from Polars cells to raw record values.

use polars::prelude::AnyValue;

use mdq_model::RawValue;

/// Converts a Polars AnyValue into the raw cell union.
///
/// Booleans become the text `true`/`false`; string nulls and empty cells
/// become `Null`.
pub fn any_to_raw(value: AnyValue<'_>) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Null,
        AnyValue::Int8(v) => RawValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => RawValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => RawValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => RawValue::Integer(v),
        AnyValue::UInt8(v) => RawValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => RawValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => RawValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(value) => RawValue::Integer(value),
            Err(_) => RawValue::Text(v.to_string()),
        },
        AnyValue::Float32(v) => RawValue::Float(f64::from(v)),
        AnyValue::Float64(v) => RawValue::Float(v),
        AnyValue::String(s) => RawValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => RawValue::Text(s.to_string()),
        AnyValue::Boolean(b) => RawValue::Text(b.to_string()),
        other => RawValue::Text(other.to_string()),
    }
}
