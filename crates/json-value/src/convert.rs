//! Conversions between [`JsonValue`] and [`serde_json::Value`].
//!
//! serde_json is the expected parse/serialize collaborator; these
//! conversions let callers parse with it and hand the tree over. Both
//! directions are total. Requires serde_json's `preserve_order` feature so
//! object key order survives the boundary.

use serde_json::Value as SerdeValue;

use crate::value::JsonValue;

impl From<SerdeValue> for JsonValue {
    fn from(v: SerdeValue) -> Self {
        match v {
            SerdeValue::Null => JsonValue::Null,
            SerdeValue::Bool(b) => JsonValue::Bool(b),
            SerdeValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    // u64 above i64::MAX, or a float; widening a huge u64
                    // loses low bits the same way as_f64 on a large Int does
                    JsonValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            SerdeValue::String(s) => JsonValue::Str(s),
            SerdeValue::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            SerdeValue::Object(map) => JsonValue::Object(
                map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect(),
            ),
        }
    }
}

impl From<JsonValue> for SerdeValue {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => SerdeValue::Null,
            JsonValue::Bool(b) => SerdeValue::Bool(b),
            JsonValue::Str(s) => SerdeValue::String(s),
            JsonValue::Int(n) => SerdeValue::from(n),
            // NaN and infinities have no serde_json representation; no
            // conforming parser produces them, so null is the fallback
            JsonValue::Float(d) => serde_json::Number::from_f64(d)
                .map(SerdeValue::Number)
                .unwrap_or(SerdeValue::Null),
            JsonValue::Object(map) => SerdeValue::Object(
                map.into_iter().map(|(k, v)| (k, SerdeValue::from(v))).collect(),
            ),
            JsonValue::Array(arr) => {
                SerdeValue::Array(arr.into_iter().map(SerdeValue::from).collect())
            }
        }
    }
}
