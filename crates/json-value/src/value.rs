//! The [`JsonValue`] sum type with kind predicates, direct accessors, and
//! object/array indexing.
//!
//! Every operation is a read-only projection returning `Option`; absence is
//! the only failure channel.

use indexmap::IndexMap;

use crate::num;

/// A JSON value.
///
/// Integers and floats are kept as distinct variants so that a parser can
/// preserve exactness, but the split is invisible to callers that only ask
/// for "a number" via [`JsonValue::as_i64`] / [`JsonValue::as_f64`].
///
/// Objects preserve key insertion order ([`IndexMap`]); keys are unique
/// within an object, which is the builder's responsibility to uphold.
/// Container variants own their children outright, so a value is always a
/// tree and dropping the root drops everything below it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON string.
    Str(String),
    /// JSON number stored as a signed 64-bit integer.
    Int(i64),
    /// JSON number stored as a 64-bit float.
    Float(f64),
    /// JSON object; insertion order preserved, keys unique.
    Object(IndexMap<String, JsonValue>),
    /// JSON array.
    Array(Vec<JsonValue>),
}

impl JsonValue {
    /// Returns true iff the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true iff the value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true iff the value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::Str(_))
    }

    /// Returns true iff the value is an integer number.
    pub fn is_i64(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    /// Returns true iff the value is a float number.
    pub fn is_f64(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    /// Returns true iff the value is a number of either representation.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Int(_) | JsonValue::Float(_))
    }

    /// Returns true iff the value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true iff the value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// JSON type name of the active variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Str(_) => "string",
            JsonValue::Int(_) | JsonValue::Float(_) => "number",
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
        }
    }

    /// The boolean payload, or `None` for any other variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload by reference, or `None` for any other variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload as `i64`.
    ///
    /// `Int` is returned as-is. `Float` goes through the range policy in
    /// `num`: out-of-range and NaN inputs are `None`, in-range inputs
    /// truncate toward zero. Every non-number variant is `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(n) => Some(*n),
            JsonValue::Float(d) => num::f64_to_i64(*d),
            _ => None,
        }
    }

    /// The numeric payload as `f64`.
    ///
    /// `Int` widens with the usual integer-to-float semantics, which may
    /// lose precision above 2^53. Every non-number variant is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int(n) => Some(*n as f64),
            JsonValue::Float(d) => Some(*d),
            _ => None,
        }
    }

    /// The object payload by reference, or `None` for any other variant.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The array payload by reference, or `None` for any other variant.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Looks up `key` in an object value.
    ///
    /// `None` when the key is missing or the receiver is not an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up `index` in an array value.
    ///
    /// `None` when the index is out of range or the receiver is not an
    /// array; out-of-range access never panics.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Int(n)
    }
}

impl From<i32> for JsonValue {
    fn from(n: i32) -> Self {
        JsonValue::Int(n.into())
    }
}

impl From<f64> for JsonValue {
    fn from(d: f64) -> Self {
        JsonValue::Float(d)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::Str(s.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::Str(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<IndexMap<String, JsonValue>> for JsonValue {
    fn from(map: IndexMap<String, JsonValue>) -> Self {
        JsonValue::Object(map)
    }
}
