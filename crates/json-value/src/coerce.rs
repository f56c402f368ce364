//! Coercing accessors: relaxed projections that convert across the
//! string/number/bool/null boundary instead of reporting absence.
//!
//! Composite kinds (object, array) never coerce.

use crate::num;
use crate::value::JsonValue;

impl JsonValue {
    /// Coerces a scalar value to text.
    ///
    /// `Str` copies the payload; `Null` is `"null"`; booleans are `"true"`
    /// and `"false"`; numbers use `Display`, which for floats is the
    /// shortest decimal string that round-trips (so `1.0` renders as `"1"`).
    /// Objects and arrays are `None`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            JsonValue::Str(s) => Some(s.clone()),
            JsonValue::Null => Some("null".to_owned()),
            JsonValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_owned()),
            JsonValue::Int(n) => Some(n.to_string()),
            JsonValue::Float(d) => Some(d.to_string()),
            JsonValue::Object(_) | JsonValue::Array(_) => None,
        }
    }

    /// Coerces to `i64`.
    ///
    /// Numbers behave like [`JsonValue::as_i64`]. A string must parse in
    /// full as an integer literal, or failing that as a float literal which
    /// is then put through the same range policy; partial parses are
    /// rejected. Everything else is `None`.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(_) | JsonValue::Float(_) => self.as_i64(),
            JsonValue::Str(s) => num::parse_i64(s),
            _ => None,
        }
    }

    /// Coerces to `f64`.
    ///
    /// Numbers behave like [`JsonValue::as_f64`]. A string must parse in
    /// full as a float literal (optional sign and exponent included).
    /// Everything else is `None`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int(_) | JsonValue::Float(_) => self.as_f64(),
            JsonValue::Str(s) => num::parse_f64(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn scalars_coerce_to_text() {
        assert_eq!(JsonValue::Null.to_text().as_deref(), Some("null"));
        assert_eq!(JsonValue::Bool(true).to_text().as_deref(), Some("true"));
        assert_eq!(JsonValue::Bool(false).to_text().as_deref(), Some("false"));
        assert_eq!(JsonValue::Int(42).to_text().as_deref(), Some("42"));
        assert_eq!(JsonValue::Int(-1).to_text().as_deref(), Some("-1"));
        assert_eq!(JsonValue::Float(3.14).to_text().as_deref(), Some("3.14"));
        assert_eq!(JsonValue::Float(1.0).to_text().as_deref(), Some("1"));
        assert_eq!(
            JsonValue::Str("hi".to_owned()).to_text().as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn composites_never_coerce() {
        let obj = JsonValue::Object(IndexMap::new());
        let arr = JsonValue::Array(vec![JsonValue::Int(1)]);
        for value in [obj, arr] {
            assert_eq!(value.to_text(), None, "{value:?}");
            assert_eq!(value.to_i64(), None, "{value:?}");
            assert_eq!(value.to_f64(), None, "{value:?}");
        }
    }

    #[test]
    fn numeric_strings_coerce_to_i64() {
        assert_eq!(JsonValue::from("42").to_i64(), Some(42));
        assert_eq!(JsonValue::from("42.9").to_i64(), Some(42));
        assert_eq!(JsonValue::from("-42.9").to_i64(), Some(-42));
        assert_eq!(JsonValue::from("abc").to_i64(), None);
        assert_eq!(JsonValue::from("42x").to_i64(), None);
        assert_eq!(JsonValue::from("").to_i64(), None);
    }

    #[test]
    fn numbers_coerce_like_direct_accessors() {
        assert_eq!(JsonValue::Int(7).to_i64(), Some(7));
        assert_eq!(JsonValue::Float(1.9).to_i64(), Some(1));
        assert_eq!(JsonValue::Float(i64::MAX as f64).to_i64(), None);
        assert_eq!(JsonValue::Int(7).to_f64(), Some(7.0));
        assert_eq!(JsonValue::Float(2.5).to_f64(), Some(2.5));
    }

    #[test]
    fn numeric_strings_coerce_to_f64() {
        assert_eq!(JsonValue::from("3.14").to_f64(), Some(3.14));
        assert_eq!(JsonValue::from("-2e3").to_f64(), Some(-2000.0));
        assert_eq!(JsonValue::from("3.14x").to_f64(), None);
        assert_eq!(JsonValue::from("abc").to_f64(), None);
    }

    #[test]
    fn bool_and_null_never_coerce_to_numbers() {
        for value in [JsonValue::Null, JsonValue::Bool(true)] {
            assert_eq!(value.to_i64(), None, "{value:?}");
            assert_eq!(value.to_f64(), None, "{value:?}");
        }
    }
}
