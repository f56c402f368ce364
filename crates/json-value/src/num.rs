//! Numeric range policy and numeric-string parsing shared by the accessors.

/// Converts a float to `i64`, truncating toward zero.
///
/// Returns `None` for NaN and for anything outside the `i64` range. The
/// upper bound is checked with `>=` because `i64::MAX as f64` rounds up to
/// 2^63, one past the true maximum; a truncating cast at that value would be
/// out of range. `i64::MIN as f64` is exact, so the lower bound admits
/// equality. Out-of-range inputs are rejected, never clamped.
pub(crate) fn f64_to_i64(d: f64) -> Option<i64> {
    if d.is_nan() || d >= i64::MAX as f64 || d < i64::MIN as f64 {
        return None;
    }
    Some(d as i64)
}

/// Parses an entire string as an `i64`-valued number.
///
/// Tries a base-10 integer literal first, then a float literal followed by
/// [`f64_to_i64`]. The whole string must match one of the two grammars;
/// trailing garbage fails both and yields `None`.
pub(crate) fn parse_i64(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    s.parse::<f64>().ok().and_then(f64_to_i64)
}

/// Parses an entire string as a float literal, `None` on any leftover input.
pub(crate) fn parse_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}
