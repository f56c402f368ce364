//! JSON value model with total accessors, coercions, and indexing.
//!
//! [`JsonValue`] is a closed sum type over the seven JSON kinds (with the
//! number kind split into `Int`/`Float` for exactness). Every operation on
//! it is a pure read-only projection: it returns the requested view wrapped
//! in `Option`, or `None` when the view does not apply. Nothing here
//! panics, throws, or clamps.
//!
//! Parsing and serialization are left to collaborators; `From` conversions
//! to and from `serde_json::Value` cover that boundary in both directions.

mod coerce;
mod convert;
mod num;
mod value;

pub use value::JsonValue;
