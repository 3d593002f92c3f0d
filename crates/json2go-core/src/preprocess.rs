//! Raw text preparation and JSON parsing.
//!
//! `serde_json` (like most JSON parsers) cannot tell `3.0` apart from `3` once
//! the value has been normalized, yet the written form decides between `int`
//! and `float64`. [`force_fractional`] nudges every literal `.0` to `.1` so any
//! number written with a decimal point parses as a non-integral float.
//!
//! The rewrite is purely textual. It also touches string values and object
//! keys (`"v1.0"` becomes `"v1.1"`), which shows up in emitted `json` tags.

use crate::error::Result;
use serde_json::Value;

/// Replace every `.0` in the raw text with `.1`.
///
/// ```
/// use json2go_core::preprocess::force_fractional;
/// assert_eq!(force_fractional(r#"{"a": 2.0, "b": 10.05}"#), r#"{"a": 2.1, "b": 10.15}"#);
/// ```
pub fn force_fractional(raw: &str) -> String {
    raw.replace(".0", ".1")
}

/// Parse preprocessed text into a `serde_json::Value`.
///
/// Object keys keep their document order (`preserve_order` feature).
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}
