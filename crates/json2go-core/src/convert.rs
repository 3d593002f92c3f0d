//! Conversion entry points.
//!
//! [`convert`] is the infallible front door used by the bindings: errors are
//! reported in [`Conversion::error`] and never escape. [`try_convert`] is the
//! `Result`-returning core that the other entry points wrap.

use crate::emitter::declaration;
use crate::error::{ConvertError, Result};
use crate::infer::infer_type;
use crate::naming::format_identifier;
use crate::preprocess::{force_fractional, parse};
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};

/// Root type name used when none (or an empty one) is given.
pub const DEFAULT_TYPE_NAME: &str = "AutoGenerated";

/// Conversion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Name of the top-level type. Formatted like any other identifier.
    pub type_name: Option<String>,
    /// Reject inputs longer than this many bytes before parsing.
    pub max_input_bytes: Option<usize>,
}

impl ConvertOptions {
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// The formatted root type name.
    pub fn root_name(&self) -> String {
        match self.type_name.as_deref() {
            Some(name) if !name.is_empty() => format_identifier(name),
            _ => DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

/// Outcome of a conversion.
///
/// On success `go` holds the declaration and `error` is `None`. On failure
/// `go` is empty and `error` holds the message; there is no partial output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub go: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<String>> for Conversion {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(go) => Conversion { go, error: None },
            Err(e) => Conversion {
                go: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Convert a JSON document into a Go type declaration.
///
/// # Example
/// ```
/// use json2go_core::convert;
///
/// let out = convert(r#"{"id": 1, "name": "Bob"}"#, Some("User"));
/// assert_eq!(
///     out.go,
///     "type User struct {\n\tID int `json:\"id\"`\n\tName string `json:\"name\"`\n}"
/// );
/// assert!(out.error.is_none());
/// ```
pub fn convert(json: &str, type_name: Option<&str>) -> Conversion {
    let options = ConvertOptions {
        type_name: type_name.map(str::to_string),
        ..ConvertOptions::default()
    };
    convert_with(json, &options)
}

/// Like [`convert`], with full options.
pub fn convert_with(json: &str, options: &ConvertOptions) -> Conversion {
    try_convert(json, options).into()
}

/// Convert, returning the error instead of folding it into a [`Conversion`].
pub fn try_convert(json: &str, options: &ConvertOptions) -> Result<String> {
    if let Some(limit) = options.max_input_bytes {
        if json.len() > limit {
            tracing::debug!(len = json.len(), limit, "input over size limit");
            return Err(ConvertError::InputTooLarge {
                len: json.len(),
                limit,
            });
        }
    }

    let value = parse(&force_fractional(json)).inspect_err(|e| {
        tracing::debug!(error = %e, "input is not valid JSON");
    })?;
    let tag = infer_type(&value);
    let name = options.root_name();
    tracing::debug!(
        type_name = %name,
        kind = ?tag.kind(),
        top_level_fields = top_level_fields(&tag),
        "inferred root type"
    );
    Ok(declaration(&name, &tag))
}

/// Field count of the outermost struct, looking through slices.
fn top_level_fields(tag: &TypeTag) -> usize {
    match tag {
        TypeTag::Struct(fields) => fields.len(),
        TypeTag::Slice(elem) => top_level_fields(elem),
        _ => 0,
    }
}
