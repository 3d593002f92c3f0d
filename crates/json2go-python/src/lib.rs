//! # json2go-python
//!
//! Python bindings for the JSON-to-Go converter, built with PyO3.
//!
//! Exposes the following functions to Python as the `json2go` module:
//!
//! - `convert(json, type_name=None, max_input_bytes=None)` -- JSON string -> Go declaration
//! - `convert_result(json, type_name=None)` -- JSON string -> `{"go": ..., "error": ...}` JSON

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert a JSON string into a Go type declaration.
///
/// Args:
///     json: A valid JSON string.
///     type_name: Name of the top-level Go type (default "AutoGenerated").
///     max_input_bytes: Optional size limit for the input.
///
/// Returns:
///     The Go declaration as a string.
///
/// Raises:
///     ValueError: If the input is not valid JSON or exceeds the size limit.
#[pyfunction]
#[pyo3(signature = (json, type_name=None, max_input_bytes=None))]
fn convert(
    json: &str,
    type_name: Option<String>,
    max_input_bytes: Option<usize>,
) -> PyResult<String> {
    let options = json2go_core::ConvertOptions {
        type_name,
        max_input_bytes,
    };
    json2go_core::try_convert(json, &options).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Convert without raising, returning the result object as a JSON string.
///
/// The object has a `go` field and, on failure, an `error` field; `go` is
/// empty whenever `error` is present.
///
/// Args:
///     json: Any string.
///     type_name: Name of the top-level Go type (default "AutoGenerated").
///
/// Returns:
///     A JSON string such as `{"go": "type AutoGenerated int"}`.
#[pyfunction]
#[pyo3(signature = (json, type_name=None))]
fn convert_result(json: &str, type_name: Option<&str>) -> PyResult<String> {
    let conversion = json2go_core::convert(json, type_name);
    serde_json::to_string(&conversion).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `json2go` Python module, implemented in Rust via PyO3.
#[pymodule]
fn json2go(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(convert_result, m)?)?;
    Ok(())
}
