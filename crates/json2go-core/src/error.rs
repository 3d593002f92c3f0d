//! Error types for JSON-to-Go conversion.

use thiserror::Error;

/// Errors that can occur while converting a JSON document.
///
/// Only the front of the pipeline can fail. Once a document has been parsed,
/// inference, field aggregation, naming and emission are total.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input string was not valid JSON. Displays serde_json's message as is.
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    /// The input exceeded the configured `max_input_bytes` guard.
    #[error("input is {len} bytes, limit is {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
}

/// Convenience alias used throughout json2go-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
