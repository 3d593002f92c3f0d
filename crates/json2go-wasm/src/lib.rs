//! WASM bindings for json2go-core.
//!
//! Exposes `convert` to JavaScript/TypeScript. The result mirrors the object
//! the browser UI consumes: `go` holds the declaration and `error` is
//! `undefined` on success, or the parser message on failure (with `go` empty).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p json2go-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/json2go_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Result of a conversion, as seen from JavaScript.
#[wasm_bindgen(getter_with_clone)]
pub struct JsConversion {
    pub go: String,
    pub error: Option<String>,
}

impl From<json2go_core::Conversion> for JsConversion {
    fn from(c: json2go_core::Conversion) -> Self {
        JsConversion {
            go: c.go,
            error: c.error,
        }
    }
}

/// Convert a JSON string into a Go type declaration.
///
/// The type name defaults to `AutoGenerated` when omitted or empty. Never throws.
#[wasm_bindgen]
pub fn convert(json: &str, type_name: Option<String>) -> JsConversion {
    json2go_core::convert(json, type_name.as_deref()).into()
}

/// Strict variant: returns the declaration or throws the error message.
#[wasm_bindgen(js_name = tryConvert)]
pub fn try_convert(json: &str, type_name: Option<String>) -> std::result::Result<String, JsValue> {
    let options = json2go_core::ConvertOptions {
        type_name,
        ..Default::default()
    };
    json2go_core::try_convert(json, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
