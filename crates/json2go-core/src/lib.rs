//! # json2go-core
//!
//! Infer a Go type declaration from an example JSON document.
//!
//! Given any JSON value, the crate works out a structural type for it (structs
//! for objects, slices for arrays, Go primitives for scalars) and renders it as
//! a single `type` declaration with nested structs inlined and `json` struct
//! tags carrying the original keys.
//!
//! ## Quick start
//!
//! ```rust
//! use json2go_core::convert;
//!
//! let out = convert(r#"[{"a":1},{"a":1,"b":2.0}]"#, None);
//! assert_eq!(
//!     out.go,
//!     "type AutoGenerated []struct {\n\tA int `json:\"a\"`\n\tB float64 `json:\"b,omitempty\"`\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`preprocess`] — `.0` → `.1` rewrite and JSON parsing
//! - [`infer`] — type inference, unification, field aggregation
//! - [`naming`] — JSON key → exported Go identifier
//! - [`emitter`] — type tree → Go source text
//! - [`convert`](mod@convert) — entry points and options
//! - [`types`] — `Kind`, `TypeTag`, `FieldSet`
//! - [`error`] — error types

pub mod convert;
pub mod emitter;
pub mod error;
pub mod infer;
pub mod naming;
pub mod preprocess;
pub mod types;

pub use convert::{
    convert, convert_with, try_convert, Conversion, ConvertOptions, DEFAULT_TYPE_NAME,
};
pub use error::ConvertError;
pub use infer::{infer_type, unify};
pub use naming::{format_identifier, NAMING_FAILED};
pub use types::{Field, FieldSet, Kind, TypeTag};
