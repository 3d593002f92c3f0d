//! Go source emitter.
//!
//! Renders a [`TypeTag`] tree as Go type syntax. Each call returns its own
//! fragment and callers concatenate, so any subtree can be rendered on its
//! own. Nested structs are inlined, never hoisted to named types.
//!
//! # Example
//! ```
//! use json2go_core::emitter::render;
//! use json2go_core::types::TypeTag;
//!
//! let tag = TypeTag::Slice(Box::new(TypeTag::Real));
//! assert_eq!(render(&tag, 0), "[]float64");
//! ```

use crate::types::{Field, TypeTag};

/// Render a complete declaration: `type <name> <type>`.
///
/// `name` must already be a formatted identifier.
pub fn declaration(name: &str, tag: &TypeTag) -> String {
    format!("type {} {}", name, render(tag, 0))
}

/// Render a type at the given struct nesting depth.
///
/// Depth only matters for structs: their fields are indented `depth + 1`
/// tabs and the closing brace `depth` tabs.
pub fn render(tag: &TypeTag, depth: usize) -> String {
    match tag {
        TypeTag::Slice(elem) => format!("[]{}", render(elem, depth)),
        TypeTag::Struct(fields) => {
            let mut out = String::from("struct {\n");
            for field in fields {
                out.push_str(&render_field(field, depth + 1));
            }
            out.push_str(&make_indent(depth));
            out.push('}');
            out
        }
        TypeTag::Any => "interface{}".to_string(),
        TypeTag::Bool => "bool".to_string(),
        TypeTag::Str => "string".to_string(),
        TypeTag::Timestamp => "time.Time".to_string(),
        TypeTag::Int => "int".to_string(),
        TypeTag::Int64 => "int64".to_string(),
        TypeTag::Real => "float64".to_string(),
    }
}

/// One struct field line, newline included.
fn render_field(field: &Field, depth: usize) -> String {
    format!(
        "{}{} {} {}\n",
        make_indent(depth),
        field.name,
        render(&field.ty, depth),
        struct_tag(field)
    )
}

/// The `json` struct tag, carrying the original key.
fn struct_tag(field: &Field) -> String {
    let omitempty = if field.optional { ",omitempty" } else { "" };
    format!("`json:\"{}{}\"`", field.key, omitempty)
}

/// One tab per nesting level.
fn make_indent(depth: usize) -> String {
    "\t".repeat(depth)
}
