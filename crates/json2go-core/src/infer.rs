//! Type inference, unification and field aggregation.
//!
//! Inference is a pure walk over a `serde_json::Value`:
//!
//! - **Scalars** map directly to a [`Kind`].
//! - **Arrays** fold [`unify`] over the kinds of their elements. Heterogeneous
//!   arrays degrade to `interface{}` instead of failing.
//! - **Objects** (and arrays made only of objects) become a [`FieldSet`]; for
//!   arrays the set is the union of every element's keys, with fields missing
//!   from some element marked optional.

use crate::types::{Field, FieldSet, Kind, TypeTag};
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::sync::LazyLock;

/// ISO-8601 date-time, searched anywhere in the string (not anchored).
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?([+-][0-9]{2}:[0-9]{2}|Z)",
    )
    .expect("timestamp pattern is valid")
});

/// Exclusive bounds of the Go `int` range used for classification.
const INT_MIN: f64 = -2_147_483_648.0;
const INT_MAX: f64 = 2_147_483_647.0;

/// Classify a single value without looking inside arrays or objects.
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Any,
        Value::Bool(_) => Kind::Bool,
        Value::Number(n) => number_kind(n),
        Value::String(s) => string_kind(s),
        Value::Array(_) => Kind::Slice,
        Value::Object(_) => Kind::Struct,
    }
}

/// Infer the full type of a value, descending into arrays and objects.
pub fn infer_type(value: &Value) -> TypeTag {
    match value {
        Value::Array(items) => TypeTag::Slice(Box::new(element_type(items))),
        Value::Object(map) => TypeTag::Struct(object_fields(map)),
        scalar => TypeTag::from_scalar_kind(kind_of(scalar)),
    }
}

/// Reconcile the kinds of two sibling array elements.
///
/// Equal kinds are kept, an integer meeting a real widens to `Real`, and
/// every other disagreement (including structural ones) yields `Any`.
pub fn unify(a: Kind, b: Kind) -> Kind {
    match (a, b) {
        _ if a == b => a,
        (int, Kind::Real) | (Kind::Real, int) if int.is_integer() => Kind::Real,
        _ => Kind::Any,
    }
}

/// Common kind of all array elements, or `None` for an empty array.
///
/// The scan stops at the first `Any`: nothing narrower is reachable from it.
pub fn slice_kind(items: &[Value]) -> Option<Kind> {
    let mut kinds = items.iter().map(kind_of);
    let mut acc = kinds.next()?;
    for kind in kinds {
        acc = unify(acc, kind);
        if acc == Kind::Any {
            break;
        }
    }
    Some(acc)
}

/// Element type of an array.
///
/// Arrays of objects get the union struct from [`aggregate_fields`]. Arrays
/// of arrays take their element type from the first element only.
pub fn element_type(items: &[Value]) -> TypeTag {
    match slice_kind(items) {
        None => TypeTag::Any,
        Some(Kind::Struct) => TypeTag::Struct(aggregate_fields(items)),
        Some(Kind::Slice) => infer_type(&items[0]),
        Some(kind) => TypeTag::from_scalar_kind(kind),
    }
}

/// Fields of a single object. None of them is optional.
pub fn object_fields(map: &Map<String, Value>) -> FieldSet {
    map.iter()
        .map(|(key, value)| Field::new(key, infer_type(value), false))
        .collect()
}

/// Union of the fields of every object in `items`.
///
/// The first occurrence of a key supplies the value its type is inferred
/// from. A field is optional iff it is missing from at least one element.
/// Non-object elements contribute no keys but still count toward the total.
pub fn aggregate_fields(items: &[Value]) -> FieldSet {
    let mut seen: Vec<(&str, &Value, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for map in items.iter().filter_map(Value::as_object) {
        for (key, value) in map {
            match index.get(key.as_str()) {
                Some(&slot) => seen[slot].2 += 1,
                None => {
                    index.insert(key.as_str(), seen.len());
                    seen.push((key.as_str(), value, 1));
                }
            }
        }
    }

    let total = items.len();
    seen.into_iter()
        .map(|(key, value, count)| Field::new(key, infer_type(value), count < total))
        .collect()
}

/// Numbers are integral when stored as integers or as floats with no
/// fractional part, so `1e3` counts as an integer. Literals that overflow
/// `f64` (`1e400`) have no finite value and count as reals.
fn number_kind(n: &Number) -> Kind {
    if let Some(i) = n.as_i64() {
        return integer_kind(i as f64);
    }
    if n.is_u64() {
        // Larger than i64::MAX, far outside the int range.
        return Kind::Int64;
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => integer_kind(f),
        _ => Kind::Real,
    }
}

fn integer_kind(v: f64) -> Kind {
    if v > INT_MIN && v < INT_MAX {
        Kind::Int
    } else {
        Kind::Int64
    }
}

fn string_kind(s: &str) -> Kind {
    if TIMESTAMP.is_match(s) {
        Kind::Timestamp
    } else {
        Kind::Str
    }
}
