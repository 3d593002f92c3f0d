//! Inferred Go type tree.
//!
//! [`Kind`] is the shallow classification of a single JSON value and is what
//! the unifier reconciles across array elements. [`TypeTag`] is the deep type
//! the emitter renders: slices carry their element type and structs carry
//! their [`FieldSet`].

use crate::naming::format_identifier;

/// Shallow type of one JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`, or a conflict with no common primitive type.
    Any,
    Bool,
    Str,
    /// A string containing an ISO-8601 date-time.
    Timestamp,
    /// Integral number in the open range (-2147483648, 2147483647).
    Int,
    /// Any other integral number.
    Int64,
    /// Number written with a fractional part.
    Real,
    Slice,
    Struct,
}

impl Kind {
    /// True for `Int` and `Int64`.
    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Int | Kind::Int64)
    }
}

/// Deep type of a JSON value, ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    Any,
    Bool,
    Str,
    Timestamp,
    Int,
    Int64,
    Real,
    Slice(Box<TypeTag>),
    Struct(FieldSet),
}

impl TypeTag {
    /// Lift a scalar kind into a type tag.
    ///
    /// Slices and structs need the underlying value and go through
    /// [`crate::infer::infer_type`]; passing their kinds here is a bug.
    pub(crate) fn from_scalar_kind(kind: Kind) -> Self {
        match kind {
            Kind::Any => TypeTag::Any,
            Kind::Bool => TypeTag::Bool,
            Kind::Str => TypeTag::Str,
            Kind::Timestamp => TypeTag::Timestamp,
            Kind::Int => TypeTag::Int,
            Kind::Int64 => TypeTag::Int64,
            Kind::Real => TypeTag::Real,
            Kind::Slice | Kind::Struct => {
                unreachable!("structural kind {kind:?} lifted without its value")
            }
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            TypeTag::Any => Kind::Any,
            TypeTag::Bool => Kind::Bool,
            TypeTag::Str => Kind::Str,
            TypeTag::Timestamp => Kind::Timestamp,
            TypeTag::Int => Kind::Int,
            TypeTag::Int64 => Kind::Int64,
            TypeTag::Real => Kind::Real,
            TypeTag::Slice(_) => Kind::Slice,
            TypeTag::Struct(_) => Kind::Struct,
        }
    }
}

/// One struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Exported Go identifier derived from `key`.
    pub name: String,
    /// Original, unformatted JSON key. Emitted verbatim in the `json` tag.
    pub key: String,
    pub ty: TypeTag,
    /// Absent from at least one element of the array the struct came from.
    pub optional: bool,
}

impl Field {
    pub fn new(key: &str, ty: TypeTag, optional: bool) -> Self {
        Self {
            name: format_identifier(key),
            key: key.to_string(),
            ty,
            optional,
        }
    }
}

/// Fields of a struct in first-seen key order.
///
/// Entries are unique by original key. Identifiers may collide when two keys
/// format to the same name; both fields are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look a field up by its original JSON key.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
