//! Composable shape declarations
//!
//! A [`Schema`] describes the exact structure a JSON value must have to
//! cross a validated boundary. Schemas are plain data: immutable after
//! construction, cheap to clone, and safe to share across concurrent
//! validations.
//!
//! Parametrized shapes (pagination envelopes, API envelopes) are built by
//! constructor functions that take an inner schema and return a closed
//! [`Schema::Object`] — see `foresight_types::schemas` for the catalog.

use serde_json::Value;

/// One field of an [`Schema::Object`] declaration.
///
/// Field order is preserved so violation reporting is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
    pub required: bool,
}

impl Field {
    /// A field that must be present.
    pub fn required(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            required: true,
        }
    }

    /// A field that may be absent. When present it must still conform.
    pub fn optional(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
        }
    }
}

/// An accepted value shape.
///
/// Primitives are validated structurally with no coercion: the string
/// `"5"` never satisfies [`Schema::Number`]. Objects follow an open
/// policy — unknown keys are accepted so remote services can add fields
/// without breaking existing clients.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Accepts any value. Used where the remote shape is opaque.
    Any,
    /// Accepts only JSON `null`.
    Null,
    Boolean,
    /// Any JSON number.
    Number,
    /// A number with an exact integer representation.
    Integer,
    /// An integer strictly greater than zero.
    PositiveInteger,
    /// An integer greater than or equal to zero.
    NonNegativeInteger,
    String,
    /// A string with at least one character (addresses, identifiers).
    NonEmptyString,
    /// A fixed set of literals, matched by deep equality.
    Enumeration(Vec<Value>),
    /// An ordered set of named fields. Unknown keys are accepted.
    Object(Vec<Field>),
    /// The element schema applied to every position of an array.
    Sequence(Box<Schema>),
    /// The value must satisfy at least one alternative.
    Union(Vec<Schema>),
}

impl Schema {
    pub fn object(fields: Vec<Field>) -> Self {
        Schema::Object(fields)
    }

    pub fn sequence(element: Schema) -> Self {
        Schema::Sequence(Box::new(element))
    }

    pub fn union(alternatives: Vec<Schema>) -> Self {
        Schema::Union(alternatives)
    }

    pub fn enumeration(literals: Vec<Value>) -> Self {
        Schema::Enumeration(literals)
    }

    /// Wraps a schema so that `null` is also accepted.
    pub fn nullable(self) -> Self {
        Schema::Union(vec![self, Schema::Null])
    }
}
