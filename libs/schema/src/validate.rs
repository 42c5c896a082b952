//! The validate-or-reject primitive
//!
//! A single recursive dispatch over [`Schema`]: given a schema and an
//! arbitrary JSON value, return the value unchanged or every violation
//! found. Traversal is depth-first in field-declaration order and never
//! stops at the first error, except inside [`Schema::Union`] and
//! [`Schema::Enumeration`], which report one terse `no alternative
//! matched` violation instead of every branch's failures.
//!
//! Validation is pure and takes the schema by shared reference, so one
//! schema can serve arbitrarily many concurrent validations.

use serde_json::Value;

use crate::error::{ValidationError, Violation};
use crate::shape::Schema;

/// Validates `value` against `schema`.
///
/// On success the returned value is deep-equal to the input: primitives
/// are matched structurally with no coercion, and unknown object keys
/// are carried through untouched. On failure the violation list is
/// ordered and non-empty.
pub fn validate(schema: &Schema, value: &Value) -> Result<Value, Vec<Violation>> {
    let mut violations = Vec::new();
    check(schema, value, "", &mut violations);
    if violations.is_empty() {
        Ok(value.clone())
    } else {
        Err(violations)
    }
}

/// Validates and converts failure into a [`ValidationError`] labelled
/// with `context`.
pub fn validate_value(
    schema: &Schema,
    value: &Value,
    context: &str,
) -> Result<Value, ValidationError> {
    validate(schema, value).map_err(|violations| ValidationError::new(context, violations))
}

/// Input-side validation for a named operation.
pub fn validate_params(
    schema: &Schema,
    value: &Value,
    method: &str,
) -> Result<Value, ValidationError> {
    validate_value(schema, value, &format!("Invalid parameters for {method}"))
}

/// Output-side validation for a named operation.
pub fn validate_response(
    schema: &Schema,
    value: &Value,
    method: &str,
) -> Result<Value, ValidationError> {
    validate_value(schema, value, &format!("Invalid response from {method}"))
}

fn check(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match schema {
        Schema::Any => {}
        Schema::Null => {
            if !value.is_null() {
                out.push(Violation::new(path, "expected null"));
            }
        }
        Schema::Boolean => {
            if !value.is_boolean() {
                out.push(Violation::new(path, "expected boolean"));
            }
        }
        Schema::Number => {
            if !value.is_number() {
                out.push(Violation::new(path, "expected number"));
            }
        }
        Schema::Integer => {
            if as_integer(value).is_none() {
                out.push(Violation::new(path, "expected integer"));
            }
        }
        Schema::PositiveInteger => match as_integer(value) {
            Some(n) if n > 0 => {}
            _ => out.push(Violation::new(path, "expected positive integer")),
        },
        Schema::NonNegativeInteger => match as_integer(value) {
            Some(n) if n >= 0 => {}
            _ => out.push(Violation::new(path, "expected non-negative integer")),
        },
        Schema::String => {
            if !value.is_string() {
                out.push(Violation::new(path, "expected string"));
            }
        }
        Schema::NonEmptyString => match value {
            Value::String(s) if s.is_empty() => {
                out.push(Violation::new(path, "must not be empty"));
            }
            Value::String(_) => {}
            _ => out.push(Violation::new(path, "expected string")),
        },
        Schema::Enumeration(literals) => {
            if !literals.iter().any(|literal| literal == value) {
                out.push(Violation::new(path, "no alternative matched"));
            }
        }
        Schema::Object(fields) => match value {
            Value::Object(map) => {
                for field in fields {
                    let field_path = join(path, &field.name);
                    match map.get(&field.name) {
                        Some(candidate) => check(&field.schema, candidate, &field_path, out),
                        None if field.required => {
                            out.push(Violation::new(field_path, "required"));
                        }
                        None => {}
                    }
                }
            }
            _ => out.push(Violation::new(path, "expected object")),
        },
        Schema::Sequence(element) => match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    check(element, item, &join(path, &index.to_string()), out);
                }
            }
            _ => out.push(Violation::new(path, "expected array")),
        },
        Schema::Union(alternatives) => {
            let matched = alternatives.iter().any(|alternative| {
                let mut probe = Vec::new();
                check(alternative, value, path, &mut probe);
                probe.is_empty()
            });
            if !matched {
                out.push(Violation::new(path, "no alternative matched"));
            }
        }
    }
}

/// Largest magnitude at which every f64 still represents one exact
/// integer (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integer view of a JSON number. Covers float-encoded integers like
/// `3.0`, since JSON does not distinguish them from `3`; fractional
/// values, floats beyond the exact range, and non-numbers return
/// `None`.
fn as_integer(value: &Value) -> Option<i128> {
    if let Some(n) = value.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = value.as_u64() {
        return Some(i128::from(n));
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Some(f as i128),
        _ => None,
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
