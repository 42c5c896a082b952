//! Violation records and the deterministic error format
//!
//! Callers match on substrings of the rendered message, so the format is
//! a contract: `"<context>: <path>: <reason>; <path>: <reason>"`, with
//! the path and its colon omitted for top-level scalar failures.

use std::fmt;

use thiserror::Error;

/// One way a candidate value diverges from its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted field path (`"meta.currentPage"`, `"3.price"`). Empty for a
    /// top-level scalar failure.
    pub path: String,
    /// Short reason, drawn from a fixed vocabulary (`"required"`,
    /// `"expected number"`, `"no alternative matched"`, ...).
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Renders violations in input order, joined with `"; "` and prefixed
/// with the context label.
pub fn format_violations(context: &str, violations: &[Violation]) -> String {
    let joined = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{context}: {joined}")
}

/// A value failed schema conformance at a named boundary.
///
/// `Display` is exactly [`format_violations`] — the user-facing textual
/// contract. The violation list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_violations(.context, .violations))]
pub struct ValidationError {
    pub context: String,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(context: impl Into<String>, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "validation error without violations");
        Self {
            context: context.into(),
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_with_path_renders_path_colon_message() {
        let v = Violation::new("meta.currentPage", "expected positive integer");
        assert_eq!(v.to_string(), "meta.currentPage: expected positive integer");
    }

    #[test]
    fn violation_without_path_renders_bare_message() {
        let v = Violation::new("", "expected string");
        assert_eq!(v.to_string(), "expected string");
    }

    #[test]
    fn format_joins_in_input_order_with_semicolons() {
        let violations = vec![
            Violation::new("b", "required"),
            Violation::new("c", "required"),
        ];
        assert_eq!(
            format_violations("Invalid parameters for buy", &violations),
            "Invalid parameters for buy: b: required; c: required"
        );
    }

    #[test]
    fn validation_error_display_matches_format() {
        let err = ValidationError::new(
            "Invalid response from markets",
            vec![Violation::new("data", "expected array")],
        );
        assert_eq!(
            err.to_string(),
            "Invalid response from markets: data: expected array"
        );
    }
}
