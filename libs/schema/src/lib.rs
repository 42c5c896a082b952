//! # Foresight Schema - Typed Access Boundaries
//!
//! Generic validation layer between untyped external data (HTTP
//! responses, ledger call results, user-supplied parameters) and typed
//! client code. Any value crossing a wrapped boundary either conforms
//! to its declared shape or the call fails with a diagnostic naming
//! every violated field.
//!
//! ## Components
//!
//! - [`shape`] — composable, immutable shape declarations
//! - [`validate`] — the validate-or-reject primitive with full
//!   violation accumulation
//! - [`error`] — violation records and the deterministic
//!   `"<context>: <path>: <reason>; ..."` message format
//! - [`boundary`] — input/output validation wrapped around an
//!   arbitrary async operation, invoked exactly once per call
//! - [`plan`] — a declarative method-name → schemas table applied
//!   across a whole client at construction time
//!
//! The layer enforces structural and type conformance only; business
//! rules stay with the wrapped operations. Schemas hold no mutable
//! state, so concurrent validations against one schema need no
//! synchronization.

pub mod boundary;
pub mod error;
pub mod plan;
pub mod shape;
pub mod validate;

pub use boundary::{wrap, Boundary, BoundaryError, Wrapped};
pub use error::{format_violations, ValidationError, Violation};
pub use plan::{BoundPlan, PlanError, ValidationPlan};
pub use shape::{Field, Schema};
pub use validate::{validate, validate_params, validate_response, validate_value};
