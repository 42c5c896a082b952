//! Boundary wrapping of arbitrary operations
//!
//! A [`Boundary`] applies input validation before an operation runs and
//! output validation after it resolves, failing the whole call on either
//! side. The operation itself is a closure, so receiver state is
//! observed exactly as in an unwrapped call. The wrapper invokes the
//! operation exactly once per call and adds no retry, timeout, or
//! locking behaviour; the only suspension point is the operation's own
//! future.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::ValidationError;
use crate::shape::Schema;
use crate::validate::{validate_params, validate_response};

/// Failure of a wrapped call.
///
/// Operation failures pass through unchanged — validation wrapping never
/// swallows or reinterprets them.
#[derive(Debug, Error)]
pub enum BoundaryError<E> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Operation(E),
}

/// Input/output validation around one named operation.
///
/// Either schema may be omitted; that side becomes a pass-through. The
/// context label appears in every diagnostic this boundary produces.
#[derive(Debug, Clone)]
pub struct Boundary {
    input: Option<Schema>,
    output: Option<Schema>,
    context: String,
}

impl Boundary {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            input: None,
            output: None,
            context: context.into(),
        }
    }

    pub fn with_input(mut self, schema: Schema) -> Self {
        self.input = Some(schema);
        self
    }

    pub fn with_output(mut self, schema: Schema) -> Self {
        self.output = Some(schema);
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Runs `op` with its first argument validated against the input
    /// schema and its resolved result validated against the output
    /// schema.
    ///
    /// On input failure the operation body is never invoked and the
    /// error message carries the `Invalid parameters for <context>`
    /// prefix. On output failure — even though the operation itself
    /// succeeded — the call fails with the `Invalid response from
    /// <context>` prefix: a malformed upstream response is a failure of
    /// the call, not a partial success.
    pub async fn call<F, Fut, E>(&self, params: Value, op: F) -> Result<Value, BoundaryError<E>>
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let params = match &self.input {
            Some(schema) => self.reject_logged(validate_params(schema, &params, &self.context))?,
            None => params,
        };

        let result = op(params).await.map_err(BoundaryError::Operation)?;

        match &self.output {
            Some(schema) => {
                Ok(self.reject_logged(validate_response(schema, &result, &self.context))?)
            }
            None => Ok(result),
        }
    }

    /// Runs a zero-argument operation. With no argument supplied, input
    /// validation is skipped; the output side behaves as in [`call`].
    ///
    /// [`call`]: Boundary::call
    pub async fn call_noargs<F, Fut, E>(&self, op: F) -> Result<Value, BoundaryError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let result = op().await.map_err(BoundaryError::Operation)?;
        match &self.output {
            Some(schema) => {
                Ok(self.reject_logged(validate_response(schema, &result, &self.context))?)
            }
            None => Ok(result),
        }
    }

    fn reject_logged(&self, outcome: Result<Value, ValidationError>) -> Result<Value, ValidationError> {
        if let Err(err) = &outcome {
            debug!(
                context = %self.context,
                violations = err.violations.len(),
                "value rejected at boundary"
            );
        }
        outcome
    }
}

/// An operation bundled with its boundary: the runtime artifact of
/// [`wrap`]. Immutable once constructed.
pub struct Wrapped<F> {
    boundary: Boundary,
    op: F,
}

/// Wraps `op` with optional input/output validation under the given
/// context label. The wrapped operation keeps its call shape.
pub fn wrap<F>(
    input: Option<Schema>,
    output: Option<Schema>,
    context: impl Into<String>,
    op: F,
) -> Wrapped<F> {
    let mut boundary = Boundary::new(context);
    if let Some(schema) = input {
        boundary = boundary.with_input(schema);
    }
    if let Some(schema) = output {
        boundary = boundary.with_output(schema);
    }
    Wrapped { boundary, op }
}

impl<F> Wrapped<F> {
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub async fn call<Fut, E>(&self, params: Value) -> Result<Value, BoundaryError<E>>
    where
        F: Fn(Value) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        self.boundary.call(params, &self.op).await
    }
}
