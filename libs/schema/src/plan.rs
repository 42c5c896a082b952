//! Table-driven validation across a client's methods
//!
//! The source of truth for "which methods get which schemas" is a single
//! declarative table built at client construction time, replacing
//! per-call ad-hoc wrapping. [`ValidationPlan`] collects the table;
//! [`ValidationPlan::bind`] checks it against the methods the client
//! actually declares and fails fast on a typo — a misconfigured plan is
//! a programming error, not a runtime condition. The resulting
//! [`BoundPlan`] routes planned methods through their [`Boundary`] and
//! leaves every other method completely untouched.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::boundary::{Boundary, BoundaryError};
use crate::shape::Schema;

/// Plan construction errors. Raised at bind time, never at call time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("validation plan references unknown method '{0}'")]
    UnknownMethod(String),

    #[error("validation plan declares method '{0}' twice")]
    DuplicateMethod(String),
}

/// Declarative mapping of method name to optional input/output schemas.
#[derive(Debug, Clone, Default)]
pub struct ValidationPlan {
    methods: Vec<(String, Boundary)>,
}

impl ValidationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one method entry. The method name doubles as the boundary's
    /// context label, so diagnostics read `Invalid parameters for buy`.
    pub fn method(mut self, name: &str, input: Option<Schema>, output: Option<Schema>) -> Self {
        let mut boundary = Boundary::new(name);
        if let Some(schema) = input {
            boundary = boundary.with_input(schema);
        }
        if let Some(schema) = output {
            boundary = boundary.with_output(schema);
        }
        self.methods.push((name.to_string(), boundary));
        self
    }

    /// Checks every planned name against the methods the client
    /// declares and freezes the table.
    pub fn bind(self, declared: &[&str]) -> Result<BoundPlan, PlanError> {
        let mut methods = HashMap::with_capacity(self.methods.len());
        for (name, boundary) in self.methods {
            if !declared.contains(&name.as_str()) {
                return Err(PlanError::UnknownMethod(name));
            }
            if methods.insert(name.clone(), boundary).is_some() {
                return Err(PlanError::DuplicateMethod(name));
            }
        }
        Ok(BoundPlan { methods })
    }
}

/// A frozen validation table. Shared by reference across all of a
/// client's concurrent calls.
#[derive(Debug, Clone)]
pub struct BoundPlan {
    methods: HashMap<String, Boundary>,
}

impl BoundPlan {
    pub fn boundary(&self, method: &str) -> Option<&Boundary> {
        self.methods.get(method)
    }

    /// Runs `op` through the boundary planned for `method`. Methods
    /// absent from the plan pass straight through — no implicit
    /// validation, no double wrapping.
    pub async fn run<F, Fut, E>(
        &self,
        method: &str,
        params: Value,
        op: F,
    ) -> Result<Value, BoundaryError<E>>
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        match self.methods.get(method) {
            Some(boundary) => boundary.call(params, op).await,
            None => op(params).await.map_err(BoundaryError::Operation),
        }
    }

    /// Zero-argument counterpart of [`run`]: input validation is
    /// skipped, output validation still applies.
    ///
    /// [`run`]: BoundPlan::run
    pub async fn run_noargs<F, Fut, E>(&self, method: &str, op: F) -> Result<Value, BoundaryError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        match self.methods.get(method) {
            Some(boundary) => boundary.call_noargs(op).await,
            None => op().await.map_err(BoundaryError::Operation),
        }
    }
}
