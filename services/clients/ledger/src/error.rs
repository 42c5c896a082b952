//! Ledger client errors

use foresight_schema::{BoundaryError, PlanError, ValidationError};
use thiserror::Error;

use crate::caller::CallerError;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A value was rejected at a validation boundary.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The chain transport failed; passed through unchanged.
    #[error(transparent)]
    Caller(#[from] CallerError),

    #[error("could not decode contract result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<BoundaryError<CallerError>> for LedgerError {
    fn from(err: BoundaryError<CallerError>) -> Self {
        match err {
            BoundaryError::Validation(e) => LedgerError::Validation(e),
            BoundaryError::Operation(e) => LedgerError::Caller(e),
        }
    }
}
