//! Listing client errors

use foresight_schema::{BoundaryError, PlanError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    /// A value was rejected at a validation boundary. The message
    /// carries the full violation list.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with `success: false`.
    #[error("listing service error {code} ({status}): {message}")]
    Api {
        status: i64,
        code: String,
        message: String,
    },

    /// The envelope reported success but carried no payload.
    #[error("listing response for {method} carried no data")]
    EmptyEnvelope { method: String },

    #[error("listing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid listing endpoint {url}: {source}")]
    Endpoint {
        url: String,
        source: url::ParseError,
    },

    #[error("could not decode listing response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<BoundaryError<ListingError>> for ListingError {
    fn from(err: BoundaryError<ListingError>) -> Self {
        match err {
            BoundaryError::Validation(e) => ListingError::Validation(e),
            BoundaryError::Operation(e) => e,
        }
    }
}
