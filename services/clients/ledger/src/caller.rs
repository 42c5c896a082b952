//! Chain transport seam
//!
//! The client never talks to a node directly; it hands contract method
//! names and JSON-shaped arguments to a [`ContractCaller`] and gets
//! JSON-shaped results back. Implementations own the connection,
//! signing, gas, and confirmation policy.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failure reported by a caller implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallerError {
    #[error("provider connection failed: {0}")]
    Connection(String),

    #[error("contract call reverted: {0}")]
    Reverted(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Read-only contract call. `method` is the contract's wire name,
    /// e.g. `getMarketData`.
    async fn query(&self, method: &str, params: Value) -> Result<Value, CallerError>;

    /// State-changing contract call. Resolves once the transaction has
    /// been submitted, with at least a `hash` field in the result.
    async fn transact(&self, method: &str, params: Value) -> Result<Value, CallerError>;

    /// Address of the connected signing wallet, as a JSON string.
    async fn signer_address(&self) -> Result<Value, CallerError>;
}
