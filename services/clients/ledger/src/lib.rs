//! # Ledger Client
//!
//! Typed client for the Foresight prediction-market contract. Market
//! queries, trades, liquidity, and claims run through validation
//! boundaries; the chain transport is supplied by the embedder through
//! the [`ContractCaller`] trait, so this crate carries no node
//! connection, signing, or gas logic of its own.
//!
//! [`ContractCaller`]: caller::ContractCaller

pub mod caller;
pub mod client;
pub mod error;

pub use caller::{CallerError, ContractCaller};
pub use client::{LedgerConfig, PredictionMarketClient};
pub use error::LedgerError;
