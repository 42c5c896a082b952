//! # Foresight Centralized Configuration
//!
//! Per-network endpoints and deployed contract addresses shared by all
//! Foresight clients, so no client crate carries its own copy of the
//! constants. Environment variables override the baked defaults for
//! staging and local testing.

pub mod contracts;
pub mod endpoints;

pub use contracts::{contract_addresses, ContractAddresses};
pub use endpoints::{listing_base_url, LISTING_URL_ENV};
