//! # Listing Client
//!
//! Typed client for the Foresight market-listing HTTP API. Listings,
//! single-market lookups by id or slug, filtering and pagination — all
//! behind validation boundaries so malformed service answers surface as
//! diagnostics instead of bad data.

pub mod client;
pub mod error;

pub use client::{ListingClient, ListingConfig};
pub use error::ListingError;
