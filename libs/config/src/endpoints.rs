//! Per-network service endpoints
//!
//! Baked defaults with an environment-variable escape hatch for staging
//! and local mock servers. An explicit override always wins over the
//! network default.

use std::env;

use foresight_types::Network;
use tracing::debug;

/// Overrides the listing API base URL for every network when set.
pub const LISTING_URL_ENV: &str = "FORESIGHT_LISTING_URL";

pub const LISTING_API_MAINNET: &str = "https://api-v1.foresight.markets";
pub const LISTING_API_TESTNET: &str = "https://api-v1.staging.foresight.markets";

/// Base URL of the market-listing service for `network`.
pub fn listing_base_url(network: Network) -> String {
    resolve_listing(network, env::var(LISTING_URL_ENV).ok())
}

fn resolve_listing(network: Network, override_url: Option<String>) -> String {
    if let Some(url) = override_url {
        debug!(%url, "listing endpoint overridden from environment");
        return url;
    }
    match network {
        Network::Mainnet => LISTING_API_MAINNET.to_string(),
        Network::Testnet => LISTING_API_TESTNET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn networks_map_to_their_default_endpoints() {
        assert_eq!(resolve_listing(Network::Mainnet, None), LISTING_API_MAINNET);
        assert_eq!(resolve_listing(Network::Testnet, None), LISTING_API_TESTNET);
    }

    #[test]
    fn environment_override_wins_over_network_default() {
        let url = resolve_listing(
            Network::Mainnet,
            Some("http://localhost:8080".to_string()),
        );
        assert_eq!(url, "http://localhost:8080");
    }
}
