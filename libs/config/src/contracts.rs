//! Deployed contract addresses per network

use std::collections::BTreeMap;

use foresight_types::{Address, Network};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Addresses of the prediction-market deployment on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    pub prediction_market: Address,
    pub prediction_market_querier: Address,
    /// Settlement tokens by ticker.
    pub tokens: BTreeMap<String, Address>,
}

static MAINNET: Lazy<ContractAddresses> = Lazy::new(|| ContractAddresses {
    prediction_market: "0x4f4988a910f8ae9b3214149a8ea1f2e4e3cd93cc".to_string(),
    prediction_market_querier: "0x710F30AbDADB86A33faE984d6678d4Ed31517B18".to_string(),
    tokens: BTreeMap::from([
        (
            "USDC.e".to_string(),
            "0x84A71ccD554Cc1b02749b35d22F684CC8ec987e1".to_string(),
        ),
        (
            "PENGU".to_string(),
            "0x9eBe3A824Ca958e4b3Da772D2065518F009CBa62".to_string(),
        ),
        (
            "PTS".to_string(),
            "0xf19609e96187cdaa34cffb96473fac567e547302".to_string(),
        ),
    ]),
});

static TESTNET: Lazy<ContractAddresses> = Lazy::new(|| ContractAddresses {
    prediction_market: "0x7accb94c8dd59c8e308e83053ee6cdd770714f37".to_string(),
    prediction_market_querier: "0x05e1ff194c9bb3f04a0ddb7551f4f9e1c441f235".to_string(),
    tokens: BTreeMap::from([
        (
            "USDC".to_string(),
            "0x8820c84FD53663C2e2EA26e7a4c2b79dCc479765".to_string(),
        ),
        (
            "PENGU".to_string(),
            "0x6ccDDCf494182a3A237ac3f33A303a57961FaF55".to_string(),
        ),
        (
            "PTS".to_string(),
            "0x58c8b28089a8cc0A9Ad4d79342C5E432452614C0".to_string(),
        ),
    ]),
});

/// Contract deployment for `network`.
pub fn contract_addresses(network: Network) -> &'static ContractAddresses {
    match network {
        Network::Mainnet => &MAINNET,
        Network::Testnet => &TESTNET,
    }
}
