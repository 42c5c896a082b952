//! Ledger contract records
//!
//! Shapes crossing the prediction-market contract boundary: query
//! results, trade parameters, and transaction receipts. The contract
//! reports amounts as decimal strings once they exceed what a JSON
//! number carries, so quantity fields are a string-or-number union.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A contract address or user wallet address, hex-encoded.
pub type Address = String;

/// A chain quantity: decimal string for large values, plain number for
/// small ones. No arithmetic happens on this side of the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BigNumberish {
    Text(String),
    Num(Number),
}

impl fmt::Display for BigNumberish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumberish::Text(s) => f.write_str(s),
            BigNumberish::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for BigNumberish {
    fn from(value: &str) -> Self {
        BigNumberish::Text(value.to_string())
    }
}

impl From<String> for BigNumberish {
    fn from(value: String) -> Self {
        BigNumberish::Text(value)
    }
}

impl From<u64> for BigNumberish {
    fn from(value: u64) -> Self {
        BigNumberish::Num(Number::from(value))
    }
}

impl From<i64> for BigNumberish {
    fn from(value: i64) -> Self {
        BigNumberish::Num(Number::from(value))
    }
}

/// On-chain market state, encoded as an integer by the contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum MarketState {
    Open = 0,
    Closed = 1,
    Resolved = 2,
    Voided = 3,
}

impl MarketState {
    pub const ALL: [MarketState; 4] = [
        MarketState::Open,
        MarketState::Closed,
        MarketState::Resolved,
        MarketState::Voided,
    ];
}

/// Action codes the contract emits in its event log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum MarketAction {
    Buy = 0,
    Sell = 1,
    AddLiquidity = 2,
    RemoveLiquidity = 3,
    ClaimWinnings = 4,
    ClaimLiquidity = 5,
    ClaimFees = 6,
    ClaimVoided = 7,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub state: MarketState,
    pub closes_at: BigNumberish,
    pub outcomes: BigNumberish,
    pub liquidity: BigNumberish,
    pub fee: BigNumberish,
    /// int256 on chain; -1 (unresolved) maps to a plain signed integer.
    pub resolved_outcome_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAltData {
    pub closes_at: BigNumberish,
    /// bytes32 question identifier.
    pub question_id: String,
    pub outcomes: BigNumberish,
    pub token: Address,
    pub fee: BigNumberish,
    pub treasury: Address,
    pub realitio: Address,
    pub realitio_timeout: BigNumberish,
    pub manager: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOutcomeData {
    pub price: BigNumberish,
    pub shares: BigNumberish,
    pub total_shares: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPricesData {
    pub liquidity_price: BigNumberish,
    pub outcome_prices: Vec<BigNumberish>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSharesData {
    pub liquidity_shares: BigNumberish,
    pub outcome_shares: Vec<BigNumberish>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaimStatus {
    pub claimed_winnings: bool,
    pub claimed_liquidity: bool,
    pub claimed_fees: bool,
    pub claimed_voided: bool,
    pub resolved_outcome_id: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMarketShares {
    pub liquidity_pool_shares: BigNumberish,
    pub outcome_shares: Vec<BigNumberish>,
}

/// Everything needed to create a market on chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketDescription {
    pub value: BigNumberish,
    pub closes_at: BigNumberish,
    pub outcomes: BigNumberish,
    pub token: Address,
    pub distribution: Vec<BigNumberish>,
    pub question: String,
    pub image: String,
    pub arbitrator: Address,
    pub fee: BigNumberish,
    pub treasury_fee: BigNumberish,
    pub treasury: Address,
    pub realitio: Address,
    pub realitio_timeout: BigNumberish,
    pub manager: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyParams {
    pub market_id: BigNumberish,
    pub outcome_id: BigNumberish,
    pub min_outcome_shares_to_buy: BigNumberish,
    pub value: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellParams {
    pub market_id: BigNumberish,
    pub outcome_id: BigNumberish,
    pub value: BigNumberish,
    pub max_outcome_shares_to_sell: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidityParams {
    pub market_id: BigNumberish,
    pub value: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLiquidityParams {
    pub market_id: BigNumberish,
    pub shares: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimParams {
    pub market_id: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimVoidedParams {
    pub market_id: BigNumberish,
    pub outcome_id: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcBuyAmountParams {
    pub amount: BigNumberish,
    pub market_id: BigNumberish,
    pub outcome_id: BigNumberish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcSellAmountParams {
    pub amount: BigNumberish,
    pub market_id: BigNumberish,
    pub outcome_id: BigNumberish,
}

/// Submitted transaction identifier. Confirmation tracking belongs to
/// the caller implementation, not to this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMarket {
    pub market_id: String,
    pub liquidity_pool_shares: BigNumberish,
    pub outcome_shares: Vec<BigNumberish>,
    pub claim_status: UserClaimStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub markets: Vec<PortfolioMarket>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn big_numberish_accepts_strings_and_numbers() {
        let text: BigNumberish = serde_json::from_value(json!("1000000000000000000")).unwrap();
        assert_eq!(text, BigNumberish::from("1000000000000000000"));

        let num: BigNumberish = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(num, BigNumberish::from(42u64));
    }

    #[test]
    fn market_state_round_trips_through_integers() {
        assert_eq!(serde_json::to_value(MarketState::Resolved).unwrap(), json!(2));
        let state: MarketState = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(state, MarketState::Voided);
        assert!(serde_json::from_value::<MarketState>(json!(9)).is_err());
    }

    #[test]
    fn market_actions_keep_their_event_log_codes() {
        assert_eq!(u8::from(MarketAction::Buy), 0);
        assert_eq!(u8::from(MarketAction::ClaimVoided), 7);
        let action: MarketAction = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(action, MarketAction::ClaimWinnings);
    }

    #[test]
    fn market_data_deserializes_from_contract_shape() {
        let raw = json!({
            "state": 0,
            "closesAt": "1000000000",
            "outcomes": "2",
            "liquidity": "1000",
            "fee": "10",
            "resolvedOutcomeId": null
        });
        let data: MarketData = serde_json::from_value(raw).unwrap();
        assert_eq!(data.state, MarketState::Open);
        assert_eq!(data.resolved_outcome_id, None);
    }

    #[test]
    fn buy_params_serialize_with_wire_names() {
        let params = BuyParams {
            market_id: 7u64.into(),
            outcome_id: 1u64.into(),
            min_outcome_shares_to_buy: "100".into(),
            value: "250".into(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "marketId": 7,
                "outcomeId": 1,
                "minOutcomeSharesToBuy": "100",
                "value": "250"
            })
        );
    }
}
