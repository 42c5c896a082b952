//! Prediction-market contract client
//!
//! Typed wrapper over the ledger contract: queries, trades, liquidity,
//! claims, and amount calculators. Every operation runs through the
//! validation plan built at construction, so arguments are checked
//! before they reach the transport and contract results are checked
//! before they become typed records. The transport itself lives behind
//! [`ContractCaller`].

use std::sync::Arc;

use foresight_config::{contract_addresses, ContractAddresses};
use foresight_schema::{validate_value, BoundPlan, PlanError, Schema, ValidationPlan};
use foresight_types::{
    schemas, AddLiquidityParams, Address, BigNumberish, BuyParams, CalcBuyAmountParams,
    CalcSellAmountParams, ClaimParams, ClaimVoidedParams, CreateMarketDescription, MarketAltData,
    MarketData, MarketOutcomeData, MarketPricesData, MarketSharesData, Network, Portfolio,
    RemoveLiquidityParams, SellParams, TransactionReceipt, UserClaimStatus, UserMarketShares,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::caller::ContractCaller;
use crate::error::LedgerError;

/// Every operation the client declares, in plan order.
const METHODS: &[&str] = &[
    "get_markets",
    "market_data",
    "market_alt_data",
    "outcome_data",
    "market_prices",
    "market_shares",
    "user_claim_status",
    "user_market_shares",
    "create_market",
    "buy",
    "sell",
    "add_liquidity",
    "remove_liquidity",
    "claim_winnings",
    "claim_liquidity",
    "claim_fees",
    "claim_voided",
    "calc_buy_amount",
    "calc_sell_amount",
    "my_portfolio",
    "signer_address",
];

/// Connection description for the caller implementation. Only the
/// network matters to this client; the rest documents how the caller
/// was built and is validated for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    pub provider_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
}

#[derive(Debug)]
pub struct PredictionMarketClient<C> {
    caller: Arc<C>,
    network: Network,
    addresses: &'static ContractAddresses,
    plan: BoundPlan,
}

impl<C: ContractCaller> PredictionMarketClient<C> {
    /// Builds a client over `caller`. The config is validated under the
    /// `PredictionMarketClient constructor` context; a missing network
    /// defaults to mainnet.
    pub fn new(config: LedgerConfig, caller: Arc<C>) -> Result<Self, LedgerError> {
        let raw = serde_json::to_value(&config)?;
        validate_value(
            &schemas::ledger_config_schema(),
            &raw,
            "PredictionMarketClient constructor",
        )?;

        let network = config.network.unwrap_or_default();
        let addresses = contract_addresses(network);
        let plan = build_plan()?;

        info!(
            network = network.as_str(),
            contract = %addresses.prediction_market,
            "ledger client ready"
        );

        Ok(Self {
            caller,
            network,
            addresses,
            plan,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn addresses(&self) -> &ContractAddresses {
        self.addresses
    }

    // ---- queries ----

    /// Identifiers of every market the contract knows about.
    pub async fn get_markets(&self) -> Result<Vec<BigNumberish>, LedgerError> {
        self.query_noargs("get_markets", "getMarkets").await
    }

    pub async fn market_data(&self, market_id: BigNumberish) -> Result<MarketData, LedgerError> {
        self.query("market_data", "getMarketData", json!({ "marketId": market_id }))
            .await
    }

    pub async fn market_alt_data(
        &self,
        market_id: BigNumberish,
    ) -> Result<MarketAltData, LedgerError> {
        self.query(
            "market_alt_data",
            "getMarketAltData",
            json!({ "marketId": market_id }),
        )
        .await
    }

    pub async fn outcome_data(
        &self,
        market_id: BigNumberish,
        outcome_id: BigNumberish,
    ) -> Result<MarketOutcomeData, LedgerError> {
        self.query(
            "outcome_data",
            "getOutcomeData",
            json!({ "marketId": market_id, "outcomeId": outcome_id }),
        )
        .await
    }

    pub async fn market_prices(
        &self,
        market_id: BigNumberish,
    ) -> Result<MarketPricesData, LedgerError> {
        self.query(
            "market_prices",
            "getMarketPrices",
            json!({ "marketId": market_id }),
        )
        .await
    }

    pub async fn market_shares(
        &self,
        market_id: BigNumberish,
    ) -> Result<MarketSharesData, LedgerError> {
        self.query(
            "market_shares",
            "getMarketShares",
            json!({ "marketId": market_id }),
        )
        .await
    }

    pub async fn user_claim_status(
        &self,
        market_id: BigNumberish,
        user_address: &str,
    ) -> Result<UserClaimStatus, LedgerError> {
        self.query(
            "user_claim_status",
            "getUserClaimStatus",
            json!({ "marketId": market_id, "userAddress": user_address }),
        )
        .await
    }

    pub async fn user_market_shares(
        &self,
        market_id: BigNumberish,
        user_address: &str,
    ) -> Result<UserMarketShares, LedgerError> {
        self.query(
            "user_market_shares",
            "getUserMarketShares",
            json!({ "marketId": market_id, "userAddress": user_address }),
        )
        .await
    }

    /// Quotes the outcome shares received for spending `params.amount`.
    pub async fn calc_buy_amount(
        &self,
        params: CalcBuyAmountParams,
    ) -> Result<BigNumberish, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.query("calc_buy_amount", "calcBuyAmount", params).await
    }

    /// Quotes the outcome shares burned to receive `params.amount`.
    pub async fn calc_sell_amount(
        &self,
        params: CalcSellAmountParams,
    ) -> Result<BigNumberish, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.query("calc_sell_amount", "calcSellAmount", params)
            .await
    }

    /// The signing wallet's positions and claim status across markets.
    pub async fn my_portfolio(&self) -> Result<Portfolio, LedgerError> {
        self.query_noargs("my_portfolio", "getMyPortfolio").await
    }

    /// Address of the connected signing wallet.
    pub async fn signer_address(&self) -> Result<Address, LedgerError> {
        let caller = Arc::clone(&self.caller);
        let raw = self
            .plan
            .run_noargs("signer_address", || async move {
                caller.signer_address().await
            })
            .await
            .map_err(LedgerError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    // ---- transactions ----

    pub async fn create_market(
        &self,
        description: CreateMarketDescription,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&description)?;
        self.transact("create_market", "createMarket", params).await
    }

    pub async fn buy(&self, params: BuyParams) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("buy", "buy", params).await
    }

    pub async fn sell(&self, params: SellParams) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("sell", "sell", params).await
    }

    pub async fn add_liquidity(
        &self,
        params: AddLiquidityParams,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("add_liquidity", "addLiquidity", params).await
    }

    pub async fn remove_liquidity(
        &self,
        params: RemoveLiquidityParams,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("remove_liquidity", "removeLiquidity", params)
            .await
    }

    pub async fn claim_winnings(
        &self,
        params: ClaimParams,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("claim_winnings", "claimWinnings", params)
            .await
    }

    pub async fn claim_liquidity(
        &self,
        params: ClaimParams,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("claim_liquidity", "claimLiquidity", params)
            .await
    }

    pub async fn claim_fees(&self, params: ClaimParams) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("claim_fees", "claimFees", params).await
    }

    pub async fn claim_voided(
        &self,
        params: ClaimVoidedParams,
    ) -> Result<TransactionReceipt, LedgerError> {
        let params = serde_json::to_value(&params)?;
        self.transact("claim_voided", "claimVoided", params).await
    }

    // ---- trade preparation ----

    /// Quotes the market and assembles buy parameters with the quoted
    /// shares as the slippage floor.
    pub async fn prepare_buy(
        &self,
        market_id: BigNumberish,
        outcome_id: BigNumberish,
        value: BigNumberish,
    ) -> Result<BuyParams, LedgerError> {
        let min_outcome_shares_to_buy = self
            .calc_buy_amount(CalcBuyAmountParams {
                amount: value.clone(),
                market_id: market_id.clone(),
                outcome_id: outcome_id.clone(),
            })
            .await?;
        Ok(BuyParams {
            market_id,
            outcome_id,
            min_outcome_shares_to_buy,
            value,
        })
    }

    /// Quotes the market and assembles sell parameters with the quoted
    /// shares as the slippage ceiling.
    pub async fn prepare_sell(
        &self,
        market_id: BigNumberish,
        outcome_id: BigNumberish,
        value: BigNumberish,
    ) -> Result<SellParams, LedgerError> {
        let max_outcome_shares_to_sell = self
            .calc_sell_amount(CalcSellAmountParams {
                amount: value.clone(),
                market_id: market_id.clone(),
                outcome_id: outcome_id.clone(),
            })
            .await?;
        Ok(SellParams {
            market_id,
            outcome_id,
            value,
            max_outcome_shares_to_sell,
        })
    }

    // ---- plumbing ----

    async fn query<T: DeserializeOwned>(
        &self,
        method: &str,
        wire: &str,
        params: Value,
    ) -> Result<T, LedgerError> {
        let caller = Arc::clone(&self.caller);
        let raw = self
            .plan
            .run(method, params, |params| async move {
                caller.query(wire, params).await
            })
            .await
            .map_err(LedgerError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn query_noargs<T: DeserializeOwned>(
        &self,
        method: &str,
        wire: &str,
    ) -> Result<T, LedgerError> {
        let caller = Arc::clone(&self.caller);
        let raw = self
            .plan
            .run_noargs(method, || async move {
                caller.query(wire, Value::Null).await
            })
            .await
            .map_err(LedgerError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn transact(
        &self,
        method: &str,
        wire: &str,
        params: Value,
    ) -> Result<TransactionReceipt, LedgerError> {
        let caller = Arc::clone(&self.caller);
        let raw = self
            .plan
            .run(method, params, |params| async move {
                caller.transact(wire, params).await
            })
            .await
            .map_err(LedgerError::from)?;
        Ok(serde_json::from_value(raw)?)
    }
}

fn build_plan() -> Result<BoundPlan, PlanError> {
    let receipt = schemas::transaction_receipt_schema;
    ValidationPlan::new()
        .method("get_markets", None, Some(schemas::market_ids_schema()))
        .method(
            "market_data",
            Some(schemas::market_lookup_schema()),
            Some(schemas::market_data_schema()),
        )
        .method(
            "market_alt_data",
            Some(schemas::market_lookup_schema()),
            Some(schemas::market_alt_data_schema()),
        )
        .method(
            "outcome_data",
            Some(schemas::outcome_lookup_schema()),
            Some(schemas::market_outcome_data_schema()),
        )
        .method(
            "market_prices",
            Some(schemas::market_lookup_schema()),
            Some(schemas::market_prices_schema()),
        )
        .method(
            "market_shares",
            Some(schemas::market_lookup_schema()),
            Some(schemas::market_shares_schema()),
        )
        .method(
            "user_claim_status",
            Some(schemas::user_position_schema()),
            Some(schemas::user_claim_status_schema()),
        )
        .method(
            "user_market_shares",
            Some(schemas::user_position_schema()),
            Some(schemas::user_market_shares_schema()),
        )
        .method(
            "create_market",
            Some(schemas::create_market_description_schema()),
            Some(receipt()),
        )
        .method("buy", Some(schemas::buy_params_schema()), Some(receipt()))
        .method("sell", Some(schemas::sell_params_schema()), Some(receipt()))
        .method(
            "add_liquidity",
            Some(schemas::add_liquidity_params_schema()),
            Some(receipt()),
        )
        .method(
            "remove_liquidity",
            Some(schemas::remove_liquidity_params_schema()),
            Some(receipt()),
        )
        .method(
            "claim_winnings",
            Some(schemas::claim_params_schema()),
            Some(receipt()),
        )
        .method(
            "claim_liquidity",
            Some(schemas::claim_params_schema()),
            Some(receipt()),
        )
        .method(
            "claim_fees",
            Some(schemas::claim_params_schema()),
            Some(receipt()),
        )
        .method(
            "claim_voided",
            Some(schemas::claim_voided_params_schema()),
            Some(receipt()),
        )
        .method(
            "calc_buy_amount",
            Some(schemas::calc_buy_amount_params_schema()),
            Some(schemas::big_numberish_schema()),
        )
        .method(
            "calc_sell_amount",
            Some(schemas::calc_sell_amount_params_schema()),
            Some(schemas::big_numberish_schema()),
        )
        .method("my_portfolio", None, Some(schemas::portfolio_schema()))
        .method("signer_address", None, Some(Schema::NonEmptyString))
        .bind(METHODS)
}
