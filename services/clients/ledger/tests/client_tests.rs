//! Client behaviour against a scripted in-memory caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ledger_client::{CallerError, ContractCaller, LedgerConfig, LedgerError, PredictionMarketClient};
use serde_json::{json, Value};

#[derive(Debug, Default)]
struct MockCaller {
    responses: Mutex<HashMap<String, Value>>,
    queries: AtomicUsize,
    transactions: AtomicUsize,
}

impl MockCaller {
    fn with(responses: &[(&str, Value)]) -> Arc<Self> {
        let caller = Self::default();
        {
            let mut map = caller.responses.lock().unwrap();
            for (method, value) in responses {
                map.insert(method.to_string(), value.clone());
            }
        }
        Arc::new(caller)
    }

    fn scripted(&self, method: &str) -> Result<Value, CallerError> {
        self.responses
            .lock()
            .unwrap()
            .get(method)
            .cloned()
            .ok_or_else(|| CallerError::Reverted(format!("unscripted method {method}")))
    }
}

#[async_trait]
impl ContractCaller for MockCaller {
    async fn query(&self, method: &str, _params: Value) -> Result<Value, CallerError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.scripted(method)
    }

    async fn transact(&self, method: &str, _params: Value) -> Result<Value, CallerError> {
        self.transactions.fetch_add(1, Ordering::SeqCst);
        self.scripted(method)
    }

    async fn signer_address(&self) -> Result<Value, CallerError> {
        self.scripted("signerAddress")
    }
}

fn config() -> LedgerConfig {
    LedgerConfig {
        provider_url: "https://rpc.example".to_string(),
        private_key: None,
        events_url: None,
        network: None,
    }
}

fn client(caller: Arc<MockCaller>) -> PredictionMarketClient<MockCaller> {
    PredictionMarketClient::new(config(), caller).unwrap()
}

#[test]
fn constructor_rejects_an_empty_provider_url() {
    let mut bad = config();
    bad.provider_url = String::new();
    let err = PredictionMarketClient::new(bad, Arc::new(MockCaller::default())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "PredictionMarketClient constructor: providerUrl: must not be empty"
    );
}

#[tokio::test]
async fn market_data_decodes_the_contract_result() {
    let caller = MockCaller::with(&[(
        "getMarketData",
        json!({
            "state": 2,
            "closesAt": "1700000000",
            "outcomes": 2,
            "liquidity": "5000",
            "fee": "20",
            "resolvedOutcomeId": 1
        }),
    )]);
    let client = client(Arc::clone(&caller));

    let data = client.market_data(7u64.into()).await.unwrap();
    assert_eq!(data.resolved_outcome_id, Some(1));
    assert_eq!(caller.queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_caller() {
    let caller = MockCaller::with(&[]);
    let client = client(Arc::clone(&caller));

    let err = client
        .user_claim_status(7u64.into(), "")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid parameters for user_claim_status: userAddress: must not be empty"
    );
    assert_eq!(caller.queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_contract_results_fail_the_call() {
    let caller = MockCaller::with(&[(
        "getMarketData",
        json!({ "state": 0, "closesAt": "1700000000" }),
    )]);
    let client = client(Arc::clone(&caller));

    let err = client.market_data(7u64.into()).await.unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("Invalid response from market_data: "),
        "unexpected message: {message}"
    );
    assert!(message.contains("outcomes: required"));
    assert_eq!(caller.queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn caller_failures_pass_through_unchanged() {
    let caller = MockCaller::with(&[]);
    let client = client(Arc::clone(&caller));

    let err = client.get_markets().await.unwrap_err();
    match err {
        LedgerError::Caller(CallerError::Reverted(message)) => {
            assert_eq!(message, "unscripted method getMarkets");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn buy_returns_the_submitted_transaction() {
    let caller = MockCaller::with(&[("buy", json!({ "hash": "0xabc123" }))]);
    let client = client(Arc::clone(&caller));

    let receipt = client
        .prepare_buy(7u64.into(), 0u64.into(), "250".into())
        .await;
    // prepare_buy needs a quote; without one the trade never starts.
    assert!(receipt.is_err());
    assert_eq!(caller.transactions.load(Ordering::SeqCst), 0);

    let params = foresight_types::BuyParams {
        market_id: 7u64.into(),
        outcome_id: 0u64.into(),
        min_outcome_shares_to_buy: "100".into(),
        value: "250".into(),
    };
    let receipt = client.buy(params).await.unwrap();
    assert_eq!(receipt.hash, "0xabc123");
    assert_eq!(caller.transactions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prepare_buy_uses_the_quoted_amount_as_floor() {
    let caller = MockCaller::with(&[("calcBuyAmount", json!("123"))]);
    let client = client(caller);

    let params = client
        .prepare_buy(7u64.into(), 1u64.into(), "250".into())
        .await
        .unwrap();
    assert_eq!(params.min_outcome_shares_to_buy, "123".into());
    assert_eq!(params.value, "250".into());
}

#[tokio::test]
async fn prepare_sell_uses_the_quoted_amount_as_ceiling() {
    let caller = MockCaller::with(&[("calcSellAmount", json!("321"))]);
    let client = client(caller);

    let params = client
        .prepare_sell(7u64.into(), 1u64.into(), "250".into())
        .await
        .unwrap();
    assert_eq!(params.max_outcome_shares_to_sell, "321".into());
}

#[tokio::test]
async fn signer_address_must_be_non_empty() {
    let caller = MockCaller::with(&[("signerAddress", json!(""))]);
    let client = client(caller);

    let err = client.signer_address().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid response from signer_address: must not be empty"
    );
}

#[tokio::test]
async fn portfolio_decodes_nested_claim_status() {
    let caller = MockCaller::with(&[(
        "getMyPortfolio",
        json!({
            "markets": [{
                "marketId": "7",
                "liquidityPoolShares": "0",
                "outcomeShares": ["10", "0"],
                "claimStatus": {
                    "claimedWinnings": false,
                    "claimedLiquidity": false,
                    "claimedFees": false,
                    "claimedVoided": false,
                    "resolvedOutcomeId": 1
                }
            }]
        }),
    )]);
    let client = client(caller);

    let portfolio = client.my_portfolio().await.unwrap();
    assert_eq!(portfolio.markets.len(), 1);
    assert!(!portfolio.markets[0].claim_status.claimed_winnings);
}
