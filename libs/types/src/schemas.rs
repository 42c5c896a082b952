//! Boundary schema catalog
//!
//! One declaration per shape that crosses a client boundary, mirroring
//! the records in [`market`] and [`contract`]. Enumeration literals are
//! derived from the domain enums' wire representations so the catalog
//! and the serde types cannot drift apart.
//!
//! [`market`]: crate::market
//! [`contract`]: crate::contract

use foresight_schema::{Field, Schema};
use serde_json::{json, Value};

use crate::contract::MarketState;
use crate::market::{MarketStatus, Network, SortDirection, SortField};

// ---- primitive building blocks ----

pub fn network_schema() -> Schema {
    Schema::enumeration(Network::ALL.iter().map(|n| json!(n.as_str())).collect())
}

pub fn address_schema() -> Schema {
    Schema::NonEmptyString
}

/// Chain quantities arrive as decimal strings or plain numbers.
pub fn big_numberish_schema() -> Schema {
    Schema::union(vec![Schema::String, Schema::Number])
}

fn market_status_schema() -> Schema {
    Schema::enumeration(MarketStatus::ALL.iter().map(|s| json!(s.as_str())).collect())
}

fn market_state_schema() -> Schema {
    Schema::enumeration(
        MarketState::ALL
            .iter()
            .map(|s| Value::from(u8::from(*s)))
            .collect(),
    )
}

// ---- listing service ----

pub fn listing_config_schema() -> Schema {
    Schema::object(vec![Field::required("network", network_schema())])
}

pub fn market_category_schema() -> Schema {
    Schema::object(vec![
        Field::required("id", Schema::String),
        Field::required("name", Schema::String),
        Field::required("slug", Schema::String),
    ])
}

pub fn market_tag_schema() -> Schema {
    Schema::object(vec![
        Field::required("id", Schema::String),
        Field::required("name", Schema::String),
    ])
}

pub fn market_outcome_schema() -> Schema {
    Schema::object(vec![
        Field::required("id", Schema::String),
        Field::required("name", Schema::String),
        Field::required("price", Schema::Number),
        Field::optional("imageUrl", Schema::String),
    ])
}

pub fn market_volume_schema() -> Schema {
    Schema::object(vec![
        Field::required("total", Schema::Number),
        Field::required("daily", Schema::Number),
        Field::required("weekly", Schema::Number),
    ])
}

pub fn market_liquidity_schema() -> Schema {
    Schema::object(vec![Field::required("total", Schema::Number)])
}

pub fn market_schema() -> Schema {
    Schema::object(vec![
        Field::required("id", Schema::String),
        Field::required("slug", Schema::String),
        Field::required("title", Schema::String),
        Field::required("description", Schema::String),
        Field::optional("imageUrl", Schema::String),
        Field::required("createdAt", Schema::String),
        Field::required("updatedAt", Schema::String),
        Field::required("expiresAt", Schema::String),
        Field::optional("resolvesAt", Schema::String),
        Field::optional("resolvedAt", Schema::String),
        Field::required("status", market_status_schema()),
        Field::optional("category", market_category_schema()),
        Field::optional("subcategory", market_category_schema()),
        Field::required("tags", Schema::sequence(market_tag_schema())),
        Field::required("outcomes", Schema::sequence(market_outcome_schema())),
        Field::required("volume", market_volume_schema()),
        Field::required("liquidity", market_liquidity_schema()),
        Field::required("isResolved", Schema::Boolean),
        Field::optional("resolvedOutcomeId", Schema::String),
    ])
}

pub fn market_filters_schema() -> Schema {
    Schema::object(vec![
        Field::optional("page", Schema::PositiveInteger),
        Field::optional("limit", Schema::PositiveInteger),
        Field::optional("status", market_status_schema()),
        Field::optional("categoryId", Schema::String),
        Field::optional("subcategoryId", Schema::String),
        Field::optional("search", Schema::String),
        Field::optional("tags", Schema::sequence(Schema::String)),
        Field::optional(
            "sortBy",
            Schema::enumeration(SortField::ALL.iter().map(|s| json!(s.as_str())).collect()),
        ),
        Field::optional(
            "sortDirection",
            Schema::enumeration(
                SortDirection::ALL.iter().map(|s| json!(s.as_str())).collect(),
            ),
        ),
    ])
}

/// Pagination envelope of an inner shape — a parametrized schema built
/// once per resource type at definition time.
pub fn paginated(inner: Schema) -> Schema {
    Schema::object(vec![
        Field::required("data", Schema::sequence(inner)),
        Field::required(
            "meta",
            Schema::object(vec![
                Field::required("currentPage", Schema::PositiveInteger),
                Field::required("totalPages", Schema::NonNegativeInteger),
                Field::required("totalItems", Schema::NonNegativeInteger),
                Field::required("itemsPerPage", Schema::PositiveInteger),
            ]),
        ),
    ])
}

pub fn api_error_schema() -> Schema {
    Schema::object(vec![
        Field::required("status", Schema::Integer),
        Field::required("message", Schema::String),
        Field::required("code", Schema::String),
    ])
}

/// Success/data/error envelope of an inner shape.
pub fn api_envelope(inner: Schema) -> Schema {
    Schema::object(vec![
        Field::required("success", Schema::Boolean),
        Field::optional("data", inner),
        Field::optional("error", api_error_schema()),
    ])
}

// ---- ledger contract ----

pub fn ledger_config_schema() -> Schema {
    Schema::object(vec![
        Field::required("providerUrl", Schema::NonEmptyString),
        Field::optional("privateKey", Schema::String),
        Field::optional("eventsUrl", Schema::String),
        Field::optional("network", network_schema()),
    ])
}

pub fn market_ids_schema() -> Schema {
    Schema::sequence(big_numberish_schema())
}

pub fn market_lookup_schema() -> Schema {
    Schema::object(vec![Field::required("marketId", big_numberish_schema())])
}

pub fn outcome_lookup_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
    ])
}

/// Query arguments naming a market and a user wallet.
pub fn user_position_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("userAddress", address_schema()),
    ])
}

pub fn market_data_schema() -> Schema {
    Schema::object(vec![
        Field::required("state", market_state_schema()),
        Field::required("closesAt", big_numberish_schema()),
        Field::required("outcomes", big_numberish_schema()),
        Field::required("liquidity", big_numberish_schema()),
        Field::required("fee", big_numberish_schema()),
        Field::required("resolvedOutcomeId", Schema::Integer.nullable()),
    ])
}

pub fn market_alt_data_schema() -> Schema {
    Schema::object(vec![
        Field::required("closesAt", big_numberish_schema()),
        Field::required("questionId", Schema::String),
        Field::required("outcomes", big_numberish_schema()),
        Field::required("token", address_schema()),
        Field::required("fee", big_numberish_schema()),
        Field::required("treasury", address_schema()),
        Field::required("realitio", address_schema()),
        Field::required("realitioTimeout", big_numberish_schema()),
        Field::required("manager", address_schema()),
    ])
}

pub fn market_outcome_data_schema() -> Schema {
    Schema::object(vec![
        Field::required("price", big_numberish_schema()),
        Field::required("shares", big_numberish_schema()),
        Field::required("totalShares", big_numberish_schema()),
    ])
}

pub fn market_prices_schema() -> Schema {
    Schema::object(vec![
        Field::required("liquidityPrice", big_numberish_schema()),
        Field::required("outcomePrices", Schema::sequence(big_numberish_schema())),
    ])
}

pub fn market_shares_schema() -> Schema {
    Schema::object(vec![
        Field::required("liquidityShares", big_numberish_schema()),
        Field::required("outcomeShares", Schema::sequence(big_numberish_schema())),
    ])
}

pub fn user_claim_status_schema() -> Schema {
    Schema::object(vec![
        Field::required("claimedWinnings", Schema::Boolean),
        Field::required("claimedLiquidity", Schema::Boolean),
        Field::required("claimedFees", Schema::Boolean),
        Field::required("claimedVoided", Schema::Boolean),
        Field::required("resolvedOutcomeId", big_numberish_schema()),
    ])
}

pub fn user_market_shares_schema() -> Schema {
    Schema::object(vec![
        Field::required("liquidityPoolShares", big_numberish_schema()),
        Field::required("outcomeShares", Schema::sequence(big_numberish_schema())),
    ])
}

pub fn create_market_description_schema() -> Schema {
    Schema::object(vec![
        Field::required("value", big_numberish_schema()),
        Field::required("closesAt", big_numberish_schema()),
        Field::required("outcomes", big_numberish_schema()),
        Field::required("token", address_schema()),
        Field::required("distribution", Schema::sequence(big_numberish_schema())),
        Field::required("question", Schema::String),
        Field::required("image", Schema::String),
        Field::required("arbitrator", address_schema()),
        Field::required("fee", big_numberish_schema()),
        Field::required("treasuryFee", big_numberish_schema()),
        Field::required("treasury", address_schema()),
        Field::required("realitio", address_schema()),
        Field::required("realitioTimeout", big_numberish_schema()),
        Field::required("manager", address_schema()),
    ])
}

pub fn buy_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
        Field::required("minOutcomeSharesToBuy", big_numberish_schema()),
        Field::required("value", big_numberish_schema()),
    ])
}

pub fn sell_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
        Field::required("value", big_numberish_schema()),
        Field::required("maxOutcomeSharesToSell", big_numberish_schema()),
    ])
}

pub fn add_liquidity_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("value", big_numberish_schema()),
    ])
}

pub fn remove_liquidity_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("shares", big_numberish_schema()),
    ])
}

pub fn claim_params_schema() -> Schema {
    Schema::object(vec![Field::required("marketId", big_numberish_schema())])
}

pub fn claim_voided_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
    ])
}

pub fn calc_buy_amount_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("amount", big_numberish_schema()),
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
    ])
}

pub fn calc_sell_amount_params_schema() -> Schema {
    Schema::object(vec![
        Field::required("amount", big_numberish_schema()),
        Field::required("marketId", big_numberish_schema()),
        Field::required("outcomeId", big_numberish_schema()),
    ])
}

pub fn transaction_receipt_schema() -> Schema {
    Schema::object(vec![Field::required("hash", Schema::NonEmptyString)])
}

pub fn portfolio_market_schema() -> Schema {
    Schema::object(vec![
        Field::required("marketId", Schema::String),
        Field::required("liquidityPoolShares", big_numberish_schema()),
        Field::required("outcomeShares", Schema::sequence(big_numberish_schema())),
        Field::required("claimStatus", user_claim_status_schema()),
    ])
}

pub fn portfolio_schema() -> Schema {
    Schema::object(vec![Field::required(
        "markets",
        Schema::sequence(portfolio_market_schema()),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{BuyParams, MarketData};
    use crate::market::{
        Market, MarketLiquidity, MarketOutcome, MarketStatus, MarketTag, MarketVolume,
    };
    use foresight_schema::validate;
    use serde_json::json;

    fn sample_market() -> Market {
        Market {
            id: "m-1".into(),
            slug: "will-it-rain".into(),
            title: "Will it rain tomorrow?".into(),
            description: "Resolves yes on any measurable precipitation.".into(),
            image_url: None,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-02T00:00:00Z".into(),
            expires_at: "2025-02-01T00:00:00Z".into(),
            resolves_at: None,
            resolved_at: None,
            status: MarketStatus::Open,
            category: None,
            subcategory: None,
            tags: vec![MarketTag {
                id: "t1".into(),
                name: "weather".into(),
            }],
            outcomes: vec![
                MarketOutcome {
                    id: "o1".into(),
                    name: "Yes".into(),
                    price: 0.6,
                    image_url: None,
                },
                MarketOutcome {
                    id: "o2".into(),
                    name: "No".into(),
                    price: 0.4,
                    image_url: None,
                },
            ],
            volume: MarketVolume {
                total: 1000.0,
                daily: 10.0,
                weekly: 70.0,
            },
            liquidity: MarketLiquidity { total: 500.0 },
            is_resolved: false,
            resolved_outcome_id: None,
        }
    }

    #[test]
    fn serialized_market_satisfies_market_schema() {
        let value = serde_json::to_value(sample_market()).unwrap();
        assert!(validate(&market_schema(), &value).is_ok());
    }

    #[test]
    fn market_schema_reports_missing_fields_by_path() {
        let mut value = serde_json::to_value(sample_market()).unwrap();
        value.as_object_mut().unwrap().remove("title");
        value.as_object_mut().unwrap().remove("volume");
        let violations = validate(&market_schema(), &value).unwrap_err();
        let rendered: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["title: required", "volume: required"]);
    }

    #[test]
    fn outcome_price_must_be_numeric() {
        let mut value = serde_json::to_value(sample_market()).unwrap();
        value["outcomes"][1]["price"] = json!("0.4");
        let violations = validate(&market_schema(), &value).unwrap_err();
        assert_eq!(violations[0].path, "outcomes.1.price");
        assert_eq!(violations[0].message, "expected number");
    }

    #[test]
    fn status_enumeration_tracks_the_domain_enum() {
        let schema = market_status_schema();
        for status in MarketStatus::ALL {
            let literal = serde_json::to_value(status).unwrap();
            assert!(validate(&schema, &literal).is_ok(), "{status:?} rejected");
        }
        assert!(validate(&schema, &json!("paused")).is_err());
    }

    #[test]
    fn serialized_buy_params_satisfy_their_schema() {
        let params = BuyParams {
            market_id: 7u64.into(),
            outcome_id: 0u64.into(),
            min_outcome_shares_to_buy: "100".into(),
            value: "250".into(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert!(validate(&buy_params_schema(), &value).is_ok());
    }

    #[test]
    fn serialized_market_data_satisfies_its_schema() {
        let raw = json!({
            "state": 1,
            "closesAt": "1000000000",
            "outcomes": 2,
            "liquidity": "1000",
            "fee": "10",
            "resolvedOutcomeId": null
        });
        let data: MarketData = serde_json::from_value(raw).unwrap();
        let value = serde_json::to_value(&data).unwrap();
        assert!(validate(&market_data_schema(), &value).is_ok());
    }

    #[test]
    fn paginated_envelope_checks_meta_counters() {
        let schema = paginated(market_tag_schema());
        let good = json!({
            "data": [{"id": "t1", "name": "weather"}],
            "meta": {"currentPage": 1, "totalPages": 1, "totalItems": 1, "itemsPerPage": 20}
        });
        assert!(validate(&schema, &good).is_ok());

        let bad = json!({
            "data": [{"id": "t1", "name": "weather"}],
            "meta": {"currentPage": 0, "totalPages": 1, "totalItems": 1, "itemsPerPage": 20}
        });
        let violations = validate(&schema, &bad).unwrap_err();
        assert_eq!(violations[0].path, "meta.currentPage");
        assert_eq!(violations[0].message, "expected positive integer");
    }

    #[test]
    fn api_envelope_allows_missing_data_on_failure() {
        let schema = api_envelope(market_schema());
        let failure = json!({
            "success": false,
            "error": {"status": 500, "message": "backend unavailable", "code": "UPSTREAM"}
        });
        assert!(validate(&schema, &failure).is_ok());
    }
}
