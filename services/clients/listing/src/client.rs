//! Market-listing API client
//!
//! Thin HTTP client over the listing service. Every method runs through
//! the validation plan built at construction: parameters are checked
//! before the request is made and the decoded payload is checked before
//! it is handed back as a typed record. The service wraps every payload
//! in a success/data/error envelope, which is validated and unwrapped
//! mid-call under the `<method> response` context.

use foresight_config::listing_base_url;
use foresight_schema::{validate_value, BoundPlan, Schema, ValidationPlan};
use foresight_types::{schemas, ApiEnvelope, Market, MarketFilters, Network, Paginated};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};
use url::Url;

use crate::error::ListingError;

/// Methods the client declares; the validation plan binds against this
/// list so a misspelled plan entry fails at construction.
const METHODS: &[&str] = &["markets", "market_by_id", "market_by_slug"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    pub network: Network,
}

pub struct ListingClient {
    http: reqwest::Client,
    base_url: Url,
    network: Network,
    plan: BoundPlan,
}

impl ListingClient {
    /// Builds a client for `config.network`. The config is validated
    /// under the `ListingClient constructor` context before anything
    /// else happens.
    pub fn new(config: ListingConfig) -> Result<Self, ListingError> {
        let raw = serde_json::to_value(&config)?;
        validate_value(
            &schemas::listing_config_schema(),
            &raw,
            "ListingClient constructor",
        )?;

        let base = listing_base_url(config.network);
        let mut base_url = Url::parse(&base).map_err(|source| ListingError::Endpoint {
            url: base.clone(),
            source,
        })?;
        // Url::join drops the last path segment without this.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let plan = ValidationPlan::new()
            .method(
                "markets",
                Some(schemas::market_filters_schema()),
                Some(schemas::paginated(schemas::market_schema())),
            )
            .method(
                "market_by_id",
                Some(Schema::NonEmptyString),
                Some(schemas::market_schema()),
            )
            .method(
                "market_by_slug",
                Some(Schema::NonEmptyString),
                Some(schemas::market_schema()),
            )
            .bind(METHODS)?;

        info!(network = config.network.as_str(), url = %base_url, "listing client ready");

        Ok(Self {
            http,
            base_url,
            network: config.network,
            plan,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Markets matching `filters`, paginated. Passing `None` sends an
    /// unfiltered query and skips parameter validation entirely.
    pub async fn markets(
        &self,
        filters: Option<MarketFilters>,
    ) -> Result<Paginated<Market>, ListingError> {
        let raw = match filters {
            Some(filters) => {
                let params = serde_json::to_value(&filters)?;
                self.plan
                    .run("markets", params, |params| self.fetch_markets(params))
                    .await
            }
            None => {
                self.plan
                    .run_noargs("markets", || self.fetch_markets(json!({})))
                    .await
            }
        }
        .map_err(ListingError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    /// A single market by its listing-service identifier.
    pub async fn market_by_id(&self, id: &str) -> Result<Market, ListingError> {
        let raw = self
            .plan
            .run("market_by_id", json!(id), |validated| async move {
                let id = validated.as_str().unwrap_or_default();
                let raw = self.get_json(&format!("markets/{id}"), &[]).await?;
                unwrap_envelope("market_by_id", schemas::market_schema(), raw)
            })
            .await
            .map_err(ListingError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    /// A single market by its URL slug.
    pub async fn market_by_slug(&self, slug: &str) -> Result<Market, ListingError> {
        let raw = self
            .plan
            .run("market_by_slug", json!(slug), |validated| async move {
                let slug = validated.as_str().unwrap_or_default();
                let raw = self.get_json(&format!("markets/slug/{slug}"), &[]).await?;
                unwrap_envelope("market_by_slug", schemas::market_schema(), raw)
            })
            .await
            .map_err(ListingError::from)?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn fetch_markets(&self, params: Value) -> Result<Value, ListingError> {
        let raw = self.get_json("markets", &query_pairs(&params)).await?;
        unwrap_envelope(
            "markets",
            schemas::paginated(schemas::market_schema()),
            raw,
        )
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ListingError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ListingError::Endpoint {
                url: format!("{}{path}", self.base_url),
                source,
            })?;
        debug!(%url, "listing request");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

/// Validates the service envelope under the `<method> response` context
/// and extracts its payload. A `success: false` envelope becomes a
/// typed API error; a successful envelope without data is a malformed
/// answer in its own right.
fn unwrap_envelope(method: &str, inner: Schema, raw: Value) -> Result<Value, ListingError> {
    let context = format!("{method} response");
    let validated = validate_value(&schemas::api_envelope(inner), &raw, &context)?;
    let envelope: ApiEnvelope<Value> = serde_json::from_value(validated)?;

    if !envelope.success {
        return Err(match envelope.error {
            Some(err) => ListingError::Api {
                status: err.status,
                code: err.code,
                message: err.message,
            },
            None => ListingError::EmptyEnvelope {
                method: method.to_string(),
            },
        });
    }
    envelope.data.ok_or_else(|| ListingError::EmptyEnvelope {
        method: method.to_string(),
    })
}

/// Flattens a filter object into query pairs. Arrays repeat the key
/// once per element; null entries are dropped.
fn query_pairs(params: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(map) = params.as_object() {
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        pairs.push((key.clone(), scalar_text(item)));
                    }
                }
                Value::Null => {}
                other => pairs.push((key.clone(), scalar_text(other))),
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_types::{MarketStatus, SortDirection, SortField};

    #[test]
    fn constructor_builds_a_plan_for_every_method() {
        let client = ListingClient::new(ListingConfig {
            network: Network::Testnet,
        })
        .unwrap();
        for method in METHODS {
            assert!(client.plan.boundary(method).is_some(), "{method} unplanned");
        }
        assert_eq!(client.network(), Network::Testnet);
    }

    #[test]
    fn base_url_keeps_its_trailing_slash() {
        let client = ListingClient::new(ListingConfig {
            network: Network::Mainnet,
        })
        .unwrap();
        assert!(client.base_url.path().ends_with('/'));
    }

    #[test]
    fn filters_flatten_into_query_pairs() {
        let filters = MarketFilters {
            page: Some(2),
            limit: Some(25),
            status: Some(MarketStatus::Open),
            tags: Some(vec!["sports".to_string(), "nba".to_string()]),
            sort_by: Some(SortField::Volume),
            sort_direction: Some(SortDirection::Desc),
            ..MarketFilters::default()
        };
        let params = serde_json::to_value(&filters).unwrap();
        let pairs = query_pairs(&params);

        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("status".to_string(), "open".to_string())));
        assert!(pairs.contains(&("tags".to_string(), "sports".to_string())));
        assert!(pairs.contains(&("tags".to_string(), "nba".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn envelope_failure_surfaces_the_service_error() {
        let raw = json!({
            "success": false,
            "error": {"status": 404, "message": "no such market", "code": "NOT_FOUND"}
        });
        let err = unwrap_envelope("market_by_id", schemas::market_schema(), raw).unwrap_err();
        match err {
            ListingError::Api { status, code, message } => {
                assert_eq!(status, 404);
                assert_eq!(code, "NOT_FOUND");
                assert_eq!(message, "no such market");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn successful_envelope_without_data_is_rejected() {
        let raw = json!({"success": true});
        let err = unwrap_envelope("markets", schemas::market_schema(), raw).unwrap_err();
        assert!(matches!(err, ListingError::EmptyEnvelope { .. }));
    }

    #[test]
    fn malformed_envelope_fails_under_the_response_context() {
        let raw = json!({});
        let err = unwrap_envelope("markets", schemas::market_schema(), raw).unwrap_err();
        assert_eq!(err.to_string(), "markets response: success: required");
    }
}
