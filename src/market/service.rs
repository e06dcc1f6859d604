use reqwest::Client;
use serde_json::Value;

use crate::{error::AppError, models::value_as_text};

/// Quote currency and extra fields requested for every lookup.
const PRICE_QUERY_SUFFIX: &str = "vs_currencies=usd&include_24hr_change=true&include_market_cap=true";

#[derive(Clone)]
pub struct MarketService {
    client: Client,
    base_url: String,
}

impl MarketService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Joins identifiers into the single `ids` value the price API expects.
    pub fn join_ids(symbols: &[Value]) -> String {
        symbols.iter().map(value_as_text).collect::<Vec<_>>().join(",")
    }

    pub fn price_url(&self, ids: &str) -> String {
        format!("{}/simple/price?ids={}&{}", self.base_url, ids, PRICE_QUERY_SUFFIX)
    }

    /// Fetches quotes for every identifier in one batched request.
    ///
    /// The upstream status is not inspected: whatever JSON comes back is
    /// returned unchanged. A body that is not JSON is an upstream error.
    pub async fn get_prices(&self, symbols: &[Value]) -> Result<Value, AppError> {
        let ids = Self::join_ids(symbols);
        let url = self.price_url(&ids);

        tracing::debug!(url = %url, symbol_count = symbols.len(), "Fetching prices");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        let data = response.json::<Value>().await?;

        tracing::debug!(status = %status, "Price API responded");

        Ok(data)
    }
}
