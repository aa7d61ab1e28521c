//! Provider seams for the two external rate sources.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use crate::rates::RateTable;

/// BTC market price snapshot in one fiat currency.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerEntry {
    #[serde(rename = "15m")]
    pub fifteen_min: f64,
    pub last: f64,
    pub buy: f64,
    pub sell: f64,
    pub symbol: String,
}

#[async_trait]
pub trait FiatRateProvider: Send + Sync {
    /// Fetches the current rate table anchored at `base`.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}

#[async_trait]
pub trait BtcTickerProvider: Send + Sync {
    /// Fetches BTC's market price in every fiat currency the source quotes.
    async fn fetch_ticker(&self) -> Result<HashMap<String, TickerEntry>>;
}
