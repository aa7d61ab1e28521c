use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::rate_provider::{BtcTickerProvider, TickerEntry};

/// Client for the blockchain.info ticker (`GET /ticker`). The endpoint takes
/// no parameters and returns BTC's price in every fiat currency it quotes.
pub struct BlockchainTickerProvider {
    base_url: String,
}

impl BlockchainTickerProvider {
    pub fn new(base_url: &str) -> Self {
        BlockchainTickerProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl BtcTickerProvider for BlockchainTickerProvider {
    #[instrument(name = "BtcTickerFetch", skip(self))]
    async fn fetch_ticker(&self) -> Result<HashMap<String, TickerEntry>> {
        let url = format!("{}/ticker", self.base_url);
        debug!("Requesting BTC ticker from {}", url);

        let client = reqwest::Client::builder().user_agent("cambio/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} from BTC ticker", response.status()));
        }

        let text = response.text().await?;
        let ticker: HashMap<String, TickerEntry> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse BTC ticker response: {}", e))?;

        debug!("Fetched BTC ticker for {} currencies", ticker.len());
        Ok(ticker)
    }
}
