use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::rate_provider::FiatRateProvider;
use crate::rates::RateTable;

/// Client for the fiat exchange-rate API (`GET /latest?base=<code>`).
pub struct ExchangeRatesProvider {
    base_url: String,
}

impl ExchangeRatesProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRatesProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    base: String,
    date: String,
    rates: HashMap<String, f64>,
}

#[async_trait]
impl FiatRateProvider for ExchangeRatesProvider {
    #[instrument(name = "FiatRatesFetch", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let url = format!("{}/latest?base={}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("cambio/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base: {} URL: {}", e, base, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;
        let data: RatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        debug!(
            "Fetched {} rates with base {} for {}",
            data.rates.len(),
            data.base,
            data.date
        );

        let mut table = RateTable::new(&data.base, data.rates);
        table.date = NaiveDate::parse_from_str(&data.date, "%Y-%m-%d").ok();
        Ok(table)
    }
}
