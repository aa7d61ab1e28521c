//! Rate table and conversion arithmetic.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Exchange rates relative to a single base currency.
///
/// Built fresh for every conversion request and passed explicitly to the
/// conversion step; never shared between requests.
#[derive(Debug, Clone)]
pub struct RateTable {
    pub base: String,
    pub date: Option<NaiveDate>,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: &str, rates: HashMap<String, f64>) -> Self {
        RateTable {
            base: base.to_string(),
            date: None,
            rates,
        }
    }

    /// Rate for `code` relative to the base. The base itself is 1.0 unless the
    /// table carries an explicit entry for it.
    pub fn rate(&self, code: &str) -> Result<f64> {
        if let Some(rate) = self.rates.get(code) {
            return Ok(*rate);
        }
        if code == self.base {
            return Ok(1.0);
        }
        Err(anyhow!("No rate found for currency: {}", code))
    }

    /// Converts `amount` from `from` to `to` through the base:
    /// `amount * rate(to) / rate(from)`.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Ok(amount * to_rate / from_rate)
    }
}
