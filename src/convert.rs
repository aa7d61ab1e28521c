//! Core conversion flow: source selection, parallel fetch, BTC merge.

use anyhow::{Result, anyhow};
use tracing::{debug, instrument};

use crate::rate_provider::{BtcTickerProvider, FiatRateProvider};

pub const CURRENCY_BITCOIN: &str = "BTC";

/// The one user-facing failure message. Upstream detail is logged, not shown.
pub const INVALID_CURRENCY_MSG: &str =
    "💵 Please specify a valid `from` and/or `to` currency value!";

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        ConversionRequest {
            amount: 1.0,
            from: "USD".to_string(),
            to: CURRENCY_BITCOIN.to_string(),
        }
    }
}

fn is_any_btc(from: &str, to: &str) -> bool {
    from == CURRENCY_BITCOIN || to == CURRENCY_BITCOIN
}

/// Picks the currency pair actually handed to the rate table.
///
/// When BTC is involved the pair is swapped: the injected BTC rate is the
/// ticker's `last` price (fiat per BTC), the reciprocal of what a table
/// anchored at the fiat base would carry, and the swap compensates for that.
pub fn resolve_conversion_direction<'a>(
    from: &'a str,
    to: &'a str,
    any_btc: bool,
) -> (&'a str, &'a str) {
    if any_btc { (to, from) } else { (from, to) }
}

/// Converts `req.amount` from `req.from` to `req.to`.
///
/// Fiat rates are always fetched; the blockchain ticker only when either side
/// is BTC, in which case both requests are in flight concurrently. Any
/// upstream failure collapses into the single generic error.
pub async fn convert(
    req: &ConversionRequest,
    fiat: &dyn FiatRateProvider,
    ticker: &dyn BtcTickerProvider,
) -> Result<f64> {
    convert_inner(req, fiat, ticker).await.map_err(|e| {
        debug!(error = %e, "Conversion failed");
        anyhow!(INVALID_CURRENCY_MSG)
    })
}

#[instrument(skip(fiat, ticker), fields(amount = req.amount, from = %req.from, to = %req.to))]
async fn convert_inner(
    req: &ConversionRequest,
    fiat: &dyn FiatRateProvider,
    ticker: &dyn BtcTickerProvider,
) -> Result<f64> {
    let any_btc = is_any_btc(&req.from, &req.to);

    // The fiat source knows nothing about BTC, so the table is anchored at
    // whichever side is a fiat currency.
    let base = if any_btc && req.from == CURRENCY_BITCOIN {
        &req.to
    } else {
        &req.from
    };

    let table = if any_btc {
        let (mut table, ticker_data) =
            futures::try_join!(fiat.fetch_rates(base), ticker.fetch_ticker())?;
        let entry = ticker_data.get(&table.base).ok_or_else(|| {
            anyhow!("No ticker entry for base currency: {}", table.base)
        })?;
        table
            .rates
            .insert(CURRENCY_BITCOIN.to_string(), entry.last);
        table
    } else {
        fiat.fetch_rates(base).await?
    };

    debug!(base = %table.base, rates = table.rates.len(), "Assembled rate table");

    let (effective_from, effective_to) =
        resolve_conversion_direction(&req.from, &req.to, any_btc);
    table.convert(req.amount, effective_from, effective_to)
}
