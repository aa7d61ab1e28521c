pub mod config;
pub mod convert;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod rates;
pub mod ui;

use anyhow::Result;
use tracing::{debug, info};

use crate::convert::ConversionRequest;
use crate::providers::blockchain::BlockchainTickerProvider;
use crate::providers::exchange_rates::ExchangeRatesProvider;

/// Runs a conversion against the configured rate sources and prints the
/// styled result.
pub async fn run(request: ConversionRequest, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let fiat_provider = ExchangeRatesProvider::new(config.rates_base_url());
    let ticker_provider = BlockchainTickerProvider::new(config.blockchain_base_url());

    let spinner = ui::new_spinner("Fetching exchange rates...");
    let result = convert::convert(&request, &fiat_provider, &ticker_provider).await;
    spinner.finish_and_clear();

    let converted = result?;
    println!(
        "{}",
        ui::format_result(request.amount, &request.from, converted, &request.to)
    );
    Ok(())
}
