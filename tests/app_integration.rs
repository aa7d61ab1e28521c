use cambio::convert::{self, ConversionRequest, INVALID_CURRENCY_MSG};
use cambio::providers::blockchain::BlockchainTickerProvider;
use cambio::providers::exchange_rates::ExchangeRatesProvider;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_rates_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("base", base))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_ticker_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ticker"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_failing_server() -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

const USD_RATES: &str = r#"{
    "base": "USD",
    "date": "2026-08-28",
    "rates": {"EUR": 0.9, "GBP": 0.78, "INR": 83.0}
}"#;

const TICKER: &str = r#"{
    "USD": {"15m": 49950.0, "last": 50000.0, "buy": 50010.0, "sell": 49990.0, "symbol": "$"},
    "EUR": {"15m": 45100.0, "last": 45000.0, "buy": 45010.0, "sell": 44990.0, "symbol": "€"}
}"#;

fn request(amount: f64, from: &str, to: &str) -> ConversionRequest {
    ConversionRequest {
        amount,
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[test_log::test(tokio::test)]
async fn test_fiat_conversion_flow() {
    let rates_server = test_utils::create_rates_mock_server("USD", USD_RATES).await;
    let ticker_server = test_utils::create_ticker_mock_server(TICKER).await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(100.0, "USD", "EUR"), &fiat, &ticker)
        .await
        .unwrap();
    info!(?result, "Converted USD to EUR");
    assert!((result - 90.0).abs() < 1e-9);
}

#[test_log::test(tokio::test)]
async fn test_usd_to_btc_flow() {
    let rates_server = test_utils::create_rates_mock_server("USD", USD_RATES).await;
    let ticker_server = test_utils::create_ticker_mock_server(TICKER).await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(100.0, "USD", "BTC"), &fiat, &ticker)
        .await
        .unwrap();
    assert!((result - 0.002).abs() < 1e-12);
}

#[test_log::test(tokio::test)]
async fn test_btc_to_eur_flow() {
    // BTC on the from side anchors the rate table at EUR.
    let rates_response = r#"{
        "base": "EUR",
        "date": "2026-08-28",
        "rates": {"USD": 1.11, "GBP": 0.87}
    }"#;
    let rates_server = test_utils::create_rates_mock_server("EUR", rates_response).await;
    let ticker_server = test_utils::create_ticker_mock_server(TICKER).await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(2.0, "BTC", "EUR"), &fiat, &ticker)
        .await
        .unwrap();
    assert!((result - 90000.0).abs() < 1e-6);
}

#[test_log::test(tokio::test)]
async fn test_failing_rates_source_yields_generic_error() {
    let rates_server = test_utils::create_failing_server().await;
    let ticker_server = test_utils::create_ticker_mock_server(TICKER).await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(1.0, "USD", "BTC"), &fiat, &ticker).await;
    assert_eq!(result.unwrap_err().to_string(), INVALID_CURRENCY_MSG);
}

#[test_log::test(tokio::test)]
async fn test_failing_ticker_source_yields_generic_error() {
    let rates_server = test_utils::create_rates_mock_server("USD", USD_RATES).await;
    let ticker_server = test_utils::create_failing_server().await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(1.0, "USD", "BTC"), &fiat, &ticker).await;
    assert_eq!(result.unwrap_err().to_string(), INVALID_CURRENCY_MSG);
}

#[test_log::test(tokio::test)]
async fn test_ticker_without_base_entry_yields_generic_error() {
    // Ticker quotes EUR only; base resolves to USD.
    let ticker_response = r#"{
        "EUR": {"15m": 45100.0, "last": 45000.0, "buy": 45010.0, "sell": 44990.0, "symbol": "€"}
    }"#;
    let rates_server = test_utils::create_rates_mock_server("USD", USD_RATES).await;
    let ticker_server = test_utils::create_ticker_mock_server(ticker_response).await;

    let fiat = ExchangeRatesProvider::new(&rates_server.uri());
    let ticker = BlockchainTickerProvider::new(&ticker_server.uri());

    let result = convert::convert(&request(1.0, "USD", "BTC"), &fiat, &ticker).await;
    assert_eq!(result.unwrap_err().to_string(), INVALID_CURRENCY_MSG);
}

#[test_log::test(tokio::test)]
async fn test_full_run_with_config_file() {
    use std::io::Write;

    let rates_server = test_utils::create_rates_mock_server("USD", USD_RATES).await;
    let ticker_server = test_utils::create_ticker_mock_server(TICKER).await;

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        "providers:\n  rates:\n    base_url: \"{}\"\n  blockchain:\n    base_url: \"{}\"\n",
        rates_server.uri(),
        ticker_server.uri()
    )
    .unwrap();

    let result = cambio::run(
        request(100.0, "USD", "BTC"),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok());
}
