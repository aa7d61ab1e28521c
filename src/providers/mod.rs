pub mod blockchain;
pub mod exchange_rates;
