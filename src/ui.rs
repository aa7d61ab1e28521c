//! Terminal output helpers.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the rate requests are in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Formats the converted amount. BTC amounts keep full satoshi precision,
/// fiat amounts round to cents.
pub fn format_amount(amount: f64, currency: &str) -> String {
    if currency == "BTC" {
        format!("{amount:.8}")
    } else {
        format!("{amount:.2}")
    }
}

pub fn format_result(amount: f64, from: &str, converted: f64, to: &str) -> String {
    let left = format!("{} {}", format_amount(amount, from), from);
    let right = format!("{} {}", format_amount(converted, to), to);
    format!("{} = {}", style(left).bold(), style(right).green().bold())
}

pub fn format_error(message: &str) -> String {
    style(message).red().to_string()
}
