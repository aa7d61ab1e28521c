use cambio::convert::ConversionRequest;
use cambio::log::init_logging;
use clap::Parser;

/// Convert between currencies, bitcoin included.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Amount to convert
    #[arg(default_value_t = 1.0)]
    amount: f64,

    /// Currency to convert from (3-letter ISO code or BTC)
    #[arg(default_value = "USD")]
    from: String,

    /// Currency to convert to (3-letter ISO code or BTC)
    #[arg(default_value = "BTC")]
    to: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

impl From<&Cli> for ConversionRequest {
    fn from(cli: &Cli) -> ConversionRequest {
        ConversionRequest {
            amount: cli.amount,
            from: cli.from.to_uppercase(),
            to: cli.to.to_uppercase(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let request = ConversionRequest::from(&cli);
    if let Err(e) = cambio::run(request, cli.config_path.as_deref()).await {
        tracing::error!(error = %e, "Conversion failed");
        eprintln!("{}", cambio::ui::format_error(&e.to_string()));
        std::process::exit(1);
    }
}
