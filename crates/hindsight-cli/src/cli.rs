use clap::Parser;

/// Guess whether a stock's next daily close went up or down.
#[derive(Debug, Parser)]
#[command(name = "hindsight", version)]
pub struct Cli {
    /// Ticker symbol to play, e.g. AAPL
    pub symbol: String,

    /// Alpha Vantage API key; falls back to the ALPHAVANTAGE_API_KEY
    /// environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Seed for the start selector, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows used by the terminal chart
    #[arg(long, default_value_t = 10)]
    pub chart_height: usize,
}
