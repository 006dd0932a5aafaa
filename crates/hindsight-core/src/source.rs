use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Symbol;

/// One raw daily bar as delivered by a quote provider. Prices arrive as
/// strings; the normalizer decides what parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBar {
    #[serde(rename = "5. adjusted close", skip_serializing_if = "Option::is_none")]
    pub adjusted_close: Option<String>,
    #[serde(rename = "4. close", skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl RawBar {
    /// The price field the game scores against: adjusted close when the
    /// provider supplies one, plain close otherwise.
    pub fn price_field(&self) -> Option<&str> {
        self.adjusted_close
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.close.as_deref())
    }
}

/// Raw provider payload: date string to daily bar.
pub type RawSeries = BTreeMap<String, RawBar>;

/// Classified quote-source failures, surfaced to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("unrecognized ticker symbol '{symbol}'")]
    InvalidSymbol { symbol: String },

    #[error("provider rate limit reached; wait a minute and retry")]
    RateLimited,

    #[error("network failure: upstream returned status {status}")]
    NetworkFailure { status: u16 },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("malformed provider payload: {message}")]
    MalformedPayload { message: String },

    #[error("provider returned no price data for this ticker")]
    EmptyResult,
}

/// Quote provider contract: fetch the raw daily series for one ticker.
///
/// One request is outstanding at a time; the session enforces that and
/// discards completions that a reset has made stale.
pub trait QuoteSource: Send + Sync {
    fn daily_series<'a>(
        &'a self,
        symbol: &'a Symbol,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RawSeries, FetchError>> + Send + 'a>>;
}
