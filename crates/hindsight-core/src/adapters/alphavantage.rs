use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::http::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::source::{FetchError, QuoteSource, RawSeries};
use crate::Symbol;

const QUERY_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage daily-adjusted quote source.
///
/// Free-tier responses signal failure inside a 200 body: `"Error Message"`
/// for unknown tickers, `"Note"` (older) or `"Information"` (newer) for
/// rate limiting. Both are mapped onto the closed [`FetchError`] set rather
/// than passed through as strings.
#[derive(Clone)]
pub struct AlphaVantageSource {
    http_client: Arc<dyn HttpClient>,
}

impl Default for AlphaVantageSource {
    fn default() -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::new()),
        }
    }
}

impl AlphaVantageSource {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    fn daily_adjusted_url(symbol: &Symbol, api_key: &str) -> String {
        format!(
            "{QUERY_URL}?function=TIME_SERIES_DAILY_ADJUSTED&symbol={}&outputsize=compact&apikey={}",
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(api_key),
        )
    }
}

#[derive(Debug, Deserialize)]
struct DailyAdjustedResponse {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<RawSeries>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl QuoteSource for AlphaVantageSource {
    fn daily_series<'a>(
        &'a self,
        symbol: &'a Symbol,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RawSeries, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(Self::daily_adjusted_url(symbol, api_key));
            let response =
                self.http_client
                    .execute(request)
                    .await
                    .map_err(|error| FetchError::Transport {
                        message: error.message().to_owned(),
                    })?;

            if !response.is_success() {
                return Err(FetchError::NetworkFailure {
                    status: response.status,
                });
            }

            let payload: DailyAdjustedResponse =
                serde_json::from_str(&response.body).map_err(|error| {
                    FetchError::MalformedPayload {
                        message: error.to_string(),
                    }
                })?;

            if payload.error_message.is_some() {
                return Err(FetchError::InvalidSymbol {
                    symbol: symbol.as_str().to_owned(),
                });
            }
            if payload.note.is_some() || payload.information.is_some() {
                return Err(FetchError::RateLimited);
            }

            match payload.series {
                Some(series) if !series.is_empty() => Ok(series),
                _ => Err(FetchError::EmptyResult),
            }
        })
    }
}
