//! Shared fixtures for the behavior tests.

use std::future::Future;
use std::pin::Pin;

use hindsight_core::{
    ChartPoint, ChartSink, FetchError, PricePoint, QuoteSource, RawBar, RawSeries, Series, Symbol,
    TradingDay,
};
use time::Duration;

/// `count` consecutive calendar days starting at `first`.
pub fn trading_days(first: &str, count: usize) -> Vec<TradingDay> {
    let first = TradingDay::parse(first).expect("valid first day");
    (0..count)
        .map(|offset| TradingDay::from_date(first.into_inner() + Duration::days(offset as i64)))
        .collect()
}

/// Raw provider payload with one adjusted close per consecutive day.
pub fn raw_series(first_day: &str, closes: &[f64]) -> RawSeries {
    trading_days(first_day, closes.len())
        .into_iter()
        .zip(closes)
        .map(|(day, close)| {
            (
                day.format_iso(),
                RawBar {
                    adjusted_close: Some(close.to_string()),
                    close: None,
                },
            )
        })
        .collect()
}

/// Normalized series over consecutive days, for selector tests.
pub fn series(first_day: &str, closes: &[f64]) -> Series {
    trading_days(first_day, closes.len())
        .into_iter()
        .zip(closes)
        .map(|(day, close)| PricePoint::new(day, *close).expect("valid point"))
        .collect()
}

/// Quote source that replays one canned response.
pub struct CannedQuoteSource {
    response: Result<RawSeries, FetchError>,
}

impl CannedQuoteSource {
    pub fn ok(raw: RawSeries) -> Self {
        Self { response: Ok(raw) }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl QuoteSource for CannedQuoteSource {
    fn daily_series<'a>(
        &'a self,
        _symbol: &'a Symbol,
        _api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RawSeries, FetchError>> + Send + 'a>> {
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// Chart sink that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub seeds: Vec<Vec<ChartPoint>>,
    pub appends: Vec<ChartPoint>,
    pub clears: usize,
}

impl ChartSink for RecordingSink {
    fn seed(&mut self, points: &[ChartPoint]) {
        self.seeds.push(points.to_vec());
    }

    fn append(&mut self, point: &ChartPoint) {
        self.appends.push(point.clone());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
