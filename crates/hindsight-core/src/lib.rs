//! Core engine for hindsight, a historical up-or-down price guessing game.
//!
//! This crate contains:
//! - Canonical domain types and validation
//! - The series normalizer and start selector
//! - The guess/reveal/score state machine and session command surface
//! - Quote-source and chart-feed contracts, plus the Alpha Vantage adapter

pub mod adapters;
pub mod chart;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http;
pub mod normalize;
pub mod select;
pub mod session;
pub mod source;

pub use adapters::AlphaVantageSource;
pub use chart::{apply, ChartCommand, ChartPoint, ChartSink, NullChartSink};
pub use domain::{PricePoint, Series, Symbol, TradingDay};
pub use engine::{
    Direction, Game, GuessOutcome, GuessResult, Phase, StartReport, Verdict,
};
pub use error::{GuessError, StartError, ValidationError};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use normalize::normalize;
pub use select::{eligible_starts, pick_start, SEED_POINTS, WINDOW_NEWEST_DAYS, WINDOW_OLDEST_DAYS};
pub use session::{GameSession, StartOutcome, StartTicket};
pub use source::{FetchError, QuoteSource, RawBar, RawSeries};
