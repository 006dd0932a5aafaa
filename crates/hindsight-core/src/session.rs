//! Command surface: one player session driving fetch, selection and game.

use std::sync::Arc;

use crate::chart::ChartCommand;
use crate::engine::{Direction, Game, GuessResult, Phase};
use crate::normalize::normalize;
use crate::select::pick_start;
use crate::source::{FetchError, QuoteSource, RawSeries};
use crate::{GuessError, StartError, Symbol, TradingDay};

/// Summary handed back by a successful start.
#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    pub symbol: Symbol,
    /// The day displayed as "current": one before the hidden reference day.
    pub display_day: TradingDay,
    /// Seed command for the chart feed.
    pub chart: ChartCommand,
}

/// Tag for one in-flight fetch. A completion only counts if its generation
/// still matches the session's; a reset or a newer start in between makes
/// it stale and its result is discarded.
#[derive(Debug)]
pub struct StartTicket {
    generation: u64,
    symbol: Symbol,
    api_key: String,
}

impl StartTicket {
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// One player session. Owns the game exclusively; commands run strictly
/// one after another, with the quote fetch as the only suspension point.
pub struct GameSession {
    source: Arc<dyn QuoteSource>,
    game: Game,
    rng: fastrand::Rng,
    generation: u64,
    today_override: Option<TradingDay>,
}

impl GameSession {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            game: Game::new(),
            rng: fastrand::Rng::new(),
            generation: 0,
            today_override: None,
        }
    }

    /// Replace the selector's randomness source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Pin "now" for start selection instead of reading the UTC clock.
    pub fn with_today(mut self, today: TradingDay) -> Self {
        self.today_override = Some(today);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    /// Fetch the series for `symbol` and start a game on it.
    pub async fn start(&mut self, symbol: &str, api_key: &str) -> Result<StartOutcome, StartError> {
        let ticket = self.begin_start(symbol, api_key)?;
        let source = Arc::clone(&self.source);
        let fetched = source
            .daily_series(ticket.symbol(), ticket.api_key())
            .await;
        self.finish_start(ticket, fetched)
    }

    /// Validate the inputs and open the single in-flight request slot.
    pub fn begin_start(&mut self, symbol: &str, api_key: &str) -> Result<StartTicket, StartError> {
        let symbol = Symbol::parse(symbol)?;
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(StartError::MissingApiKey);
        }

        self.generation += 1;
        Ok(StartTicket {
            generation: self.generation,
            symbol,
            api_key: api_key.to_owned(),
        })
    }

    /// Complete a start with the fetch result for `ticket`. Stale tickets
    /// are rejected without touching the game. Every failure path leaves
    /// the game exactly as it was; the game is only replaced at the end,
    /// fully active.
    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        fetched: Result<RawSeries, FetchError>,
    ) -> Result<StartOutcome, StartError> {
        if ticket.generation != self.generation {
            return Err(StartError::Superseded);
        }

        let raw = fetched?;
        let series = normalize(&raw);
        if series.is_empty() {
            return Err(StartError::NoUsableData);
        }

        let today = self.today_override.unwrap_or_else(TradingDay::today_utc);
        let start_index =
            pick_start(&series, today, &mut self.rng).ok_or(StartError::NoEligibleStart)?;

        let (game, report) = Game::start(ticket.symbol.clone(), series, start_index)?;
        self.game = game;

        Ok(StartOutcome {
            symbol: ticket.symbol,
            display_day: report.display_day,
            chart: report.chart,
        })
    }

    /// Score one call against the next day.
    pub fn guess(&mut self, direction: Direction) -> Result<GuessResult, GuessError> {
        self.game.guess(direction)
    }

    /// Stop the current game, keeping its final score visible.
    pub fn end(&mut self) {
        self.game.end();
    }

    /// Discard the game and any in-flight fetch; returns the command that
    /// empties the chart feed.
    pub fn reset(&mut self) -> ChartCommand {
        self.generation += 1;
        self.game = Game::new();
        ChartCommand::Clear
    }
}
