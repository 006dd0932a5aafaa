//! The guess → reveal → score state machine.

use serde::Serialize;

use crate::chart::{ChartCommand, ChartPoint};
use crate::select::SEED_POINTS;
use crate::{GuessError, Series, StartError, Symbol, TradingDay};

/// Lifecycle of one game. `Ended` is terminal; a reset discards the game
/// and builds a fresh `Idle` one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Active,
    Ended,
}

/// The player's call on the next close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// Scoring of one guess. `Unchanged` means the close did not move; it is
/// never correct but is reported apart from a wrong directional call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    Unchanged,
}

/// Typed fields describing one revealed day. Message formatting belongs to
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    pub day: TradingDay,
    pub close: f64,
    pub delta: f64,
}

/// Result of a guess transition.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessResult {
    /// The next day was scored and revealed; `chart` appends it.
    Revealed {
        outcome: GuessOutcome,
        chart: ChartCommand,
    },
    /// No next point exists. The game is now `Ended`; score, index and
    /// chart are untouched.
    Exhausted,
}

/// What a successful start hands the caller: the seed effect and the day
/// shown as "current". The displayed day is the one *before* the hidden
/// reference day, so the first reveal lands on a day the player has not
/// seen.
#[derive(Debug, Clone, PartialEq)]
pub struct StartReport {
    pub chart: ChartCommand,
    pub display_day: TradingDay,
}

/// One game: the symbol, its fixed series, the cursor, and the score.
///
/// `current_index` stays within bounds whenever the phase is not `Idle`;
/// the score changes only by +1 on a correct guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    symbol: Option<Symbol>,
    series: Series,
    current_index: usize,
    score: u32,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh idle game.
    pub fn new() -> Self {
        Self {
            symbol: None,
            series: Series::empty(),
            current_index: 0,
            score: 0,
            phase: Phase::Idle,
        }
    }

    /// Build an active game on `series` with the hidden reference day at
    /// `start_index`. The index must leave [`SEED_POINTS`] points before it
    /// and at least one after it; the selector guarantees that for its
    /// picks, and this re-checks it so no partially started game can exist.
    pub fn start(
        symbol: Symbol,
        series: Series,
        start_index: usize,
    ) -> Result<(Self, StartReport), StartError> {
        if start_index < SEED_POINTS || start_index + 1 >= series.len() {
            return Err(StartError::InvalidStartIndex { index: start_index });
        }

        let seed: Vec<ChartPoint> = series.points()[start_index - SEED_POINTS..start_index]
            .iter()
            .map(|point| ChartPoint::new(point.day.format_iso(), point.close))
            .collect();
        let display_day = series.points()[start_index - 1].day;

        let game = Self {
            symbol: Some(symbol),
            series,
            current_index: start_index,
            score: 0,
            phase: Phase::Active,
        };
        let report = StartReport {
            chart: ChartCommand::Seed(seed),
            display_day,
        };
        Ok((game, report))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The hidden reference day's point, when a game is live.
    pub fn reference_point(&self) -> Option<&crate::PricePoint> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.series.get(self.current_index)
    }

    /// Score one call against the next day's close.
    pub fn guess(&mut self, direction: Direction) -> Result<GuessResult, GuessError> {
        if self.phase != Phase::Active {
            return Err(GuessError::NotActive);
        }

        let next_index = self.current_index + 1;
        let points = self.series.points();
        let Some((current, next)) = points.get(self.current_index).zip(points.get(next_index))
        else {
            self.phase = Phase::Ended;
            return Ok(GuessResult::Exhausted);
        };

        let delta = next.close - current.close;
        let verdict = if delta == 0.0 {
            Verdict::Unchanged
        } else if (delta > 0.0) == (direction == Direction::Up) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        if verdict == Verdict::Correct {
            self.score += 1;
        }

        let outcome = GuessOutcome {
            verdict,
            day: next.day,
            close: next.close,
            delta,
        };
        let chart = ChartCommand::Append(ChartPoint::new(next.day.format_iso(), next.close));
        self.current_index = next_index;

        Ok(GuessResult::Revealed { outcome, chart })
    }

    /// Stop play. Legal from any phase; only `Active` actually moves.
    pub fn end(&mut self) {
        if self.phase == Phase::Active {
            self.phase = Phase::Ended;
        }
    }
}
