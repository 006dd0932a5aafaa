//! Start selection: which day a new game may begin on.

use crate::{Series, TradingDay};

/// Oldest edge of the start window, in calendar days before "now".
pub const WINDOW_OLDEST_DAYS: i64 = 100;
/// Newest edge of the start window, in calendar days before "now".
pub const WINDOW_NEWEST_DAYS: i64 = 7;
/// Trading days shown on the chart before the hidden reference day.
pub const SEED_POINTS: usize = 7;

/// Indices at which a game may start, ascending.
///
/// An index qualifies when its day falls inside
/// `[today − 100d, today − 7d]`, at least [`SEED_POINTS`] points precede it
/// to seed the chart, and at least one point follows it to score the first
/// guess. The calendar window is deliberately wide; weekends and holidays
/// are absorbed by the index arithmetic, not by date arithmetic.
pub fn eligible_starts(series: &Series, today: TradingDay) -> Vec<usize> {
    let oldest = today.days_earlier(WINDOW_OLDEST_DAYS);
    let newest = today.days_earlier(WINDOW_NEWEST_DAYS);

    series
        .points()
        .iter()
        .enumerate()
        .filter(|(index, point)| {
            point.day >= oldest
                && point.day <= newest
                && *index >= SEED_POINTS
                && index + 1 < series.len()
        })
        .map(|(index, _)| index)
        .collect()
}

/// Pick a start index uniformly at random from the eligible set, or `None`
/// when nothing qualifies. The caller treats `None` as a user-facing
/// "not enough recent data" failure.
pub fn pick_start(series: &Series, today: TradingDay, rng: &mut fastrand::Rng) -> Option<usize> {
    let eligible = eligible_starts(series, today);
    if eligible.is_empty() {
        return None;
    }
    Some(eligible[rng.usize(0..eligible.len())])
}
