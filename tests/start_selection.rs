//! Eligibility-bound properties of the start selector.

use hindsight_core::{
    eligible_starts, pick_start, TradingDay, SEED_POINTS, WINDOW_NEWEST_DAYS, WINDOW_OLDEST_DAYS,
};
use hindsight_tests::series;

const TODAY: &str = "2024-04-05";

fn today() -> TradingDay {
    TradingDay::parse(TODAY).expect("valid day")
}

#[test]
fn every_pick_satisfies_all_three_eligibility_rules() {
    let closes: Vec<f64> = (0..40).map(|n| 100.0 + n as f64).collect();
    let series = series("2024-02-20", &closes);
    let oldest = today().days_earlier(WINDOW_OLDEST_DAYS);
    let newest = today().days_earlier(WINDOW_NEWEST_DAYS);

    for seed in 0..64 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let index = pick_start(&series, today(), &mut rng).expect("series has eligible starts");

        assert!(index >= SEED_POINTS, "seed history missing at {index}");
        assert!(index + 1 < series.len(), "no next point at {index}");
        let day = series.get(index).expect("in bounds").day;
        assert!(day >= oldest && day <= newest, "day {day} outside window");
    }
}

#[test]
fn eligible_indices_are_ascending_and_come_from_the_window() {
    let closes: Vec<f64> = (0..40).map(|n| 100.0 + n as f64).collect();
    let series = series("2024-02-20", &closes);

    let eligible = eligible_starts(&series, today());
    assert!(eligible.windows(2).all(|pair| pair[0] < pair[1]));
    // Indices 0..7 lack seed history; index 39 has no next point. The days
    // run 2024-02-20 through 2024-03-30, so everything else sits inside
    // the [today-100, today-7] window.
    assert_eq!(eligible.first(), Some(&SEED_POINTS));
    assert_eq!(eligible.last(), Some(&38));
    assert_eq!(eligible.len(), 32);
}

#[test]
fn picks_cover_more_than_one_candidate_over_many_seeds() {
    // Uniform draw over a multi-element set: different seeds must not all
    // collapse onto one index.
    let closes: Vec<f64> = (0..40).map(|n| 100.0 + n as f64).collect();
    let series = series("2024-02-20", &closes);

    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..64 {
        let mut rng = fastrand::Rng::with_seed(seed);
        seen.insert(pick_start(&series, today(), &mut rng).expect("eligible"));
    }
    assert!(seen.len() > 1);
}

#[test]
fn a_series_newer_than_the_window_yields_none() {
    // All days fall within the last six days before "today".
    let closes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let series = series("2024-03-31", &closes);

    let mut rng = fastrand::Rng::with_seed(3);
    assert_eq!(pick_start(&series, today(), &mut rng), None);
}
