//! Series normalizer: raw provider payload to a canonical ordered series.

use crate::source::RawSeries;
use crate::{PricePoint, Series, TradingDay};

/// Convert a raw dated-bar payload into an ascending series of closing
/// prices. Entries whose day or price fails to parse, or whose price is not
/// a finite positive number, are discarded. An empty result is a valid
/// outcome the caller must check, not an error.
pub fn normalize(raw: &RawSeries) -> Series {
    raw.iter()
        .filter_map(|(day_str, bar)| {
            let day = TradingDay::parse(day_str).ok()?;
            let close = bar.price_field()?.trim().parse::<f64>().ok()?;
            PricePoint::new(day, close).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawBar;

    fn bar(adjusted: Option<&str>, close: Option<&str>) -> RawBar {
        RawBar {
            adjusted_close: adjusted.map(str::to_owned),
            close: close.map(str::to_owned),
        }
    }

    #[test]
    fn output_is_strictly_ascending_by_day() {
        let mut raw = RawSeries::new();
        raw.insert(String::from("2024-03-08"), bar(Some("12.0"), None));
        raw.insert(String::from("2024-03-06"), bar(Some("10.0"), None));
        raw.insert(String::from("2024-03-07"), bar(Some("11.0"), None));

        let series = normalize(&raw);
        assert_eq!(series.len(), 3);
        let days: Vec<String> = series
            .points()
            .iter()
            .map(|p| p.day.format_iso())
            .collect();
        assert_eq!(days, ["2024-03-06", "2024-03-07", "2024-03-08"]);
    }

    #[test]
    fn falls_back_to_unadjusted_close() {
        let mut raw = RawSeries::new();
        raw.insert(String::from("2024-03-06"), bar(None, Some("10.5")));

        let series = normalize(&raw);
        assert_eq!(series.get(0).map(|p| p.close), Some(10.5));
    }

    #[test]
    fn discards_unparseable_and_non_finite_prices() {
        let mut raw = RawSeries::new();
        raw.insert(String::from("2024-03-06"), bar(Some("10.0"), None));
        raw.insert(String::from("2024-03-07"), bar(Some("n/a"), None));
        raw.insert(String::from("2024-03-08"), bar(Some("inf"), None));
        raw.insert(String::from("2024-03-09"), bar(None, None));
        raw.insert(String::from("not-a-date"), bar(Some("11.0"), None));

        let series = normalize(&raw);
        assert_eq!(series.len(), 1);
        assert_eq!(series.first_day().map(|d| d.format_iso()).as_deref(), Some("2024-03-06"));
    }

    #[test]
    fn empty_payload_yields_empty_series() {
        assert!(normalize(&RawSeries::new()).is_empty());
    }
}
