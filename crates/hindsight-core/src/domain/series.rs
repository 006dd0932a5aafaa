use serde::Serialize;

use crate::{TradingDay, ValidationError};

/// One daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub day: TradingDay,
    pub close: f64,
}

impl PricePoint {
    /// Construct a point with a finite, positive close.
    pub fn new(day: TradingDay, close: f64) -> Result<Self, ValidationError> {
        if !close.is_finite() {
            return Err(ValidationError::NonFiniteClose);
        }
        if close <= 0.0 {
            return Err(ValidationError::NonPositiveClose);
        }
        Ok(Self { day, close })
    }
}

/// Closing prices in strictly ascending day order.
///
/// The constructor sorts and collapses duplicate days, so the ordering
/// invariant holds for every value of this type. A series is fixed once
/// built; gameplay only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Build a series from points in any order. Duplicate days collapse to
    /// the first occurrence.
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.day);
        points.dedup_by_key(|point| point.day);
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn first_day(&self) -> Option<TradingDay> {
        self.points.first().map(|point| point.day)
    }

    pub fn last_day(&self) -> Option<TradingDay> {
        self.points.last().map(|point| point.day)
    }
}

impl FromIterator<PricePoint> for Series {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: &str, close: f64) -> PricePoint {
        PricePoint::new(TradingDay::parse(day).expect("day"), close).expect("point")
    }

    #[test]
    fn sorts_points_ascending_by_day() {
        let series = Series::new(vec![
            point("2024-03-08", 12.0),
            point("2024-03-06", 10.0),
            point("2024-03-07", 11.0),
        ]);

        let days: Vec<String> = series
            .points()
            .iter()
            .map(|p| p.day.format_iso())
            .collect();
        assert_eq!(days, ["2024-03-06", "2024-03-07", "2024-03-08"]);
    }

    #[test]
    fn collapses_duplicate_days() {
        let series = Series::new(vec![
            point("2024-03-06", 10.0),
            point("2024-03-06", 99.0),
        ]);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn rejects_non_positive_close() {
        let day = TradingDay::parse("2024-03-06").expect("day");
        assert!(matches!(
            PricePoint::new(day, 0.0),
            Err(ValidationError::NonPositiveClose)
        ));
        assert!(matches!(
            PricePoint::new(day, f64::NAN),
            Err(ValidationError::NonFiniteClose)
        ));
    }
}
