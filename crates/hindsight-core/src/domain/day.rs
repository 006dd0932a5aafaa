use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::ValidationError;

const ISO_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar day at day precision, no time-of-day or zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    /// Parse an ISO `YYYY-MM-DD` date string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, ISO_DAY)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay {
                value: input.to_owned(),
            })
    }

    /// The current calendar day in UTC.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// The day `days` calendar days earlier.
    pub fn days_earlier(self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DAY)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_day() {
        let day = TradingDay::parse("2024-03-08").expect("must parse");
        assert_eq!(day.format_iso(), "2024-03-08");
    }

    #[test]
    fn rejects_non_iso_input() {
        let err = TradingDay::parse("03/08/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDay { .. }));
    }

    #[test]
    fn days_earlier_crosses_month_boundaries() {
        let day = TradingDay::parse("2024-03-08").expect("must parse");
        assert_eq!(day.days_earlier(8).format_iso(), "2024-02-29");
    }

    #[test]
    fn orders_chronologically() {
        let earlier = TradingDay::parse("2024-03-07").expect("must parse");
        let later = TradingDay::parse("2024-03-08").expect("must parse");
        assert!(earlier < later);
    }
}
