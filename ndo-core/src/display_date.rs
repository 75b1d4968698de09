use crate::error::{NdoError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day-then-abbreviated-month format used by the dataset, e.g. `04.Jul`.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%b";

/// Leap year every display date is pinned to, so that `29.Feb` is a valid day.
pub const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A year-agnostic calendar day. Orders by month, then day.
///
/// Serializes as its `DD.Mon` text and is validated again on deserialize.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayDate {
    month: u32,
    day: u32,
}

impl DisplayDate {
    /// Create a DisplayDate from a month and day, validated against the
    /// reference leap year.
    pub fn from_md_opt(month: u32, day: u32) -> Option<DisplayDate> {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).map(|_| DisplayDate { month, day })
    }

    /// Parse a `DD.Mon` string. Surrounding whitespace is ignored.
    pub fn parse(display: &str) -> Result<DisplayDate> {
        let pinned = format!("{}.{}", display.trim(), REFERENCE_LEAP_YEAR);
        let format = format!("{}.%Y", DISPLAY_DATE_FORMAT);
        NaiveDate::parse_from_str(&pinned, &format)
            .map(DisplayDate::from)
            .map_err(|_| NdoError::DateParse(display.to_string()))
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Pin this date to the reference leap year.
    pub fn as_naive_date(&self) -> NaiveDate {
        // month and day were validated on construction
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, self.month, self.day).unwrap_or_default()
    }

    /// Day of the reference year, 1 (Jan 1) through 366 (Dec 31).
    pub fn ordinal(&self) -> u32 {
        self.as_naive_date().ordinal()
    }
}

impl From<NaiveDate> for DisplayDate {
    fn from(value: NaiveDate) -> Self {
        DisplayDate {
            month: value.month(),
            day: value.day(),
        }
    }
}

impl FromStr for DisplayDate {
    type Err = NdoError;

    fn from_str(s: &str) -> Result<Self> {
        DisplayDate::parse(s)
    }
}

impl TryFrom<String> for DisplayDate {
    type Error = NdoError;

    fn try_from(value: String) -> Result<Self> {
        DisplayDate::parse(&value)
    }
}

impl From<DisplayDate> for String {
    fn from(value: DisplayDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_naive_date().format(DISPLAY_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayDate;

    #[test]
    fn test_parse_display_date() {
        let date = DisplayDate::parse("04.Jul").unwrap();
        assert_eq!(date, DisplayDate { month: 7, day: 4 });
        assert_eq!(date.to_string(), "04.Jul");
    }

    #[test]
    fn test_parse_single_digit_day_and_whitespace() {
        let date = DisplayDate::parse(" 4.Jul ").unwrap();
        assert_eq!(date, DisplayDate { month: 7, day: 4 });
    }

    #[test]
    fn test_parse_leap_day() {
        let date = DisplayDate::parse("29.Feb").unwrap();
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.ordinal(), 60);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DisplayDate::parse("garbage").is_err());
        assert!(DisplayDate::parse("").is_err());
        assert!(DisplayDate::parse("30.Feb").is_err());
        assert!(DisplayDate::parse("04.Jul / 05.Jul").is_err());
        assert!(DisplayDate::parse("2023-07-04").is_err());
    }

    #[test]
    fn test_from_md_opt() {
        assert!(DisplayDate::from_md_opt(2, 29).is_some());
        assert!(DisplayDate::from_md_opt(4, 31).is_none());
        assert!(DisplayDate::from_md_opt(13, 1).is_none());
    }

    #[test]
    fn test_ordering_and_ordinal() {
        let jan1 = DisplayDate::from_md_opt(1, 1).unwrap();
        let dec31 = DisplayDate::from_md_opt(12, 31).unwrap();
        assert!(jan1 < dec31);
        assert_eq!(jan1.ordinal(), 1);
        assert_eq!(dec31.ordinal(), 366);
    }

    #[test]
    fn test_serde_uses_display_text() {
        let date = DisplayDate::from_md_opt(7, 4).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"04.Jul\"");
        let back: DisplayDate = serde_json::from_str("\"29.Feb\"").unwrap();
        assert_eq!(back, DisplayDate::from_md_opt(2, 29).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_invalid_days() {
        assert!(serde_json::from_str::<DisplayDate>("\"31.Feb\"").is_err());
        assert!(serde_json::from_str::<DisplayDate>("\"garbage\"").is_err());
        assert!(serde_json::from_str::<DisplayDate>(r#"{"month":2,"day":31}"#).is_err());
    }

    #[test]
    fn test_from_str() {
        let date: DisplayDate = "14.Jul".parse().unwrap();
        assert_eq!(date, DisplayDate { month: 7, day: 14 });
    }
}
