use crate::display_date::DisplayDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar-month season of an event.
///
/// Buckets always follow the Northern-hemisphere convention, even for
/// countries whose [`Hemisphere`](crate::hemisphere::Hemisphere) is
/// `Southern`. The two labels are derived independently and never reconciled,
/// so a hemisphere-by-season table reports two separate axes rather than a
/// corrected local season.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    Unknown,
}

impl Season {
    /// Every label, in declaration order.
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Unknown,
    ];

    /// Map a calendar month (1-12) to its season.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Unknown,
        }
    }

    /// Classify a `DD.Mon` display string. Anything that fails to parse is
    /// `Unknown`.
    pub fn classify(display: &str) -> Season {
        match DisplayDate::parse(display) {
            Ok(date) => Season::from(date),
            Err(e) => {
                debug!("Classifying as Unknown: {}", e);
                Season::Unknown
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Unknown => "Unknown",
        }
    }

    /// Legend color for map and chart rendering. `Unknown` has none.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Season::Winter => Some("#4C72B0"),
            Season::Spring => Some("#55A868"),
            Season::Summer => Some("#E69F00"),
            Season::Fall => Some("#C44E52"),
            Season::Unknown => None,
        }
    }
}

impl From<DisplayDate> for Season {
    fn from(value: DisplayDate) -> Self {
        Season::from_month(value.month())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Season;

    #[test]
    fn test_classify_each_season() {
        assert_eq!(Season::classify("15.Jan"), Season::Winter);
        assert_eq!(Season::classify("15.Apr"), Season::Spring);
        assert_eq!(Season::classify("15.Jul"), Season::Summer);
        assert_eq!(Season::classify("15.Oct"), Season::Fall);
    }

    #[test]
    fn test_classify_unparseable() {
        assert_eq!(Season::classify("garbage"), Season::Unknown);
        assert_eq!(Season::classify(""), Season::Unknown);
        assert_eq!(Season::classify("26.Jan / 15.Aug"), Season::Unknown);
    }

    #[test]
    fn test_classify_leap_day_is_winter() {
        assert_eq!(Season::classify("29.Feb"), Season::Winter);
    }

    #[test]
    fn test_month_buckets() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Fall,
            Season::Fall,
            Season::Fall,
            Season::Winter,
        ];
        for (month, season) in (1..=12).zip(expected) {
            assert_eq!(Season::from_month(month), season, "month {}", month);
        }
        assert_eq!(Season::from_month(0), Season::Unknown);
        assert_eq!(Season::from_month(13), Season::Unknown);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let inputs = ["01.Mar", "garbage", "31.Dec", "29.Feb"];
        let first: Vec<Season> = inputs.iter().map(|s| Season::classify(s)).collect();
        let second: Vec<Season> = inputs.iter().map(|s| Season::classify(s)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Season::Winter.color(), Some("#4C72B0"));
        assert_eq!(Season::Unknown.color(), None);
        assert_eq!(Season::Fall.to_string(), "Fall");
    }
}
