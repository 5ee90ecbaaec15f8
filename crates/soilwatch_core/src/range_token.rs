use std::fmt::Display;

use jiff::{SignedDuration, Timestamp};

use crate::time_range::TimeRange;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RangeToken {
    #[default]
    OneHour,
    Day,
    TwoDays,
    Week,
}

impl RangeToken {
    pub const ALL: [RangeToken; 4] = [
        RangeToken::OneHour,
        RangeToken::Day,
        RangeToken::TwoDays,
        RangeToken::Week,
    ];

    /// Unknown tokens fall back to the one hour window.
    pub fn parse_or_default(token: &str) -> Self {
        match token.trim() {
            "1h" => RangeToken::OneHour,
            "24h" => RangeToken::Day,
            "2d" => RangeToken::TwoDays,
            "7d" => RangeToken::Week,
            _ => RangeToken::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeToken::OneHour => "1h",
            RangeToken::Day => "24h",
            RangeToken::TwoDays => "2d",
            RangeToken::Week => "7d",
        }
    }

    pub fn offset(&self) -> SignedDuration {
        match self {
            RangeToken::OneHour => SignedDuration::from_hours(1),
            RangeToken::Day => SignedDuration::from_hours(24),
            RangeToken::TwoDays => SignedDuration::from_hours(48),
            RangeToken::Week => SignedDuration::from_hours(168),
        }
    }

    pub fn window_ending_at(&self, now: Timestamp) -> TimeRange {
        TimeRange::new(now - self.offset(), now)
    }
}

impl Display for RangeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn resolve_range(token: &str, now: Timestamp) -> TimeRange {
    RangeToken::parse_or_default(token).window_ending_at(now)
}
