use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

/// Time granularity of a historical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    SixtyMinutes,
    Daily,
    Weekly,
    Monthly,
}

impl Delta {
    pub const ALL: [Self; 8] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::OneMinute
                | Self::FiveMinutes
                | Self::FifteenMinutes
                | Self::ThirtyMinutes
                | Self::SixtyMinutes
        )
    }

    /// Upstream `function` query parameter.
    pub const fn function(self) -> &'static str {
        match self {
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
            _ => "TIME_SERIES_INTRADAY",
        }
    }

    /// Upstream `interval` query parameter; only intraday requests carry one.
    pub const fn interval(self) -> Option<&'static str> {
        if self.is_intraday() {
            Some(self.as_str())
        } else {
            None
        }
    }

    /// Top-level key holding the series in the upstream document.
    pub const fn series_key(self) -> &'static str {
        match self {
            Self::OneMinute => "Time Series (1min)",
            Self::FiveMinutes => "Time Series (5min)",
            Self::FifteenMinutes => "Time Series (15min)",
            Self::ThirtyMinutes => "Time Series (30min)",
            Self::SixtyMinutes => "Time Series (60min)",
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
        }
    }
}

impl Display for Delta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delta {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|delta| delta.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidDelta {
                value: value.to_owned(),
            })
    }
}
