use serde::{Deserialize, Serialize};

/// Nominal spacing between raw samples of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Roughly one sample every five minutes.
    FiveMinute,
    /// Roughly one sample per hour.
    Hourly,
    /// Already one sample per day.
    Daily,
}

impl Granularity {
    /// Samples expected before a full day reoccurs (288, 24 or 1).
    #[must_use]
    pub const fn points_per_day(self) -> usize {
        match self {
            Self::FiveMinute => 288,
            Self::Hourly => 24,
            Self::Daily => 1,
        }
    }

    /// Nominal sample spacing in milliseconds.
    #[must_use]
    pub const fn nominal_step_ms(self) -> i64 {
        match self {
            Self::FiveMinute => 300_000,
            Self::Hourly => 3_600_000,
            Self::Daily => 86_400_000,
        }
    }

    /// True for five-minute and hourly series.
    #[must_use]
    pub const fn is_subdaily(self) -> bool {
        !matches!(self, Self::Daily)
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FiveMinute => "5m",
            Self::Hourly => "1h",
            Self::Daily => "1d",
        })
    }
}
