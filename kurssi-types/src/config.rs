//! Configuration types shared by the aligner and the analyzer facade.

use serde::{Deserialize, Serialize};

use crate::error::KurssiError;

/// Tuning constants for granularity classification and day alignment.
///
/// The thresholds leave slack around the nominal 300 s / 3600 s / 86 400 s
/// spacings since provider timestamps jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// First-delta (seconds) below which a series is five-minute.
    pub five_minute_below_secs: i64,
    /// First-delta (seconds) below which a series is hourly.
    pub hourly_below_secs: i64,
    /// After a day pick, skip up to `points_per_day / skip_ahead_divisor` samples.
    ///
    /// `0` disables skipping. Skipping never crosses the next day boundary, so
    /// this only affects speed.
    pub skip_ahead_divisor: usize,
    /// A five-minute series keeps its final sample only if it lies within this
    /// many milliseconds after UTC midnight.
    pub tail_tolerance_ms: i64,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            five_minute_below_secs: 720,
            hourly_below_secs: 36_000,
            skip_ahead_divisor: 2,
            tail_tolerance_ms: 480_000,
        }
    }
}

impl AlignConfig {
    /// Check threshold ordering and signs.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::InvalidArg)` if a threshold is not positive,
    /// the five-minute threshold is not below the hourly one, or the tail
    /// tolerance is negative.
    pub fn validate(&self) -> Result<(), KurssiError> {
        if self.five_minute_below_secs <= 0 || self.hourly_below_secs <= 0 {
            return Err(KurssiError::invalid_arg(
                "granularity thresholds must be positive",
            ));
        }
        if self.five_minute_below_secs >= self.hourly_below_secs {
            return Err(KurssiError::invalid_arg(format!(
                "five_minute_below_secs ({}) must be below hourly_below_secs ({})",
                self.five_minute_below_secs, self.hourly_below_secs
            )));
        }
        if self.tail_tolerance_ms < 0 {
            return Err(KurssiError::invalid_arg("tail_tolerance_ms must not be negative"));
        }
        Ok(())
    }
}

/// Global configuration for the `Kurssi` analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KurssiConfig {
    /// Classification and alignment constants.
    pub align: AlignConfig,
    /// Reduce sub-daily bundles to one sample per UTC day before analysing.
    pub align_to_days: bool,
}

impl Default for KurssiConfig {
    fn default() -> Self {
        Self {
            align: AlignConfig::default(),
            align_to_days: true,
        }
    }
}
