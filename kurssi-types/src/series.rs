//! Time/value samples and the three-series bundle returned by market-data providers.

use serde::{Deserialize, Serialize};

use crate::error::KurssiError;
use crate::range::DateRange;

/// A single sample: epoch milliseconds and the observed value.
///
/// On the wire this is the two-element array `[timestampMillis, value]`, the
/// same shape the market-data provider emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct TimeValuePair {
    /// Sample time in milliseconds since the Unix epoch (UTC).
    pub timestamp: i64,
    /// Observed value. May be negative; no magnitude bound.
    pub value: f64,
}

impl TimeValuePair {
    /// Construct a sample from epoch milliseconds and a value.
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(i64, f64)> for TimeValuePair {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Self { timestamp, value }
    }
}

impl From<TimeValuePair> for (i64, f64) {
    fn from(p: TimeValuePair) -> Self {
        (p.timestamp, p.value)
    }
}

/// Prices, market caps and trading volumes sampled at the same ticks.
///
/// Index `i` in each of the three vectors refers to the same originating
/// sample. Keys missing from the JSON payload decode as empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesBundle {
    /// Price samples.
    #[serde(default)]
    pub prices: Vec<TimeValuePair>,
    /// Market capitalisation samples.
    #[serde(default)]
    pub market_caps: Vec<TimeValuePair>,
    /// Trading volume samples.
    #[serde(default)]
    pub total_volumes: Vec<TimeValuePair>,
}

impl TimeSeriesBundle {
    /// Bundle of three empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            prices: Vec::new(),
            market_caps: Vec::new(),
            total_volumes: Vec::new(),
        }
    }

    /// Number of price samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when all three series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.market_caps.is_empty() && self.total_volumes.is_empty()
    }

    /// Decode the provider payload `{prices, market_caps, total_volumes}`.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::Data)` if the text is not valid JSON of that shape.
    pub fn from_json(text: &str) -> Result<Self, KurssiError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode back into the provider payload shape.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::Data)` if a value cannot be represented in JSON
    /// (non-finite floats are emitted as `null` by `serde_json`, so this is rare).
    pub fn to_json(&self) -> Result<String, KurssiError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the positional-alignment precondition the analytics rely on.
    ///
    /// # Errors
    /// - Returns `Err(KurssiError::Data)` if the three series differ in length.
    /// - Returns `Err(KurssiError::Data)` if price timestamps are not strictly increasing.
    pub fn validate(&self) -> Result<(), KurssiError> {
        let n = self.prices.len();
        if self.market_caps.len() != n || self.total_volumes.len() != n {
            return Err(KurssiError::data(format!(
                "series length mismatch: prices={} market_caps={} total_volumes={}",
                n,
                self.market_caps.len(),
                self.total_volumes.len()
            )));
        }
        if let Some(w) = self
            .prices
            .windows(2)
            .find(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(KurssiError::data(format!(
                "price timestamps not strictly increasing at {} -> {}",
                w[0].timestamp, w[1].timestamp
            )));
        }
        Ok(())
    }

    /// Keep the samples whose price timestamp lies inside `range` (inclusive).
    ///
    /// The same indices are kept in all three series.
    #[must_use]
    pub fn slice_range(&self, range: &DateRange) -> Self {
        let keep: Vec<usize> = self
            .prices
            .iter()
            .enumerate()
            .filter(|(_, p)| range.contains(p.timestamp))
            .map(|(i, _)| i)
            .collect();
        self.select(&keep)
    }

    /// Build a bundle from the given indices, applied identically to every series.
    ///
    /// Indices past the end of a shorter parallel series are skipped rather than
    /// panicking; a validated bundle never hits that case.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let pick = |series: &[TimeValuePair]| -> Vec<TimeValuePair> {
            indices.iter().filter_map(|&i| series.get(i).copied()).collect()
        };
        Self {
            prices: pick(&self.prices),
            market_caps: pick(&self.market_caps),
            total_volumes: pick(&self.total_volumes),
        }
    }
}
