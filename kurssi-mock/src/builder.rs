use chrono::NaiveDate;
use kurssi_types::{Granularity, TimeSeriesBundle, TimeValuePair};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CIRCULATING_SUPPLY: f64 = 18_170_000.0;

/// Epoch milliseconds for a UTC wall-clock time.
///
/// # Panics
/// Panics if the date or time is out of range; fixtures use literal values.
#[must_use]
pub fn utc_ms(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, ss))
        .expect("valid fixture timestamp")
        .and_utc()
        .timestamp_millis()
}

/// Builder for an evenly spaced bundle.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    start_ms: i64,
    step_ms: i64,
    count: usize,
    jitter_ms: i64,
    seed: u64,
    base_price: f64,
}

impl SeriesBuilder {
    /// Start a builder at `start_ms` with hourly spacing and no samples.
    #[must_use]
    pub const fn new(start_ms: i64) -> Self {
        Self {
            start_ms,
            step_ms: 3_600_000,
            count: 0,
            jitter_ms: 0,
            seed: 7,
            base_price: 8_000.0,
        }
    }

    /// Nominal spacing between samples.
    #[must_use]
    pub const fn step_ms(mut self, step_ms: i64) -> Self {
        self.step_ms = step_ms;
        self
    }

    /// Use the nominal spacing of `granularity`.
    #[must_use]
    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.step_ms = granularity.nominal_step_ms();
        self
    }

    /// Number of samples.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Maximum absolute timestamp jitter; clamped below half a step so
    /// timestamps stay strictly increasing.
    #[must_use]
    pub const fn jitter_ms(mut self, jitter_ms: i64) -> Self {
        self.jitter_ms = jitter_ms;
        self
    }

    /// RNG seed for jitter and values.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Price of the first sample.
    #[must_use]
    pub const fn base_price(mut self, price: f64) -> Self {
        self.base_price = price;
        self
    }

    /// Timestamps only, after jitter.
    #[must_use]
    pub fn timestamps(&self) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let jitter = self.jitter_ms.clamp(0, (self.step_ms / 2 - 1).max(0));
        (0..self.count)
            .map(|i| {
                let nominal = self.start_ms + self.step_ms * i64::try_from(i).unwrap_or(i64::MAX);
                nominal + rng.random_range(-jitter..=jitter)
            })
            .collect()
    }

    /// Build the three parallel series.
    #[must_use]
    pub fn build(&self) -> TimeSeriesBundle {
        random_walk(&self.timestamps(), self.seed, self.base_price)
    }
}

/// Bundle over the given timestamps with a seeded random-walk price.
#[must_use]
pub fn bundle_from_timestamps(timestamps: &[i64], seed: u64) -> TimeSeriesBundle {
    random_walk(timestamps, seed, 8_000.0)
}

fn random_walk(timestamps: &[i64], seed: u64, base_price: f64) -> TimeSeriesBundle {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut price = base_price;
    let mut prices = Vec::with_capacity(timestamps.len());
    let mut market_caps = Vec::with_capacity(timestamps.len());
    let mut total_volumes = Vec::with_capacity(timestamps.len());
    for &ts in timestamps {
        prices.push(TimeValuePair::new(ts, price));
        market_caps.push(TimeValuePair::new(ts, price * CIRCULATING_SUPPLY));
        total_volumes.push(TimeValuePair::new(
            ts,
            rng.random_range(15_000_000_000.0..35_000_000_000.0),
        ));
        price *= 1.0 + rng.random_range(-0.02..0.02);
    }
    TimeSeriesBundle {
        prices,
        market_caps,
        total_volumes,
    }
}
