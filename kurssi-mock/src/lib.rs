//! Deterministic synthetic bundles for tests and demos.
//!
//! [`SeriesBuilder`] produces evenly spaced (optionally jittered) samples with a
//! seeded random-walk price, a market cap proportional to price and a noisy
//! volume. [`MockFeed`] serves named fixtures modelled on real provider
//! responses at each granularity.

use kurssi_types::TimeSeriesBundle;

mod builder;
mod fixtures;

pub use builder::{SeriesBuilder, bundle_from_timestamps, utc_ms};

/// Named fixture source standing in for the market-data provider.
pub struct MockFeed;

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Names accepted by [`MockFeed::by_name`].
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        fixtures::NAMES
    }

    /// Look up a fixture bundle by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<TimeSeriesBundle> {
        fixtures::by_name(name)
    }
}
