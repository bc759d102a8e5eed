//! kurssi-core
//!
//! Pure analytics over already-fetched price time-series.
//!
//! - `timeseries`: classify sample spacing and reduce sub-daily bundles to one
//!   sample per UTC day.
//! - `analytics`: longest downward run, extrema, and the best single buy/sell pair.
//!
//! Every function is synchronous and side-effect free. Empty input degrades to
//! a documented neutral value instead of an error, so independent calls (price
//! vs. volume, several symbols) can run on any thread without coordination.
//!
//! The `tracing` feature emits spans and debug events from the classifier and
//! the aligner.
#![warn(missing_docs)]

/// Trend, extremum and buy/sell analytics.
pub mod analytics;
/// Granularity classification and day alignment.
pub mod timeseries;

pub use analytics::extremum::{highest, lowest};
pub use analytics::profit::time_to_buy_sell;
pub use analytics::trend::longest_downward_trend;
pub use kurssi_types::*;
pub use timeseries::align::{align_to_days, align_to_days_with};
pub use timeseries::infer::{classify, classify_with};
