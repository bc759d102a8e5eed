//! Kurssi turns a raw provider price bundle into a day-level analysis report.
//!
//! Overview
//! - Classifies the sampling granularity of the input (five-minute, hourly, daily).
//! - Reduces sub-daily bundles to one representative sample per UTC midnight.
//! - Runs the analytics over the aligned prices and volumes: longest downward
//!   run, highest volume, highest and lowest price, best buy/sell pair.
//! - Validates the bundle at the boundary and reports degenerate analytics as
//!   non-fatal warnings instead of errors.
//!
//! Key behaviors and trade-offs
//! - Alignment keeps the same indices in prices, market caps and volumes, so the
//!   report's `days` bundle stays positionally consistent.
//! - Alignment can be disabled with [`KurssiBuilder::align_to_days`]; analytics then
//!   run on the raw samples.
//! - A report over fewer than two days still carries every field. The trend is
//!   flat and the buy/sell pair has zero profit; `warnings` says so.
//!
//! Examples
//! ```
//! use kurssi::{Kurssi, Granularity, TimeSeriesBundle};
//!
//! let payload = r#"{
//!     "prices": [[1579392282000, 8.0], [1579478682000, 7.0], [1579565082000, 9.0]],
//!     "market_caps": [[1579392282000, 80.0], [1579478682000, 70.0], [1579565082000, 90.0]],
//!     "total_volumes": [[1579392282000, 1.0], [1579478682000, 3.0], [1579565082000, 2.0]]
//! }"#;
//!
//! let kurssi = Kurssi::builder().build()?;
//! let report = kurssi.analyze_json(payload)?;
//! assert_eq!(report.granularity, Granularity::Daily);
//! assert_eq!(report.downward_trend.length, 1);
//! assert_eq!(report.buy_sell.map(|r| r.max_profit), Some(2.0));
//! # Ok::<(), kurssi::KurssiError>(())
//! ```
//!
//! Analysing only a selected period:
//! ```
//! use kurssi::{DateRange, Kurssi, TimeSeriesBundle};
//!
//! let kurssi = Kurssi::builder().build()?;
//! let range = DateRange::parse("2020-01-19", "2020-01-21")?;
//! let report = kurssi.analyze_range(&TimeSeriesBundle::empty(), &range)?;
//! assert!(report.days.is_empty());
//! # Ok::<(), kurssi::KurssiError>(())
//! ```
#![warn(missing_docs)]

mod analyze;
pub(crate) mod core;

pub use core::{Kurssi, KurssiBuilder};

// Re-export the data model and analytics for convenience
pub use kurssi_core::{
    // Configuration
    AlignConfig,
    // Results
    AnalysisReport,
    DAY_MS,
    DateRange,
    Extremum,
    Granularity,
    KurssiConfig,
    KurssiError,
    ProfitResult,
    // Data
    TimeSeriesBundle,
    TimeValuePair,
    TrendResult,
    // Operations
    align_to_days,
    align_to_days_with,
    classify,
    classify_with,
    highest,
    longest_downward_trend,
    lowest,
    time_to_buy_sell,
};
