//! Kurssi data model, configuration primitives and error type.
//!
//! Everything here is plain data: the provider-shaped [`TimeSeriesBundle`],
//! the analytic result records, and the tuning constants for alignment.
#![warn(missing_docs)]

mod config;
mod error;
mod granularity;
mod range;
mod reports;
mod results;
mod series;

pub use config::{AlignConfig, KurssiConfig};
pub use error::KurssiError;
pub use granularity::Granularity;
pub use range::{DAY_MS, DateRange, END_SLACK_MS, floor_to_midnight, ms_since_midnight};
pub use reports::AnalysisReport;
pub use results::{Extremum, ProfitResult, TrendResult};
pub use series::{TimeSeriesBundle, TimeValuePair};
