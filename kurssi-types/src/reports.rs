//! Report envelope produced by the analyzer.

use serde::{Deserialize, Serialize};

use crate::error::KurssiError;
use crate::granularity::Granularity;
use crate::results::{Extremum, ProfitResult, TrendResult};
use crate::series::TimeSeriesBundle;

/// Everything a presentation layer needs for one bundle.
///
/// `days` is the bundle the analytics ran on: day-aligned when alignment is
/// enabled, otherwise the input unchanged. Extremum fields are
/// [`Extremum::Empty`] when `days` holds no samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Classification of the raw input.
    pub granularity: Granularity,
    /// The (possibly aligned) bundle the analytics ran on.
    pub days: TimeSeriesBundle,
    /// Longest downward run in `days.prices`.
    pub downward_trend: TrendResult,
    /// Highest trading volume in `days.total_volumes`.
    pub highest_volume: Extremum,
    /// Highest price in `days.prices`.
    pub highest_price: Extremum,
    /// Lowest price in `days.prices`.
    pub lowest_price: Extremum,
    /// Best buy/sell pair; `None` when there are no prices.
    pub buy_sell: Option<ProfitResult>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<KurssiError>,
}
