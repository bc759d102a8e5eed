//! Single-pass analytics over a chronologically ordered series.
//!
//! Each analytic is a fold over a small running-state record; none of them
//! allocate beyond their result.
/// Highest and lowest sample.
pub mod extremum;
/// Best single buy-then-sell pair.
pub mod profit;
/// Longest strictly decreasing run.
pub mod trend;
