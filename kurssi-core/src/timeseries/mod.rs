//! Time-series utilities applied before the analytics run.
//!
//! Modules include:
//! - `infer`: classify a series as five-minute, hourly or daily
//! - `align`: keep one sample per UTC day, nearest each midnight
/// Day alignment of sub-daily bundles.
pub mod align;
/// Granularity classification from sample spacing.
pub mod infer;
