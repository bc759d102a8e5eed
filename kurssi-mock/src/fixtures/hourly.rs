use kurssi_types::{Granularity, TimeSeriesBundle};

use crate::builder::{SeriesBuilder, bundle_from_timestamps, utc_ms};

/// 2020-01-19 00:04 through 2020-01-21 00:04 UTC, hourly with a few minutes of jitter.
pub fn three_days() -> TimeSeriesBundle {
    SeriesBuilder::new(utc_ms(2020, 1, 19, 0, 4, 42))
        .granularity(Granularity::Hourly)
        .count(49)
        .jitter_ms(180_000)
        .seed(19)
        .build()
}

/// 2019-03-25 through 2019-04-01, hourly, with 2019-03-27 04:00-11:59 missing
/// so that day only has 16 samples.
pub fn sparse_day() -> TimeSeriesBundle {
    let gap_start = utc_ms(2019, 3, 27, 4, 0, 0);
    let gap_end = utc_ms(2019, 3, 27, 12, 0, 0);
    let ts: Vec<i64> = SeriesBuilder::new(utc_ms(2019, 3, 25, 0, 3, 10))
        .granularity(Granularity::Hourly)
        .count(7 * 24 + 1)
        .jitter_ms(120_000)
        .seed(25)
        .timestamps()
        .into_iter()
        .filter(|t| !(gap_start..gap_end).contains(t))
        .collect();
    bundle_from_timestamps(&ts, 25)
}

/// 2021-01-14 through 2021-01-18, hourly at :28 past, with the 00:28 sample
/// on 2021-01-17 missing. The closest sample to that midnight is 23:28 the
/// day before.
pub fn far_midnight() -> TimeSeriesBundle {
    let missing = utc_ms(2021, 1, 17, 0, 28, 52);
    let ts: Vec<i64> = SeriesBuilder::new(utc_ms(2021, 1, 14, 0, 28, 52))
        .granularity(Granularity::Hourly)
        .count(4 * 24 + 1)
        .timestamps()
        .into_iter()
        .filter(|&t| t != missing)
        .collect();
    bundle_from_timestamps(&ts, 14)
}
