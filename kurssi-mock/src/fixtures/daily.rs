use kurssi_types::{DAY_MS, Granularity, TimeSeriesBundle};

use crate::builder::{SeriesBuilder, bundle_from_timestamps, utc_ms};

/// 2020-03-01 through 2021-08-01, one sample a few minutes after each midnight.
pub fn long() -> TimeSeriesBundle {
    SeriesBuilder::new(utc_ms(2020, 3, 1, 0, 0, 0))
        .granularity(Granularity::Daily)
        .count(519)
        .jitter_ms(0)
        .seed(3)
        .build()
}

/// Daily samples for 2018-03-01 through 2018-03-08, plus an extra 09:00
/// sample on the first day. The first delta looks hourly.
pub fn intraday_head() -> TimeSeriesBundle {
    let mut ts = vec![utc_ms(2018, 3, 1, 0, 5, 0), utc_ms(2018, 3, 1, 9, 0, 0)];
    ts.extend((1..8).map(|d| utc_ms(2018, 3, 1, 0, 2, 30) + d * DAY_MS));
    bundle_from_timestamps(&ts, 2018)
}
