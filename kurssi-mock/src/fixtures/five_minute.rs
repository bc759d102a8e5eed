use kurssi_types::{Granularity, TimeSeriesBundle};

use crate::builder::{SeriesBuilder, utc_ms};

/// 2021-12-16 00:02 through 2021-12-17 ~00:57 UTC at five-minute spacing.
///
/// The trailing hour past the second midnight mirrors a provider query whose
/// end bound was padded by an hour.
pub fn one_day() -> TimeSeriesBundle {
    SeriesBuilder::new(utc_ms(2021, 12, 16, 0, 2, 31))
        .granularity(Granularity::FiveMinute)
        .count(288 + 12)
        .jitter_ms(20_000)
        .seed(16)
        .base_price(41_000.0)
        .build()
}
