use kurssi_types::TimeSeriesBundle;

mod daily;
mod five_minute;
mod hourly;

pub const NAMES: &[&str] = &[
    "hourly_3d",
    "hourly_sparse_day",
    "hourly_far_midnight",
    "five_minute_1d",
    "daily_long",
    "daily_intraday_head",
];

pub fn by_name(name: &str) -> Option<TimeSeriesBundle> {
    match name {
        "hourly_3d" => Some(hourly::three_days()),
        "hourly_sparse_day" => Some(hourly::sparse_day()),
        "hourly_far_midnight" => Some(hourly::far_midnight()),
        "five_minute_1d" => Some(five_minute::one_day()),
        "daily_long" => Some(daily::long()),
        "daily_intraday_head" => Some(daily::intraday_head()),
        _ => None,
    }
}
