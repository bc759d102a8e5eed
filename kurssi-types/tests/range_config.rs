use chrono::NaiveDate;
use kurssi_types::{
    AlignConfig, DAY_MS, DateRange, END_SLACK_MS, KurssiConfig, KurssiError, floor_to_midnight,
    ms_since_midnight,
};
use proptest::prelude::*;

#[test]
fn range_from_dates_adds_end_slack() {
    let r = DateRange::parse("2020-01-19", "2020-01-21").unwrap();
    // 2020-01-19T00:00:00Z
    assert_eq!(r.start_ms(), 1_579_392_000_000);
    assert_eq!(r.end_ms(), 1_579_392_000_000 + 2 * DAY_MS + END_SLACK_MS);
    assert!(r.contains(1_579_565_263_674)); // 2020-01-21 00:07:43.674
    assert!(!r.contains(1_579_392_000_000 - 1));
}

#[test]
fn range_rejects_reversed_bounds() {
    assert!(matches!(DateRange::new(2, 1), Err(KurssiError::InvalidArg(_))));
    let a = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
    let b = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    assert!(DateRange::from_dates(a, b).is_err());
    assert!(DateRange::from_dates(a, a).is_ok());
}

#[test]
fn range_rejects_malformed_dates() {
    assert!(matches!(
        DateRange::parse("2021-13-01", "2021-12-01"),
        Err(KurssiError::InvalidArg(_))
    ));
    assert!(DateRange::parse("", "2021-12-01").is_err());
}

#[test]
fn default_align_config_is_valid() {
    assert!(AlignConfig::default().validate().is_ok());
    let cfg = KurssiConfig::default();
    assert!(cfg.align_to_days);
}

#[test]
fn align_config_rejects_inverted_thresholds() {
    let cfg = AlignConfig {
        five_minute_below_secs: 40_000,
        ..AlignConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(KurssiError::InvalidArg(_))));

    let cfg = AlignConfig {
        hourly_below_secs: 0,
        ..AlignConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_fills_missing_fields_from_defaults() {
    let cfg: KurssiConfig = serde_json::from_str(r#"{"align":{"skip_ahead_divisor":0}}"#).unwrap();
    assert_eq!(cfg.align.skip_ahead_divisor, 0);
    assert_eq!(cfg.align.hourly_below_secs, 36_000);
    assert!(cfg.align_to_days);
}

proptest! {
    #[test]
    fn midnight_helpers_partition_timestamps(ts in -4_000_000_000_000i64..4_000_000_000_000i64) {
        let m = floor_to_midnight(ts);
        prop_assert_eq!(m % DAY_MS, 0);
        prop_assert!(m <= ts && ts < m + DAY_MS);
        prop_assert_eq!(m + ms_since_midnight(ts), ts);
    }
}
