use kurssi_core::{
    Extremum, ProfitResult, TimeValuePair, TrendResult, highest, longest_downward_trend, lowest,
    time_to_buy_sell,
};

fn pairs(rows: &[(i64, f64)]) -> Vec<TimeValuePair> {
    rows.iter().map(|&(t, v)| TimeValuePair::new(t, v)).collect()
}

#[test]
fn downward_trend_of_empty_is_placeholder() {
    assert_eq!(longest_downward_trend(&[]), TrendResult::default());
    let v = serde_json::to_value(longest_downward_trend(&[])).unwrap();
    assert_eq!(v, serde_json::json!({ "start": "", "end": "", "length": 0 }));
}

#[test]
fn downward_trend_of_missing_is_placeholder() {
    let missing: Option<&[TimeValuePair]> = None;
    assert_eq!(
        missing.map_or_else(TrendResult::default, longest_downward_trend),
        TrendResult::default()
    );
}

#[test]
fn extrema_of_negative_values() {
    let data = pairs(&[(0, -1.0), (1, -2.0), (2, -3.0)]);
    assert_eq!(highest(&data), Extremum::At(TimeValuePair::new(0, -1.0)));
    assert_eq!(lowest(&data), Extremum::At(TimeValuePair::new(2, -3.0)));
}

#[test]
fn extrema_prefer_first_occurrence() {
    let data = pairs(&[(0, 5.0), (1, 4.0), (2, 1.0), (3, 1.0), (4, 6.0), (5, 6.0)]);
    assert_eq!(highest(&data), Extremum::At(TimeValuePair::new(4, 6.0)));
    assert_eq!(lowest(&data), Extremum::At(TimeValuePair::new(2, 1.0)));
}

#[test]
fn extrema_of_empty_and_missing() {
    assert_eq!(highest(&[]), Extremum::Empty);
    assert_eq!(lowest(&[]), Extremum::Empty);
    let missing: Option<&[TimeValuePair]> = None;
    assert_eq!(missing.map(highest), None);
    assert_eq!(missing.map(lowest), None);
}

#[test]
fn buy_sell_with_negative_values() {
    let data = pairs(&[
        (0, -10.0),
        (0, 9.0),
        (0, -8.0),
        (0, 7.0),
        (0, 6.0),
        (0, 5.0),
        (0, -4.0),
        (0, 3.0),
        (0, 2.0),
        (0, -1.0),
    ]);
    let expected = ProfitResult {
        buy: TimeValuePair::new(0, -10.0),
        sell: TimeValuePair::new(0, 9.0),
        max_profit: 19.0,
        percent: -190.0,
    };
    assert_eq!(time_to_buy_sell(&data), Some(expected));
}

#[test]
fn buy_sell_zero_buy_uses_sentinel_percent() {
    let data = pairs(&[
        (0, 1.0),
        (0, 9.0),
        (0, 9.0),
        (0, 6.0),
        (0, 4.0),
        (0, 0.0),
        (0, 1.0),
        (0, 3.0),
        (0, 2.0),
        (0, 10.0),
    ]);
    let expected = ProfitResult {
        buy: TimeValuePair::new(0, 0.0),
        sell: TimeValuePair::new(0, 10.0),
        max_profit: 10.0,
        percent: -1.0,
    };
    assert_eq!(time_to_buy_sell(&data), Some(expected));
}

#[test]
fn buy_sell_only_decreasing_has_zero_profit() {
    let data: Vec<_> = (1..=10)
        .rev()
        .map(|v| TimeValuePair::new(0, f64::from(v)))
        .collect();
    let r = time_to_buy_sell(&data).unwrap();
    assert_eq!(r.max_profit, 0.0);
    assert!(!r.is_profitable());
}

#[test]
fn buy_sell_keeps_pair_when_price_dips_lower_after_high() {
    let data = pairs(&[
        (1_640_217_684_063, 43_045.848_925_692_51),
        (1_640_304_364_124, 44_976.060_185_896_3),
        (1_640_390_494_360, 44_944.765_753_527_05),
        (1_640_477_234_653, 44_582.256_742_075_435),
        (1_640_563_562_342, 44_923.401_017_973_92),
        (1_640_649_798_545, 44_818.168_111_937_994),
        (1_640_736_029_760, 42_181.442_574_406_89),
        (1_640_822_458_344, 40_999.676_797_590_19),
        (1_640_909_093_614, 41_672.354_654_832_28),
    ]);
    let r = time_to_buy_sell(&data).unwrap();
    assert_eq!(r.buy, data[0]);
    assert_eq!(r.sell, data[1]);
    assert_eq!(r.max_profit, 1_930.211_260_203_788_7);
    assert_eq!(r.percent, 4.707_869_454_027_597);
}

#[test]
fn buy_sell_of_empty_and_missing_is_none() {
    assert_eq!(time_to_buy_sell(&[]), None);
    let missing: Option<&[TimeValuePair]> = None;
    assert_eq!(missing.and_then(time_to_buy_sell), None);
}
