use kurssi::{Granularity, Kurssi};
use kurssi_mock::SeriesBuilder;
use proptest::prelude::*;

proptest! {
    #[test]
    fn report_days_stay_parallel_and_ordered(
        start in 1_500_000_000_000i64..1_700_000_000_000,
        hourly in any::<bool>(),
        count in 0usize..800,
        seed in any::<u64>(),
    ) {
        let g = if hourly { Granularity::Hourly } else { Granularity::FiveMinute };
        let bundle = SeriesBuilder::new(start)
            .granularity(g)
            .count(count)
            .jitter_ms(g.nominal_step_ms() / 10)
            .seed(seed)
            .build();
        let report = Kurssi::builder().build().unwrap().analyze(&bundle).unwrap();

        prop_assert!(report.days.validate().is_ok());
        prop_assert!(report.days.len() <= bundle.len());
        if count >= 2 {
            prop_assert_eq!(report.granularity, g);
        }
        if let Some(first) = bundle.prices.first() {
            prop_assert_eq!(report.days.prices[0], *first);
        }
        if let Some(pair) = report.buy_sell {
            prop_assert!(pair.buy.timestamp <= pair.sell.timestamp);
            prop_assert!(pair.max_profit >= 0.0);
        }
    }
}
