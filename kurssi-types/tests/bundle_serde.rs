use kurssi_types::{KurssiError, TimeSeriesBundle, TimeValuePair};

const PAYLOAD: &str = r#"{"prices":[[1579392282472,8030.890983244613],[1579395867152,8025.5]],"market_caps":[[1579392282472,145933384413.17],[1579395867152,145833384413.5]],"total_volumes":[[1579392282472,22411573197.25],[1579395867152,22311573197.75]]}"#;

#[test]
fn provider_payload_roundtrips_byte_for_byte() {
    let bundle = TimeSeriesBundle::from_json(PAYLOAD).expect("decode payload");
    assert_eq!(bundle.len(), 2);
    assert_eq!(
        bundle.prices[0],
        TimeValuePair::new(1_579_392_282_472, 8030.890_983_244_613)
    );
    let encoded = bundle.to_json().expect("encode payload");
    assert_eq!(encoded, PAYLOAD);
}

#[test]
fn missing_keys_decode_as_empty_series() {
    let bundle = TimeSeriesBundle::from_json("{}").expect("decode empty object");
    assert!(bundle.is_empty());
    assert_eq!(bundle, TimeSeriesBundle::empty());

    let partial = TimeSeriesBundle::from_json(r#"{"prices":[[0,1]]}"#).expect("decode partial");
    assert_eq!(partial.prices, vec![TimeValuePair::new(0, 1.0)]);
    assert!(partial.market_caps.is_empty());
    assert!(partial.total_volumes.is_empty());
}

#[test]
fn malformed_payload_is_data_error() {
    let err = TimeSeriesBundle::from_json(r#"{"prices":[[0]]}"#).unwrap_err();
    assert!(matches!(err, KurssiError::Data(_)));
    let err = TimeSeriesBundle::from_json("not json").unwrap_err();
    assert!(matches!(err, KurssiError::Data(_)));
}

#[test]
fn validate_rejects_length_mismatch() {
    let mut bundle = TimeSeriesBundle::from_json(PAYLOAD).unwrap();
    assert!(bundle.validate().is_ok());
    bundle.total_volumes.pop();
    let err = bundle.validate().unwrap_err();
    assert!(matches!(err, KurssiError::Data(ref m) if m.contains("length mismatch")));
}

#[test]
fn validate_rejects_non_increasing_timestamps() {
    let p = |t: i64| TimeValuePair::new(t, 1.0);
    let bundle = TimeSeriesBundle {
        prices: vec![p(10), p(10)],
        market_caps: vec![p(10), p(10)],
        total_volumes: vec![p(10), p(10)],
    };
    let err = bundle.validate().unwrap_err();
    assert!(matches!(err, KurssiError::Data(ref m) if m.contains("strictly increasing")));
}

#[test]
fn select_keeps_indices_aligned_and_skips_out_of_bounds() {
    let p = |t: i64, v: f64| TimeValuePair::new(t, v);
    let bundle = TimeSeriesBundle {
        prices: vec![p(0, 1.0), p(1, 2.0), p(2, 3.0)],
        market_caps: vec![p(0, 10.0), p(1, 20.0), p(2, 30.0)],
        total_volumes: vec![p(0, 100.0), p(1, 200.0)],
    };
    let out = bundle.select(&[0, 2]);
    assert_eq!(out.prices, vec![p(0, 1.0), p(2, 3.0)]);
    assert_eq!(out.market_caps, vec![p(0, 10.0), p(2, 30.0)]);
    assert_eq!(out.total_volumes, vec![p(0, 100.0)]);
}

mod float_fidelity {
    use kurssi_types::{TimeSeriesBundle, TimeValuePair};
    use proptest::prelude::*;

    fn payload_with(v: &str) -> String {
        format!(
            r#"{{"prices":[[1579392282472,{v}]],"market_caps":[[1579392282472,{v}]],"total_volumes":[[1579392282472,{v}]]}}"#
        )
    }

    #[test]
    fn shortest_decimal_survives_decode_and_encode() {
        let payload = payload_with("394301.33835633675");
        let bundle = TimeSeriesBundle::from_json(&payload).unwrap();
        assert_eq!(bundle.prices[0].value.to_bits(), 394_301.338_356_336_75_f64.to_bits());
        assert_eq!(bundle.to_json().unwrap(), payload);
    }

    proptest! {
        #[test]
        fn provider_values_decode_bit_exact(v in 0.0f64..1e11) {
            let bundle = TimeSeriesBundle::from_json(&payload_with(&format!("{v}"))).unwrap();
            prop_assert_eq!(bundle.prices[0].value.to_bits(), v.to_bits());
            prop_assert_eq!(bundle.total_volumes[0].value.to_bits(), v.to_bits());

            let again = TimeSeriesBundle::from_json(&bundle.to_json().unwrap()).unwrap();
            prop_assert_eq!(again.market_caps[0].value.to_bits(), v.to_bits());
        }

        #[test]
        fn any_finite_value_roundtrips_bit_exact(
            v in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO,
            ts in any::<i64>(),
        ) {
            let series = vec![TimeValuePair::new(ts, v)];
            let bundle = TimeSeriesBundle {
                prices: series.clone(),
                market_caps: series.clone(),
                total_volumes: series,
            };
            let encoded = bundle.to_json().unwrap();
            let decoded = TimeSeriesBundle::from_json(&encoded).unwrap();
            prop_assert_eq!(decoded.prices[0].timestamp, ts);
            prop_assert_eq!(decoded.prices[0].value.to_bits(), v.to_bits());
            prop_assert_eq!(decoded.to_json().unwrap(), encoded);
        }
    }
}
