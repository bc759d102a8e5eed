use kurssi_types::{AlignConfig, Granularity, TimeValuePair};

/// Classify a series by the spacing of its first two samples.
///
/// Uses the default thresholds from [`AlignConfig`]:
///
/// - delta below 720 s: [`Granularity::FiveMinute`]
/// - delta below 36 000 s: [`Granularity::Hourly`]
/// - otherwise, or fewer than two samples: [`Granularity::Daily`]
///
/// Only the first delta is inspected. All three series of a bundle share
/// timestamps, so passing `prices` is enough. A missing series classifies the
/// same as a short one: `series.map_or(Granularity::Daily, classify)`.
///
/// ```
/// use kurssi_core::{classify, Granularity, TimeValuePair};
///
/// let p = |ms: i64| TimeValuePair::new(ms, 1.0);
/// assert_eq!(classify(&[p(0), p(300_000)]), Granularity::FiveMinute);
/// assert_eq!(classify(&[p(0), p(3_600_000)]), Granularity::Hourly);
/// assert_eq!(classify(&[p(0), p(86_400_000)]), Granularity::Daily);
/// assert_eq!(classify(&[p(0)]), Granularity::Daily);
/// ```
#[must_use]
pub fn classify(series: &[TimeValuePair]) -> Granularity {
    classify_with(series, &AlignConfig::default())
}

/// Classify a series using explicit thresholds.
///
/// The delta is truncated to whole seconds before comparison.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "kurssi::infer::classify",
        level = "debug",
        skip(series, cfg),
        fields(len = series.len()),
    )
)]
pub fn classify_with(series: &[TimeValuePair], cfg: &AlignConfig) -> Granularity {
    let [first, second, ..] = series else {
        return Granularity::Daily;
    };
    let delta_secs = (second.timestamp - first.timestamp).div_euclid(1000);

    let granularity = if delta_secs < cfg.five_minute_below_secs {
        Granularity::FiveMinute
    } else if delta_secs < cfg.hourly_below_secs {
        Granularity::Hourly
    } else {
        Granularity::Daily
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(delta_secs, %granularity, "classified series");

    granularity
}
