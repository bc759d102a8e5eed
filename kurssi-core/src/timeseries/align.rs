use kurssi_types::{
    AlignConfig, DAY_MS, Granularity, TimeSeriesBundle, TimeValuePair, floor_to_midnight,
    ms_since_midnight,
};

/// Reduce a sub-daily bundle to one representative sample per UTC day.
///
/// Uses the default [`AlignConfig`]. See [`align_to_days_with`] for the
/// selection rules.
///
/// ```
/// use kurssi_core::{align_to_days, classify, TimeSeriesBundle, TimeValuePair};
///
/// const HOUR: i64 = 3_600_000;
/// // 2020-01-19 00:04 UTC, hourly for two days and one sample
/// let start = 1_579_392_240_000;
/// let prices: Vec<_> = (0..49).map(|h| TimeValuePair::new(start + h * HOUR, h as f64)).collect();
/// let bundle = TimeSeriesBundle {
///     prices: prices.clone(),
///     market_caps: prices.clone(),
///     total_volumes: prices,
/// };
/// let days = align_to_days(&bundle, classify(&bundle.prices));
/// let picked: Vec<f64> = days.prices.iter().map(|p| p.value).collect();
/// assert_eq!(picked, vec![0.0, 24.0, 48.0]);
/// ```
#[must_use]
pub fn align_to_days(bundle: &TimeSeriesBundle, granularity: Granularity) -> TimeSeriesBundle {
    align_to_days_with(bundle, granularity, &AlignConfig::default())
}

/// Reduce a sub-daily bundle to one representative sample per UTC day.
///
/// - `Daily` input is returned unchanged.
/// - An empty `prices` series yields three empty series.
/// - The first sample always represents its own day.
/// - For every following UTC midnight the sample closest to it is kept. Ties
///   go to the earlier sample.
/// - The last sample represents the final, possibly partial, day. Five-minute
///   data keeps it only if it lies within `cfg.tail_tolerance_ms` after a
///   midnight that has no representative yet; a 23:57 pick followed by a
///   00:02 tail keeps only the 23:57 sample.
///
/// The same indices are selected from `prices`, `market_caps` and
/// `total_volumes`, so the output series stay positionally aligned.
///
/// Distances are absolute, so a daily series misclassified as sub-daily
/// because of a jittered first delta still yields one sample per midnight.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "kurssi::align::align_to_days",
        level = "debug",
        skip(bundle, cfg),
        fields(len = bundle.prices.len(), granularity = %granularity),
    )
)]
pub fn align_to_days_with(
    bundle: &TimeSeriesBundle,
    granularity: Granularity,
    cfg: &AlignConfig,
) -> TimeSeriesBundle {
    if !granularity.is_subdaily() {
        return bundle.clone();
    }
    let prices = bundle.prices.as_slice();
    let Some(first) = prices.first() else {
        return TimeSeriesBundle::empty();
    };

    let skip = match cfg.skip_ahead_divisor {
        0 => 0,
        d => granularity.points_per_day() / d,
    };

    let mut picks: Vec<usize> = vec![0];
    let mut boundary = floor_to_midnight(first.timestamp) + DAY_MS;
    let mut best = distance(first, boundary);
    let mut i = 1;
    while i < prices.len() {
        let d = distance(&prices[i], boundary);
        if d < best {
            best = d;
            i += 1;
            continue;
        }
        // Moving away from the boundary: the previous sample was the closest.
        push_pick(&mut picks, i - 1);
        #[cfg(feature = "tracing")]
        tracing::debug!(index = i - 1, boundary, "picked day sample");

        boundary += DAY_MS;
        i = skip_ahead(prices, i, boundary, skip);
        best = distance(&prices[i], boundary);
        i += 1;
    }

    let last = prices.len() - 1;
    let tail = prices[last].timestamp;
    let prev = picks.last().map(|&idx| prices[idx].timestamp);
    if keeps_tail(tail, prev, granularity, cfg) {
        push_pick(&mut picks, last);
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(ts = tail, "dropping partial trailing day");
    }

    bundle.select(&picks)
}

const fn distance(p: &TimeValuePair, boundary: i64) -> u64 {
    p.timestamp.abs_diff(boundary)
}

const fn nearest_midnight(ts: i64) -> i64 {
    floor_to_midnight(ts + DAY_MS / 2)
}

fn push_pick(picks: &mut Vec<usize>, idx: usize) {
    if picks.last() != Some(&idx) {
        picks.push(idx);
    }
}

/// Advance at most `max` samples from `from`, never moving onto a sample at
/// or past `boundary`.
///
/// The boundary-nearest sample is either the last one before `boundary` or
/// the first one at/after it; stopping short of both keeps the scan exact.
fn skip_ahead(prices: &[TimeValuePair], from: usize, boundary: i64, max: usize) -> usize {
    let limit = from.saturating_add(max);
    let mut j = from;
    while j < limit && j + 1 < prices.len() && prices[j + 1].timestamp < boundary {
        j += 1;
    }
    j
}

/// Whether the trailing sample at `ts` is kept; `prev` is the last pick.
fn keeps_tail(ts: i64, prev: Option<i64>, granularity: Granularity, cfg: &AlignConfig) -> bool {
    match granularity {
        Granularity::FiveMinute => {
            ms_since_midnight(ts) <= cfg.tail_tolerance_ms
                && prev.is_none_or(|p| p == ts || nearest_midnight(p) != nearest_midnight(ts))
        }
        Granularity::Hourly | Granularity::Daily => true,
    }
}
