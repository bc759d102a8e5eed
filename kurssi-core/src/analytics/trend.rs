use kurssi_types::{TimeValuePair, TrendResult};

#[derive(Clone, Copy)]
struct RunState {
    run_start: TimeValuePair,
    run_len: usize,
    best: TrendResult,
}

/// Find the longest run of strictly decreasing consecutive values.
///
/// `start` is the sample just before the first decrease and `end` the last
/// sample of the run; `length` counts decreasing steps. Ties keep the first
/// run found. Empty, single-sample and non-decreasing input yield
/// [`TrendResult::default`] (length 0, no endpoints); a missing series maps
/// to the same value with `series.map_or_else(TrendResult::default, longest_downward_trend)`.
///
/// ```
/// use kurssi_core::{longest_downward_trend, TimeValuePair};
///
/// let s: Vec<_> = [5.0, 4.0, 3.0, 6.0, 2.0]
///     .iter()
///     .enumerate()
///     .map(|(i, v)| TimeValuePair::new(i as i64, *v))
///     .collect();
/// let t = longest_downward_trend(&s);
/// assert_eq!(t.length, 2);
/// assert_eq!(t.start, Some(s[0]));
/// assert_eq!(t.end, Some(s[2]));
/// ```
#[must_use]
pub fn longest_downward_trend(series: &[TimeValuePair]) -> TrendResult {
    let Some((&first, _)) = series.split_first() else {
        return TrendResult::default();
    };
    let init = RunState {
        run_start: first,
        run_len: 0,
        best: TrendResult::default(),
    };
    series
        .windows(2)
        .fold(init, |state, w| {
            let (prev, cur) = (w[0], w[1]);
            if cur.value < prev.value {
                let run_len = state.run_len + 1;
                let best = if run_len > state.best.length {
                    TrendResult {
                        start: Some(state.run_start),
                        end: Some(cur),
                        length: run_len,
                    }
                } else {
                    state.best
                };
                RunState {
                    run_len,
                    best,
                    ..state
                }
            } else {
                RunState {
                    run_start: cur,
                    run_len: 0,
                    best: state.best,
                }
            }
        })
        .best
}
