use kurssi_types::{ProfitResult, TimeValuePair};

#[derive(Clone, Copy)]
struct Running {
    low: TimeValuePair,
    buy: TimeValuePair,
    sell: TimeValuePair,
    max_profit: f64,
}

/// Best single buy-then-sell pair in one pass.
///
/// Tracks the lowest value seen so far as the entry candidate. A strictly
/// lower sample becomes the new candidate; any other sample is priced against
/// it and replaces the best pair only on a strictly larger profit. The
/// reported `buy` therefore always precedes (or equals) `sell`.
///
/// `percent` is `max_profit / buy.value * 100`, or
/// [`ProfitResult::PERCENT_UNDEFINED`] (`-1`) when `buy.value` is zero.
///
/// Empty input yields `None`; so does a missing series via
/// `series.and_then(time_to_buy_sell)`. A single sample yields a zero-profit
/// pair with `buy == sell`.
///
/// ```
/// use kurssi_core::{time_to_buy_sell, TimeValuePair};
///
/// let s = [1.0, 9.0, 9.0, 6.0, 4.0, 0.0, 1.0, 3.0, 2.0, 10.0].map(|v| TimeValuePair::new(0, v));
/// let r = time_to_buy_sell(&s).unwrap();
/// assert_eq!(r.buy.value, 0.0);
/// assert_eq!(r.sell.value, 10.0);
/// assert_eq!(r.max_profit, 10.0);
/// assert_eq!(r.percent, -1.0);
/// ```
#[must_use]
pub fn time_to_buy_sell(series: &[TimeValuePair]) -> Option<ProfitResult> {
    let (&first, rest) = series.split_first()?;
    let init = Running {
        low: first,
        buy: first,
        sell: first,
        max_profit: 0.0,
    };
    let best = rest.iter().fold(init, |state, &p| {
        if p.value < state.low.value {
            return Running { low: p, ..state };
        }
        let profit = p.value - state.low.value;
        if profit > state.max_profit {
            Running {
                buy: state.low,
                sell: p,
                max_profit: profit,
                ..state
            }
        } else {
            state
        }
    });

    let percent = if best.buy.value == 0.0 {
        ProfitResult::PERCENT_UNDEFINED
    } else {
        best.max_profit / best.buy.value * 100.0
    };
    Some(ProfitResult {
        buy: best.buy,
        sell: best.sell,
        max_profit: best.max_profit,
        percent,
    })
}
