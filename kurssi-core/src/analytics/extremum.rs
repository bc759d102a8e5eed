use kurssi_types::{Extremum, TimeValuePair};

/// Highest sample; the first occurrence wins among equal maxima.
///
/// Empty input yields [`Extremum::Empty`]. A missing series stays missing:
/// `series.map(highest)` is `None`.
///
/// ```
/// use kurssi_core::{highest, Extremum, TimeValuePair};
///
/// let s = [(0, 5.0), (1, 4.0), (2, 1.0), (3, 1.0), (4, 6.0), (5, 6.0)]
///     .map(|(t, v)| TimeValuePair::new(t, v));
/// assert_eq!(highest(&s), Extremum::At(TimeValuePair::new(4, 6.0)));
/// assert_eq!(highest(&[]), Extremum::Empty);
/// ```
#[must_use]
pub fn highest(series: &[TimeValuePair]) -> Extremum {
    first_by(series, |candidate, best| candidate > best)
}

/// Lowest sample; the first occurrence wins among equal minima.
///
/// Empty input yields [`Extremum::Empty`].
#[must_use]
pub fn lowest(series: &[TimeValuePair]) -> Extremum {
    first_by(series, |candidate, best| candidate < best)
}

fn first_by<F>(series: &[TimeValuePair], replaces: F) -> Extremum
where
    F: Fn(f64, f64) -> bool,
{
    let Some((&first, rest)) = series.split_first() else {
        return Extremum::Empty;
    };
    let best = rest.iter().fold(first, |best, &p| {
        if replaces(p.value, best.value) { p } else { best }
    });
    Extremum::At(best)
}
