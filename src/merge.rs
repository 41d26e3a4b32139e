use tracing::trace;

use crate::error::{IntervalError, Result};
use crate::interval::Interval;

/// Coalesces `intervals` into their canonical cover.
///
/// The input must be non-empty and sorted ascending by lower bound (see
/// [`Interval::cmp_by_min`]); [`sort_and_merge`] does the sorting for callers
/// holding unsorted data. The output is sorted the same way, and any two
/// consecutive outputs are separated by at least one uncovered integer. Adjacent
/// intervals such as `[-1, 1]` and `[2, 5]` are merged, since no integer lies
/// between them.
///
/// ```
/// use interval_cover::{merge, Interval};
///
/// let merged = merge(&[Interval::new(-1, 1), Interval::new(2, 5), Interval::new(7, 8)]).unwrap();
/// assert_eq!(merged, vec![Interval::new(-1, 5), Interval::new(7, 8)]);
/// ```
///
/// # Errors
///
/// [`IntervalError::EmptyInput`] if `intervals` is empty. A failed bound update
/// on the interval being extended is returned as is.
pub fn merge(intervals: &[Interval]) -> Result<Vec<Interval>> {
    let (first, rest) = intervals.split_first().ok_or(IntervalError::EmptyInput)?;
    debug_assert!(
        intervals.windows(2).all(|pair| pair[0].min() <= pair[1].min()),
        "merge expects intervals sorted by min"
    );

    let mut merged = vec![*first];
    for interval in rest {
        // Seeded with `first`, so never empty.
        let last_index = merged.len() - 1;
        let last = &mut merged[last_index];

        if starts_new_run(last, interval) {
            merged.push(*interval);
        } else if interval.max() > last.max() {
            last.set_max(interval.max())?;
        }
    }

    trace!(input = intervals.len(), output = merged.len(), "merged intervals");
    Ok(merged)
}

/// Copies `intervals`, sorts the copy by lower bound and merges it.
///
/// The sort is stable, so intervals sharing a lower bound keep their relative
/// order.
pub fn sort_and_merge(intervals: &[Interval]) -> Result<Vec<Interval>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(Interval::min);
    merge(&sorted)
}

/// Whether `next` lies strictly past the integer that follows `last`.
///
/// `last.max() + 1` has no representation when `last` reaches `Integer::MAX`;
/// nothing can start after that point, so `next` always joins `last`.
fn starts_new_run(last: &Interval, next: &Interval) -> bool {
    match last.max().checked_add(1) {
        Some(successor) => next.min() > successor,
        None => false,
    }
}

/// Whether every pair of consecutive intervals leaves at least one integer uncovered.
#[cfg(test)]
pub(crate) fn is_canonical(intervals: &[Interval]) -> bool {
    intervals.windows(2).all(|pair| {
        matches!(pair[0].max().checked_add(1), Some(successor) if pair[1].min() > successor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Integer;

    fn intervals(bounds: &[(Integer, Integer)]) -> Vec<Interval> {
        bounds.iter().map(|&(a, b)| Interval::new(a, b)).collect()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(merge(&[]), Err(IntervalError::EmptyInput));
        assert_eq!(sort_and_merge(&[]), Err(IntervalError::EmptyInput));
    }

    #[test]
    fn single_interval_is_returned_unchanged() {
        let input = intervals(&[(3, 9)]);
        assert_eq!(merge(&input).unwrap(), input);
    }

    #[test]
    fn overlapping_run_collapses() {
        let input = intervals(&[(0, 4), (1, 2), (3, 10), (5, 6), (10, 12)]);
        assert_eq!(merge(&input).unwrap(), intervals(&[(0, 12)]));
    }

    #[test]
    fn adjacent_intervals_merge() {
        let input = intervals(&[(-1, 1), (2, 5)]);
        assert_eq!(merge(&input).unwrap(), intervals(&[(-1, 5)]));
    }

    #[test]
    fn one_integer_gap_keeps_intervals_apart() {
        let input = intervals(&[(0, 3), (5, 8)]);
        assert_eq!(merge(&input).unwrap(), input);
    }

    #[test]
    fn contained_interval_does_not_shrink_run() {
        let input = intervals(&[(0, 20), (5, 6)]);
        assert_eq!(merge(&input).unwrap(), intervals(&[(0, 20)]));
    }

    #[test]
    fn duplicate_points_collapse() {
        let input = intervals(&[(4, 4), (4, 4), (5, 5), (7, 7)]);
        assert_eq!(merge(&input).unwrap(), intervals(&[(4, 5), (7, 7)]));
    }

    #[test]
    fn merging_is_idempotent() {
        let input = intervals(&[(-10, -4), (-2, 0), (2, 2), (9, 30)]);
        let once = merge(&input).unwrap();
        assert_eq!(once, input);
        assert_eq!(merge(&once).unwrap(), once);
        assert!(is_canonical(&once));
    }

    #[test]
    fn interval_ending_at_max_absorbs_the_rest() {
        let input = intervals(&[
            (Integer::MIN, 0),
            (-1, Integer::MAX),
            (Integer::MAX, Integer::MAX),
        ]);
        assert_eq!(
            merge(&input).unwrap(),
            intervals(&[(Integer::MIN, Integer::MAX)])
        );
    }

    #[test]
    fn point_at_max_stays_separate_from_distant_run() {
        let input = intervals(&[(Integer::MIN, Integer::MIN), (Integer::MAX, Integer::MAX)]);
        assert_eq!(merge(&input).unwrap(), input);
    }

    #[test]
    fn sort_and_merge_handles_unsorted_input() {
        let input = intervals(&[(20, 25), (0, 3), (4, 6), (26, 26), (10, 11)]);
        assert_eq!(
            sort_and_merge(&input).unwrap(),
            intervals(&[(0, 6), (10, 11), (20, 26)])
        );
    }

    #[test]
    fn canonical_form_check() {
        assert!(is_canonical(&intervals(&[(0, 1), (3, 4)])));
        assert!(!is_canonical(&intervals(&[(0, 1), (2, 4)])));
        assert!(!is_canonical(&intervals(&[(0, Integer::MAX), (Integer::MAX, Integer::MAX)])));
    }
}
