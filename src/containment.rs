use tracing::debug;

use crate::error::Result;
use crate::interval::Interval;
use crate::merge::{merge, sort_and_merge};

/// Returns `true` if every integer in `test` is covered by at least one interval
/// in `others`.
///
/// `others` may be unsorted and may hold duplicates or overlaps. An empty
/// `others` covers nothing, so the answer is then always `false`.
///
/// The check merges `others` into its canonical cover, inserts `test` into a
/// copy of that cover and merges again. If `test` reaches any uncovered integer,
/// the second merge either widens a run or keeps `test` as a run of its own, and
/// the two covers differ.
///
/// ```
/// use interval_cover::{is_contained, Interval};
///
/// let others = [Interval::new(0, 2), Interval::new(4, 7)];
/// assert!(is_contained(Interval::point(2), &others));
/// assert!(!is_contained(Interval::new(2, 4), &others));
/// ```
pub fn is_contained(test: Interval, others: &[Interval]) -> bool {
    if others.is_empty() {
        return false;
    }

    let cover = expect_merged(sort_and_merge(others));

    let mut with_test = Vec::with_capacity(cover.len() + 1);
    with_test.extend_from_slice(&cover);
    let position = with_test.partition_point(|interval| interval.min() < test.min());
    with_test.insert(position, test);

    let contained = expect_merged(merge(&with_test)) == cover;
    debug!(%test, runs = cover.len(), contained, "checked interval containment");
    contained
}

// Both merges above run on non-empty, sorted input, which `merge` always accepts.
fn expect_merged(merged: Result<Vec<Interval>>) -> Vec<Interval> {
    match merged {
        Ok(merged) => merged,
        Err(err) => unreachable!("merge rejected sorted, non-empty input: {err}"),
    }
}
