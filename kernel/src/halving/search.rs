//! Binary elimination search.

use std::cmp::Ordering;

use super::observe::{NoProbe, Probe, ProbeObserver};

/// Find the position of `target` in a non-decreasing `sequence`.
///
/// Returns `Some(index)` with `sequence[index] == *target`, or `None` when no
/// element equals `target`. Runs in O(log n) comparisons with O(1) space.
///
/// The sequence must already be sorted non-decreasing. This is not checked:
/// on unsorted input the result is unspecified (an existing target may be
/// missed) but the call still terminates and never indexes out of bounds.
///
/// With duplicates, the returned index is whichever equal element the halving
/// path reaches first (see the module docs for the midpoint convention).
///
/// ```
/// use bisect_kernel::halving::search;
///
/// let sorted = [1, 3, 5, 7, 9, 11];
/// assert_eq!(search(&sorted, &7), Some(3));
/// assert_eq!(search(&sorted, &4), None);
/// ```
#[must_use]
pub fn search<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    search_by(sequence, |probe| probe.cmp(target))
}

/// Search with a comparator.
///
/// `compare` receives a probed element and returns its ordering relative to
/// the target (`Less` if the element sorts before it). The sequence must be
/// non-decreasing under that same ordering.
#[must_use]
pub fn search_by<T, F>(sequence: &[T], compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    search_observed(sequence, compare, &mut NoProbe)
}

/// Search by a key extracted from each element.
///
/// The sequence must be non-decreasing by `extract`.
#[must_use]
pub fn search_by_key<T, K, F>(sequence: &[T], key: &K, mut extract: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    search_by(sequence, |probe| extract(probe).cmp(key))
}

/// The halving loop. Reports each probe to `observer` before acting on it.
///
/// The inclusive range `[low, high]` is tracked as `low..end` with
/// `end = high + 1`, which keeps the empty case (`high = -1`) representable
/// in `usize`. Probes still report the inclusive `high`.
pub fn search_observed<T, F, O>(sequence: &[T], mut compare: F, observer: &mut O) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
    O: ProbeObserver + ?Sized,
{
    let mut low = 0;
    let mut end = sequence.len();

    while low < end {
        let high = end - 1;
        let mid = low + (high - low) / 2;
        let ordering = compare(&sequence[mid]);
        observer.on_probe(Probe {
            low,
            high,
            mid,
            ordering: ordering.into(),
        });
        match ordering {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    None
}

/// Worst-case probe count for a sequence of `len` elements.
///
/// `floor(log2 len) + 1` for `len >= 1`, and 0 for an empty sequence.
#[must_use]
pub const fn probe_budget(len: usize) -> u32 {
    usize::BITS - len.leading_zeros()
}
