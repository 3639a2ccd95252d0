//! In-place quicksort over the live slots of a `SeqList`.
//!
//! Single-pivot Hoare partitioning: the pivot is the element in the middle
//! of the range, two indices scan inwards from both ends and swap pairs that
//! sit on the wrong side, until they cross. Both sides are then sorted the
//! same way. The sort is not stable: equal elements may change places.
//!
//! Expected O(n log n) comparisons, O(n²) in the worst case. Recursion only
//! descends into the smaller side, so stack depth stays O(log n).

use core::cmp::Ordering;

use crate::core::SeqList;
use crate::error::{Result, SeqListError};

impl<T> SeqList<T> {
    /// Sorts the list by the natural ordering of `T`.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the list with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        // empty slots below `len` cannot occur, but if they do they sort last
        let mut compare_slots = |a: &Option<T>, b: &Option<T>| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        quicksort(self.live_mut(), &mut compare_slots);
    }

    /// Sorts the list by the key extracted from each element.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Sorts the list by the partial ordering of `T`.
    ///
    /// # Errors
    ///
    /// Returns `SeqListError::IncomparableElements` if two elements have no
    /// defined order (such as a float `NaN`). The list then holds the same
    /// elements as before, in unspecified order.
    pub fn try_sort(&mut self) -> Result<()>
    where
        T: PartialOrd,
    {
        let mut incomparable = false;
        self.sort_by(|a, b| {
            a.partial_cmp(b).unwrap_or_else(|| {
                incomparable = true;
                Ordering::Equal
            })
        });
        if incomparable {
            return Err(SeqListError::IncomparableElements);
        }
        Ok(())
    }
}

fn quicksort<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let (lower_end, upper_start) = partition(v, compare);
        let (lower, rest) = core::mem::take(&mut v).split_at_mut(lower_end);
        let upper = &mut rest[upper_start - lower_end..];
        if lower.len() < upper.len() {
            quicksort(lower, compare);
            v = upper;
        } else {
            quicksort(upper, compare);
            v = lower;
        }
    }
}

/// Partitions `v` around its middle element.
///
/// Returns `(lower_end, upper_start)`: `v[..lower_end]` holds nothing greater
/// than the pivot, `v[upper_start..]` nothing less, and anything in between
/// equals the pivot and is already in place. Requires `v.len() > 1`.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = v.len() - 1;
    let mut pivot = last / 2;
    let mut left = 0;
    // one past the right scanning index, so that it can pass below zero
    let mut right_end = v.len();

    loop {
        while left < last && compare(&v[left], &v[pivot]) == Ordering::Less {
            left += 1;
        }
        while right_end > 1 && compare(&v[right_end - 1], &v[pivot]) == Ordering::Greater {
            right_end -= 1;
        }
        if left < right_end {
            let right = right_end - 1;
            v.swap(left, right);
            // keep comparing against the same value
            if pivot == left {
                pivot = right;
            } else if pivot == right {
                pivot = left;
            }
            left += 1;
            right_end -= 1;
        }
        if left >= right_end {
            break;
        }
    }

    (right_end, left)
}
