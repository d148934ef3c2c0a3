// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted slices.
//!
//! The classic closed-window search: keep `[left, right]`, probe the
//! midpoint, throw away the half that can't contain the target. Done when the
//! window is empty. O(log n) comparisons, no allocation, no panics.
//!
//! The upper bound is stored one past the closed `right` so that narrowing to
//! `[left, mid - 1]` never underflows `usize` when `mid == 0`. The probe is
//! still `floor((left + right) / 2)` over the closed window, computed as
//! `left + (right - left) / 2` so it can't overflow either.
//!
//! # Duplicates
//!
//! If the target occurs more than once, *some* matching index comes back.
//! Which one depends on the midpoint arithmetic. Don't rely on first or last.
//!
//! # Sentinel
//!
//! `None` is the not-found result. Code ported from languages that return
//! `-1` can use [`search_or_sentinel`] and compare against [`NOT_FOUND`].

use std::cmp::Ordering;

use crate::verify::contracts::check_search_result;

/// Legacy not-found value returned by [`search_or_sentinel`].
pub const NOT_FOUND: isize = -1;

/// Find `target` in a slice sorted in non-decreasing order.
///
/// Returns the index of an element equal to `target`, or `None`.
/// The slice is not checked for sortedness; an unsorted slice gives an
/// unspecified (but memory-safe) answer.
///
/// # Example
///
/// ```
/// use sortsearch::binary_search;
///
/// let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(binary_search(&seq, &5), Some(4));
/// assert_eq!(binary_search(&seq, &11), None);
/// ```
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    let result = binary_search_by(seq, |probe| probe.cmp(target));
    check_search_result(seq, target, result);
    result
}

/// Binary search with a probe function.
///
/// `f` receives the element at the midpoint and returns how it compares to
/// the thing being looked for: `Less` moves the window right, `Greater` moves
/// it left, `Equal` ends the search.
pub fn binary_search_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0usize;
    // One past the closed bound: the window is empty once left == end.
    let mut end = seq.len();

    while left < end {
        let right = end - 1;
        let mid = left + (right - left) / 2;
        match f(&seq[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    None
}

/// Binary search on a key extracted from each element.
///
/// The slice must be sorted by that key.
pub fn binary_search_by_key<T, K, F>(seq: &[T], key: &K, mut f: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    binary_search_by(seq, |probe| f(probe).cmp(key))
}

/// Same as [`binary_search`], but reports a miss as [`NOT_FOUND`] (`-1`).
pub fn search_or_sentinel<T: Ord>(seq: &[T], target: &T) -> isize {
    binary_search(seq, target)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}
