// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-down merge sort.
//!
//! ```text
//! [38 27 43 3 9 82 10]
//!  split at n/2 = 3
//! [38 27 43]      [3 9 82 10]
//! [38] [27 43]    [3 9] [82 10]
//!       ...             ...
//! [27 38 43]      [3 9 10 82]
//!  merge: two read cursors, one write cursor
//! [3 9 10 27 38 43 82]
//! ```
//!
//! Left half gets `n / 2` elements, right half the rest, so odd lengths put
//! the extra element on the right. The two halves share nothing, which is what
//! lets `sort::parallel` hand them to different threads.
//!
//! # Stability
//!
//! The merge takes from the left run when `left <= right`. Equal elements from
//! the left half therefore land before equal elements from the right half,
//! which keeps the sort stable. Changing that comparison to `<` breaks it.
//!
//! # Memory
//!
//! Sorting happens in the caller's slice. One scratch `Vec` holds a copy of the
//! left run during each merge and is reused across every level, so extra space
//! is O(n), not O(n log n).

use std::cmp::Ordering;

use crate::verify::contracts::{check_same_length, check_sorted};

/// Merge two adjacent sorted runs `seq[..mid]` and `seq[mid..]` in place.
///
/// The left run is copied into `scratch`; the right run is read where it
/// sits. The write cursor `k` always trails the right cursor `j` while the left
/// run still has elements (`k = i + (j - mid) < j`), so writes never clobber
/// an unread right element. Once the left run is drained, the rest of the
/// right run is already in its final place.
pub(crate) fn merge_runs<T, F>(seq: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if mid == 0 || mid >= seq.len() {
        return;
    }
    // Already in order: nothing to do.
    if compare(&seq[mid - 1], &seq[mid]) != Ordering::Greater {
        return;
    }

    scratch.clear();
    scratch.extend_from_slice(&seq[..mid]);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < scratch.len() && j < seq.len() {
        if compare(&scratch[i], &seq[j]) != Ordering::Greater {
            seq[k].clone_from(&scratch[i]);
            i += 1;
        } else {
            seq.swap(k, j);
            j += 1;
        }
        k += 1;
    }

    while i < scratch.len() {
        seq[k].clone_from(&scratch[i]);
        i += 1;
        k += 1;
    }
}

fn sort_recursive<T, F>(seq: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = seq.split_at_mut(mid);
        sort_recursive(left, scratch, compare);
        sort_recursive(right, scratch, compare);
    }
    merge_runs(seq, mid, scratch, compare);
}

/// Stable sort of `seq` with a comparator.
///
/// The comparator must describe a total order; with one that doesn't (say,
/// `partial_cmp` on NaN-laden floats) the output order is unspecified, but every
/// element is still there.
pub fn merge_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return;
    }
    let mut scratch = Vec::with_capacity(seq.len() / 2);
    sort_recursive(seq, &mut scratch, &mut compare);
}

/// Stable sort of `seq` by a key.
pub fn merge_sort_by_key<T, K, F>(seq: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(seq, |a, b| key(a).cmp(&key(b)));
}

/// Stable in-place sort in non-decreasing order.
pub fn merge_sort_in_place<T: Ord + Clone>(seq: &mut [T]) {
    merge_sort_by(seq, T::cmp);
    check_sorted(seq);
}

/// Return a sorted copy of `seq`, leaving the input untouched.
///
/// # Example
///
/// ```
/// use sortsearch::merge_sort;
///
/// let sorted = merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
/// assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut out = seq.to_vec();
    merge_sort_in_place(&mut out);
    check_same_length(seq.len(), out.len());
    out
}

/// Sort an optional sequence. An absent sequence comes back absent.
pub fn merge_sort_opt<T: Ord + Clone>(seq: Option<Vec<T>>) -> Option<Vec<T>> {
    seq.map(|mut v| {
        merge_sort_in_place(&mut v);
        v
    })
}

/// Merge two sorted runs into a fresh `Vec`.
///
/// Ties go to `left`, the same rule the sort uses.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);

    out
}
