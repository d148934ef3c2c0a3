// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection sort.
//!
//! For each position, scan the unsorted suffix for its minimum and swap it in.
//! Exactly n(n-1)/2 comparisons regardless of input, at most n - 1 swaps.
//! Unstable: the swap can carry an element past an equal one.

use std::cmp::Ordering;

/// Unstable in-place selection sort with a comparator.
pub fn selection_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    for i in 0..len {
        let mut min_index = i;
        for j in (i + 1)..len {
            if compare(&seq[j], &seq[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        // Strictly smaller only; equal minimum stays put.
        if min_index != i {
            seq.swap(i, min_index);
        }
    }
}

/// Unstable in-place selection sort in non-decreasing order.
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    selection_sort_by(seq, T::cmp);
}
