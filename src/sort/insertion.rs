// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Insertion sort.
//!
//! Grow a sorted prefix one element at a time: find where `seq[i]` belongs in
//! `seq[..i]` by walking left past strictly greater elements, then rotate it
//! into place. O(n²) worst case, O(n) on already sorted input, stable because
//! equal elements are never walked past.

use std::cmp::Ordering;

/// Stable in-place insertion sort with a comparator.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && compare(&seq[j - 1], &seq[i]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            seq[j..=i].rotate_right(1);
        }
    }
}

/// Stable in-place insertion sort in non-decreasing order.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    insertion_sort_by(seq, T::cmp);
}
