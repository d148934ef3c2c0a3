// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bubble sort with early exit.
//!
//! Each pass swaps adjacent out-of-order pairs, which carries the largest
//! remaining element to the end of the unsorted region. A pass with no swaps
//! means everything is in order and the sort stops. Only strictly greater
//! pairs are swapped, so it's stable.

use std::cmp::Ordering;

/// Stable in-place bubble sort with a comparator.
pub fn bubble_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    for pass in 0..len {
        let mut swapped = false;
        for k in 0..len - pass - 1 {
            if compare(&seq[k], &seq[k + 1]) == Ordering::Greater {
                seq.swap(k, k + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Stable in-place bubble sort in non-decreasing order.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    bubble_sort_by(seq, T::cmp);
}
