// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bottom-up (iterative) merge sort.
//!
//! No recursion at all. Treat the slice as runs of width 1, merge neighbouring
//! pairs into runs of width 2, then 4, and so on until a single run covers
//! everything:
//!
//! ```text
//! width 1: [38][27][43][3][9][82][10]
//! width 2: [27 38][3 43][9 82][10]
//! width 4: [3 27 38 43][9 10 82]
//! width 8: [3 9 10 27 38 43 82]
//! ```
//!
//! Split points differ from the top-down sort (powers of two instead of
//! halves), but both use the same left-wins tie-break, and a stable sort has
//! exactly one correct output. So the results are identical.

use std::cmp::Ordering;

use super::merge::merge_runs;
use crate::verify::contracts::check_sorted;

/// Stable iterative sort with a comparator.
pub fn bottom_up_merge_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    let mut scratch = Vec::with_capacity(len / 2 + 1);
    let mut width = 1usize;

    while width < len {
        let mut lo = 0;
        while lo < len - width {
            let hi = lo.saturating_add(width.saturating_mul(2)).min(len);
            merge_runs(&mut seq[lo..hi], width, &mut scratch, &mut compare);
            lo = hi;
        }
        width = width.saturating_mul(2);
    }
}

/// Stable iterative sort in non-decreasing order.
pub fn bottom_up_merge_sort<T: Ord + Clone>(seq: &mut [T]) {
    bottom_up_merge_sort_by(seq, T::cmp);
    check_sorted(seq);
}
