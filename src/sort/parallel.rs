// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel merge sort via rayon fan-out.
//!
//! The two recursive calls of merge sort touch disjoint halves of the slice,
//! so `split_at_mut` plus `rayon::join` runs them on separate workers with no
//! locking. The merge itself stays on one thread: each output slot depends on
//! the comparison before it.
//!
//! Below `threshold` elements, forking costs more than it saves, so the
//! sequential sort takes over. Same split point, same tie-break as
//! `sort::merge`, so the output is identical to the sequential sort, stability
//! included.

use std::cmp::Ordering;

use super::merge::{merge_runs, merge_sort_by};
use crate::config::DEFAULT_PARALLEL_THRESHOLD;
use crate::verify::contracts::check_sorted;

fn par_sort_recursive<T, F>(seq: &mut [T], threshold: usize, compare: &F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let len = seq.len();
    if len <= threshold {
        merge_sort_by(seq, compare);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = seq.split_at_mut(mid);
        rayon::join(
            || par_sort_recursive(left, threshold, compare),
            || par_sort_recursive(right, threshold, compare),
        );
    }

    let mut scratch = Vec::with_capacity(mid);
    merge_runs(seq, mid, &mut scratch, &mut |a: &T, b: &T| compare(a, b));
}

/// Stable sort that forks above `threshold` elements.
///
/// A `threshold` of 0 or 1 is treated as 1 (fork all the way down).
pub fn par_merge_sort_by<T, F>(seq: &mut [T], threshold: usize, compare: &F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    par_sort_recursive(seq, threshold.max(1), compare);
}

/// Stable parallel sort in non-decreasing order with the default threshold.
pub fn par_merge_sort<T: Ord + Clone + Send>(seq: &mut [T]) {
    par_merge_sort_by(seq, DEFAULT_PARALLEL_THRESHOLD, &T::cmp);
    check_sorted(seq);
}
