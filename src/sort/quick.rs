// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quicksort with Lomuto partitioning.
//!
//! The last element is the pivot. Everything `<=` the pivot is swapped to the
//! front, then the pivot is swapped into the slot right after them; it is now
//! in its final position and the two sides are sorted independently.
//!
//! To keep the stack at O(log n) even on sorted input (Lomuto's worst case),
//! only the smaller side recurses; the larger side is handled by the loop.
//! Time is still O(n²) in that case. Unstable.

use std::cmp::Ordering;

/// Partition `seq` around its last element and return the pivot's final index.
fn partition<T, F>(seq: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = seq.len() - 1;
    let mut store = 0;
    for j in 0..pivot {
        if compare(&seq[j], &seq[pivot]) != Ordering::Greater {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, pivot);
    store
}

fn quick_sort_inner<T, F>(mut seq: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while seq.len() > 1 {
        let p = partition(seq, compare);
        let (left, rest) = std::mem::take(&mut seq).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort_inner(left, compare);
            seq = right;
        } else {
            quick_sort_inner(right, compare);
            seq = left;
        }
    }
}

/// Unstable in-place quicksort with a comparator.
pub fn quick_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_inner(seq, &mut compare);
}

/// Unstable in-place quicksort in non-decreasing order.
pub fn quick_sort<T: Ord>(seq: &mut [T]) {
    quick_sort_by(seq, T::cmp);
}
