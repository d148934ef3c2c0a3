// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for sorting and searching.
//!
//! Debug-mode assertions that check the post-conditions every sort and search
//! promises. They:
//!
//! 1. Are **zero-cost in release builds** (everything sits behind
//!    `cfg!(debug_assertions)` / `debug_assert!`)
//! 2. Fail **at the call that broke the invariant**, not three functions later
//! 3. Only run on the `Ord` entry points, so user comparators are never
//!    called more times than the algorithm itself calls them
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Property                                      |
//! |------------------------|-----------------------------------------------|
//! | `check_sorted`         | output is non-decreasing                      |
//! | `check_same_length`    | sorting never drops or invents elements       |
//! | `check_search_result`  | a hit points at an equal element; a miss on a |
//! |                        | sorted slice means the target is absent       |
//!
//! `check_search_result` scans the whole slice on a miss, so `binary_search`
//! is O(n) in debug builds. Benchmark release builds only.
//!
//! # Usage
//!
//! ```ignore
//! merge_sort_in_place(&mut v);
//! // In debug builds, this panics if v is out of order
//! check_sorted(&v);
//! ```

// ============================================================================
// SORT CONTRACTS
// ============================================================================

/// Check that a slice is in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair with `seq[i - 1] > seq[i]`.
#[inline]
pub fn check_sorted<T: Ord>(seq: &[T]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for i in 1..seq.len() {
        debug_assert!(
            seq[i - 1] <= seq[i],
            "Contract violation: Sorted - seq[{}] > seq[{}]",
            i - 1,
            i
        );
    }
}

/// Check that a sort produced exactly as many elements as it was given.
#[inline]
pub fn check_same_length(input_len: usize, output_len: usize) {
    debug_assert_eq!(
        input_len, output_len,
        "Contract violation: Permutation - input had {} elements, output has {}",
        input_len, output_len
    );
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check a binary search result against the slice it came from.
///
/// A hit must point at an element equal to the target. A miss is only
/// checked when the slice really is sorted; on unsorted input the result is
/// unspecified and there is nothing to assert.
///
/// # Panics (debug builds only)
/// Panics if `Some(i)` is out of bounds or `seq[i] != target`, or if a
/// sorted slice contains the target but the search reported `None`.
#[inline]
pub fn check_search_result<T: Ord>(seq: &[T], target: &T, result: Option<usize>) {
    if !cfg!(debug_assertions) {
        return;
    }

    match result {
        Some(i) => {
            debug_assert!(
                i < seq.len(),
                "Contract violation: SearchHit - index {} >= len {}",
                i,
                seq.len()
            );
            if i < seq.len() {
                debug_assert!(
                    seq[i] == *target,
                    "Contract violation: SearchHit - seq[{}] is not equal to the target",
                    i
                );
            }
        }
        None => {
            let sorted = seq.windows(2).all(|w| w[0] <= w[1]);
            if sorted {
                debug_assert!(
                    !seq.contains(target),
                    "Contract violation: SearchMiss - target present in sorted slice of len {}",
                    seq.len()
                );
            }
        }
    }
}
