// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for sortsearch primitives.
//!
//! This standalone crate holds copies of the binary search loop and the
//! in-place two-run merge, and proves them correct on every input up to a
//! small bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds probe, no `usize` underflow or overflow
//! 2. **Search soundness**: a hit points at an element equal to the target
//! 3. **Search completeness**: on sorted input, a miss means the target is absent
//! 4. **Merge**: `merge_runs` never panics and leaves a sorted, stable
//!    permutation of its two runs (the `k < j` cursor invariant holds)

use std::cmp::Ordering;

/// Largest array the harnesses explore.
pub const MAX_LEN: usize = 6;

// ============================================================================
// BINARY SEARCH (copied from src/search/mod.rs)
// ============================================================================

pub fn binary_search_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0usize;
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

pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_by(seq, |probe| probe.cmp(target))
}

// ============================================================================
// IN-PLACE MERGE (copied from src/sort/merge.rs)
// ============================================================================

pub fn merge_runs<T, F>(seq: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if mid == 0 || mid >= seq.len() {
        return;
    }
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

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_array() -> ([i8; MAX_LEN], usize) {
        let arr: [i8; MAX_LEN] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        (arr, len)
    }

    /// Verify binary search never panics, even on unsorted input.
    #[kani::proof]
    #[kani::unwind(8)] // log2(MAX_LEN) + slack
    fn verify_search_no_panic() {
        let (arr, len) = any_array();
        let target: i8 = kani::any();

        if let Some(i) = binary_search(&arr[..len], &target) {
            kani::assert(i < len, "Hit index must be in bounds");
        }
    }

    /// Verify a hit always points at an element equal to the target.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_search_hit_is_equal() {
        let (arr, len) = any_array();
        let target: i8 = kani::any();

        if let Some(i) = binary_search(&arr[..len], &target) {
            kani::assert(arr[i] == target, "Hit must point at the target");
        }
    }

    /// Verify completeness: on sorted input a miss means absent.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_search_miss_is_absent() {
        let (arr, len) = any_array();
        let seq = &arr[..len];
        for i in 1..len {
            kani::assume(seq[i - 1] <= seq[i]);
        }
        let target: i8 = kani::any();

        if binary_search(seq, &target).is_none() {
            for &x in seq {
                kani::assert(x != target, "Miss on sorted input must mean absent");
            }
        }
    }

    /// Verify the search finishes within floor(log2 n) + 1 probes.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_search_probe_bound() {
        let (arr, len) = any_array();
        let target: i8 = kani::any();
        let mut probes = 0u32;

        let _ = binary_search_by(&arr[..len], |probe| {
            probes += 1;
            probe.cmp(&target)
        });

        let bound = if len == 0 { 0 } else { usize::BITS - len.leading_zeros() };
        kani::assert(probes <= bound, "Probe count must be logarithmic");
    }

    /// Verify `merge_runs` on every split of every small array: no panic,
    /// output sorted by key, equal keys in input order, nothing lost.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_merge_runs_sorted_stable_permutation() {
        let keys: [u8; MAX_LEN] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mid: usize = kani::any_where(|&m| m <= len);

        for i in 1..len {
            if i != mid {
                kani::assume(keys[i - 1] <= keys[i]);
            }
        }

        // (key, origin): origin is the input index, so it witnesses stability.
        let mut seq = [(0u8, 0u8); MAX_LEN];
        for i in 0..len {
            seq[i] = (keys[i], i as u8);
        }

        let mut scratch = Vec::new();
        merge_runs(&mut seq[..len], mid, &mut scratch, &mut |a: &(u8, u8), b: &(u8, u8)| {
            a.0.cmp(&b.0)
        });

        let out = &seq[..len];
        for i in 1..len {
            kani::assert(out[i - 1].0 <= out[i].0, "Merge output must be sorted");
            if out[i - 1].0 == out[i].0 {
                kani::assert(out[i - 1].1 < out[i].1, "Equal keys must keep input order");
            }
        }

        // Every origin appears exactly once.
        let mut seen = [false; MAX_LEN];
        for &(key, origin) in out {
            let o = origin as usize;
            kani::assert(o < len, "Origin must come from the input");
            kani::assert(!seen[o], "No element may be duplicated");
            kani::assert(keys[o] == key, "Keys must travel with their origin");
            seen[o] = true;
        }
    }
}
