// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merge sort against arbitrary input.
//!
//! Output must be a sorted permutation of the input, match the standard
//! library's stable sort exactly, and agree between the recursive and
//! bottom-up variants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortsearch::{bottom_up_merge_sort, check_permutation, merge_sort, SortedSlice};

fuzz_target!(|data: Vec<i16>| {
    let sorted = merge_sort(&data);

    // INVARIANT 1: sorted
    assert!(SortedSlice::new(&sorted).is_ok(), "merge_sort output not sorted");

    // INVARIANT 2: permutation of the input
    assert!(check_permutation(&data, &sorted).is_ok(), "merge_sort lost or invented elements");

    // INVARIANT 3: same answer as std's stable sort
    let mut expected = data.clone();
    expected.sort();
    assert_eq!(sorted, expected);

    // INVARIANT 4: bottom-up gives the same answer
    let mut iterative = data;
    bottom_up_merge_sort(&mut iterative);
    assert_eq!(iterative, sorted);
});
