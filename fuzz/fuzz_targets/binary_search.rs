// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search on sorted and unsorted slices.
//!
//! Unsorted input has no defined answer, but it must still never panic and
//! never return an out-of-bounds index. Sorted input must agree with
//! `slice::binary_search` on whether the target is present.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sortsearch::{binary_search, search_or_sentinel, NOT_FOUND};

#[derive(Debug, Arbitrary)]
struct Input {
    seq: Vec<i8>,
    target: i8,
    sort_first: bool,
}

fuzz_target!(|input: Input| {
    let Input { mut seq, target, sort_first } = input;
    if sort_first {
        seq.sort();
    }

    let result = binary_search(&seq, &target);

    if let Some(i) = result {
        assert!(i < seq.len(), "index {} out of bounds (len {})", i, seq.len());
        assert_eq!(seq[i], target);
    }

    if sort_first {
        assert_eq!(result.is_some(), seq.binary_search(&target).is_ok());
    }

    match result {
        Some(i) => assert_eq!(search_or_sentinel(&seq, &target), i as isize),
        None => assert_eq!(search_or_sentinel(&seq, &target), NOT_FOUND),
    }
});
