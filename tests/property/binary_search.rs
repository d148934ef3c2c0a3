//! Property tests for binary search.
//!
//! Verifies that:
//! 1. Searching for any present element returns an index holding an equal element
//! 2. Searching for an absent element returns `None` / `NOT_FOUND`
//! 3. An empty slice never matches
//! 4. Presence agrees with `slice::binary_search`

use super::common::{sorted_vec, sorted_vec_with_index};
use proptest::prelude::*;
use sortsearch::{binary_search, binary_search_by, search_or_sentinel, NOT_FOUND};

proptest! {
    /// Property: every element of a sorted slice is found.
    ///
    /// With duplicates the returned index may differ from `i`, but it must
    /// hold an equal value.
    #[test]
    fn prop_present_element_found((seq, i) in sorted_vec_with_index()) {
        let j = binary_search(&seq, &seq[i]);
        prop_assert!(j.is_some(), "seq[{}] = {} not found", i, seq[i]);
        prop_assert_eq!(seq[j.unwrap()], seq[i]);
    }

    /// Property: values not in the slice are never found.
    #[test]
    fn prop_absent_element_not_found(seq in sorted_vec(), target in any::<i64>()) {
        prop_assume!(!seq.contains(&target));
        prop_assert_eq!(binary_search(&seq, &target), None);
        prop_assert_eq!(search_or_sentinel(&seq, &target), NOT_FOUND);
    }

    /// Property: empty input is always a miss.
    #[test]
    fn prop_empty_never_matches(target in any::<i64>()) {
        let empty: Vec<i64> = Vec::new();
        prop_assert_eq!(binary_search(&empty, &target), None);
        prop_assert_eq!(search_or_sentinel(&empty, &target), -1);
    }

    /// Property: presence agrees with the standard library.
    #[test]
    fn prop_agrees_with_std(seq in sorted_vec(), target in -10i64..10) {
        prop_assert_eq!(
            binary_search(&seq, &target).is_some(),
            seq.binary_search(&target).is_ok()
        );
    }

    /// Property: the sentinel form is the `Option` form with `None` mapped to -1.
    #[test]
    fn prop_sentinel_matches_option(seq in sorted_vec(), target in -10i64..10) {
        let expected = binary_search(&seq, &target).map_or(NOT_FOUND, |i| i as isize);
        prop_assert_eq!(search_or_sentinel(&seq, &target), expected);
    }

    /// Property: O(log n) probes.
    #[test]
    fn prop_logarithmic_probe_count(seq in sorted_vec(), target in any::<i64>()) {
        let mut probes = 0u32;
        let _ = binary_search_by(&seq, |x| {
            probes += 1;
            x.cmp(&target)
        });
        let bound = usize::BITS - seq.len().leading_zeros();
        prop_assert!(probes <= bound, "{} probes for len {}", probes, seq.len());
    }

    /// Property: distinct sorted values are found at exactly their own index.
    #[test]
    fn prop_distinct_values_exact_index(seq in sorted_vec()) {
        let mut distinct = seq.clone();
        distinct.dedup();
        for (i, x) in distinct.iter().enumerate() {
            prop_assert_eq!(binary_search(&distinct, x), Some(i));
        }
    }
}
