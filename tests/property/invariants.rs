//! Property tests for the verification layer.

use super::common::{any_vec, sorted_vec};
use proptest::prelude::*;
use sortsearch::{check_permutation, merge_sort, InvariantError, SortedSlice};

proptest! {
    /// Property: `SortedSlice::new` accepts exactly the non-decreasing slices.
    #[test]
    fn prop_sorted_slice_accepts_iff_sorted(v in any_vec()) {
        let sorted = v.windows(2).all(|w| w[0] <= w[1]);
        prop_assert_eq!(SortedSlice::new(&v).is_ok(), sorted);
    }

    /// Property: the rejection names the first descent.
    #[test]
    fn prop_rejection_position(v in any_vec()) {
        if let Err(InvariantError::Unsorted { position }) = SortedSlice::new(&v) {
            prop_assert!(v[position - 1] > v[position]);
            prop_assert!(v[..position].windows(2).all(|w| w[0] <= w[1]));
        }
    }

    /// Property: wrapped search matches the free function.
    #[test]
    fn prop_sorted_slice_search(v in sorted_vec(), target in -10i64..10) {
        let view = SortedSlice::new(&v).unwrap();
        prop_assert_eq!(view.search(&target), sortsearch::binary_search(&v, &target));
    }

    /// Property: merge sort output passes the permutation audit.
    #[test]
    fn prop_merge_sort_passes_audit(v in any_vec()) {
        prop_assert!(check_permutation(&v, &merge_sort(&v)).is_ok());
    }

    /// Property: dropping an element fails the audit.
    #[test]
    fn prop_dropped_element_fails_audit(v in any_vec()) {
        prop_assume!(!v.is_empty());
        let mut shorter = merge_sort(&v);
        shorter.pop();
        prop_assert_eq!(
            check_permutation(&v, &shorter),
            Err(InvariantError::LengthMismatch { expected: v.len(), actual: v.len() - 1 })
        );
    }
}
