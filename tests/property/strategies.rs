//! Every strategy against every other.
//!
//! The stable strategies must produce byte-for-byte the same output as
//! `slice::sort_by_key` (a stable sort has exactly one right answer). The
//! unstable ones must agree on the key sequence.

use super::common::{any_vec, is_non_decreasing, is_permutation, tagged_vec, Tagged};
use proptest::prelude::*;
use sortsearch::{
    bottom_up_merge_sort, bubble_sort, insertion_sort, quick_sort, selection_sort, SortConfig,
    Strategy as SortStrategy,
};

fn keys(v: &[Tagged<u8>]) -> Vec<u8> {
    v.iter().map(|t| t.value).collect()
}

proptest! {
    #[test]
    fn prop_strategies_match_std(v in tagged_vec(), threshold in 1usize..64) {
        let mut expected = v.clone();
        expected.sort_by_key(|t| t.value);

        for strategy in SortStrategy::ALL {
            let config = SortConfig { strategy, parallel_threshold: threshold };
            let mut out = v.clone();
            config.sort_by(&mut out, |a, b| a.value.cmp(&b.value));

            if strategy.is_stable() {
                prop_assert_eq!(&out, &expected, "strategy {}", strategy);
            } else {
                prop_assert_eq!(keys(&out), keys(&expected), "strategy {}", strategy);
            }
        }
    }

    #[test]
    fn prop_classic_sorts_order_and_permute(v in any_vec()) {
        let sorts: [(&str, fn(&mut [i64])); 5] = [
            ("bottom_up", bottom_up_merge_sort),
            ("insertion", insertion_sort),
            ("selection", selection_sort),
            ("bubble", bubble_sort),
            ("quick", quick_sort),
        ];
        for (name, sort) in sorts {
            let mut out = v.clone();
            sort(&mut out);
            prop_assert!(is_non_decreasing(&out), "{} not ordered", name);
            prop_assert!(is_permutation(&v, &out), "{} lost elements", name);
        }
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Large inputs so the parallel fan-out actually forks at the default threshold.
    #[test]
    fn prop_parallel_matches_sequential(v in prop::collection::vec(any::<u16>(), 5_000..12_000)) {
        let mut par = v.clone();
        sortsearch::par_merge_sort(&mut par);
        prop_assert_eq!(par, sortsearch::merge_sort(&v));
    }
}
