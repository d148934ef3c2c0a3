//! The canonical worked examples, end to end through the public API.

use super::common::{one_to_ten, TEXTBOOK_INPUT, TEXTBOOK_SORTED};
use sortsearch::{binary_search, merge_sort, merge_sort_opt, search_or_sentinel, SortConfig, Strategy};

#[test]
fn search_five_in_one_to_ten() {
    assert_eq!(binary_search(&one_to_ten(), &5), Some(4));
    assert_eq!(search_or_sentinel(&one_to_ten(), &5), 4);
}

#[test]
fn search_eleven_in_one_to_ten() {
    assert_eq!(binary_search(&one_to_ten(), &11), None);
    assert_eq!(search_or_sentinel(&one_to_ten(), &11), -1);
}

#[test]
fn search_in_gapped_sequence() {
    assert_eq!(binary_search(&[1, 2, 4, 5, 6, 10], &2), Some(1));
}

#[test]
fn sort_textbook_input() {
    assert_eq!(merge_sort(&TEXTBOOK_INPUT), TEXTBOOK_SORTED.to_vec());
}

#[test]
fn sort_empty() {
    assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
}

#[test]
fn sort_single() {
    assert_eq!(merge_sort(&[5]), vec![5]);
}

#[test]
fn sort_absent() {
    assert_eq!(merge_sort_opt::<i32>(None), None);
}

#[test]
fn sort_then_search_every_strategy() {
    for strategy in Strategy::ALL {
        let mut v = TEXTBOOK_INPUT.to_vec();
        SortConfig::with_strategy(strategy).sort(&mut v);
        assert_eq!(v, TEXTBOOK_SORTED, "strategy {}", strategy);
        for (i, x) in TEXTBOOK_SORTED.iter().enumerate() {
            assert_eq!(binary_search(&v, x), Some(i), "strategy {}", strategy);
        }
    }
}
