//! The classic in-place sorts on the inputs they were first written against.

use super::common::{
    is_non_decreasing, is_permutation, is_stable, tag_positions, TEXTBOOK_INPUT, TEXTBOOK_SORTED,
};
use sortsearch::testing::Tagged;
use sortsearch::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, quick_sort, selection_sort,
};

#[test]
fn quick_sort_five() {
    let mut v = [2, 4, 3, 5, 1];
    quick_sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn insertion_sort_with_repeats() {
    let mut v = [5, 3, 1, 8, 9, 10, 10];
    insertion_sort(&mut v);
    assert_eq!(v, [1, 3, 5, 8, 9, 10, 10]);
}

#[test]
fn selection_sort_textbook() {
    let mut v = TEXTBOOK_INPUT;
    selection_sort(&mut v);
    assert_eq!(v, TEXTBOOK_SORTED);
}

#[test]
fn bubble_sort_with_repeats() {
    let mut v = [4, 3, 2, 5, 1, 9, 1, 412, 3, 29, 5];
    bubble_sort(&mut v);
    assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 9, 29, 412]);
}

#[test]
fn all_handle_empty_and_single() {
    let sorts: [fn(&mut [u8]); 4] = [quick_sort, insertion_sort, selection_sort, bubble_sort];
    for sort in sorts {
        let mut empty: [u8; 0] = [];
        sort(&mut empty);
        let mut one = [9u8];
        sort(&mut one);
        assert_eq!(one, [9]);
    }
}

#[test]
fn stable_classics_keep_tie_order() {
    let keys = [3u8, 1, 3, 0, 1, 3, 0, 2];
    let by_value = |a: &Tagged<u8>, b: &Tagged<u8>| a.value.cmp(&b.value);

    let mut inserted = tag_positions(&keys);
    insertion_sort_by(&mut inserted, by_value);
    assert!(is_stable(&inserted));

    let mut bubbled = tag_positions(&keys);
    bubble_sort_by(&mut bubbled, by_value);
    assert!(is_stable(&bubbled));
}

#[test]
fn unstable_classics_still_sort_a_permutation() {
    let input = [7, -2, 7, 0, 5, -2, 9, 0];
    let sorts: [fn(&mut [i32]); 2] = [quick_sort, selection_sort];
    for sort in sorts {
        let mut v = input;
        sort(&mut v);
        assert!(is_non_decreasing(&v));
        assert!(is_permutation(&input, &v));
    }
}
