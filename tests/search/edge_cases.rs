//! Boundary inputs: extremes of the element type, long runs of duplicates,
//! and types other than integers.

use sortsearch::{
    binary_search, binary_search_by, bottom_up_merge_sort, merge_sort, merge_sort_by,
    merge_sort_in_place, SortedSlice,
};

#[test]
fn search_at_integer_extremes() {
    let seq = [i64::MIN, -1, 0, 1, i64::MAX];
    assert_eq!(binary_search(&seq, &i64::MIN), Some(0));
    assert_eq!(binary_search(&seq, &i64::MAX), Some(4));
    assert_eq!(binary_search(&seq, &2), None);
}

#[test]
fn search_below_first_element_does_not_underflow() {
    let seq = [10u32, 20, 30];
    assert_eq!(binary_search(&seq, &0), None);
}

#[test]
fn search_all_duplicates() {
    let seq = vec![7u8; 1000];
    let i = binary_search(&seq, &7).expect("present");
    assert_eq!(seq[i], 7);
    assert_eq!(binary_search(&seq, &6), None);
    assert_eq!(binary_search(&seq, &8), None);
}

#[test]
fn search_strings() {
    let words = ["apple", "banana", "cherry", "date"];
    assert_eq!(binary_search(&words, &"cherry"), Some(2));
    assert_eq!(binary_search(&words, &"coconut"), None);
}

#[test]
fn search_floats_via_total_cmp() {
    let seq = [-1.5f64, 0.0, 0.5, 2.0];
    assert_eq!(binary_search_by(&seq, |x| x.total_cmp(&0.5)), Some(2));
}

#[test]
fn sort_floats_with_negative_zero_and_nan() {
    let mut v = vec![f64::NAN, 1.0, -0.0, 0.0, -1.0];
    merge_sort_by(&mut v, f64::total_cmp);
    assert_eq!(v[0], -1.0);
    assert!(v[1] == 0.0 && v[1].is_sign_negative());
    assert!(v[2] == 0.0 && v[2].is_sign_positive());
    assert_eq!(v[3], 1.0);
    assert!(v[4].is_nan());
}

#[test]
fn sort_owned_strings() {
    let input: Vec<String> = ["pear", "Apple", "fig", "apple"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let sorted = merge_sort(&input);
    assert_eq!(sorted, vec!["Apple", "apple", "fig", "pear"]);
}

#[test]
fn sort_large_reverse_both_ways() {
    let mut top_down: Vec<i32> = (0..10_000).rev().collect();
    let mut bottom_up = top_down.clone();
    merge_sort_in_place(&mut top_down);
    bottom_up_merge_sort(&mut bottom_up);
    assert_eq!(top_down, (0..10_000).collect::<Vec<_>>());
    assert_eq!(top_down, bottom_up);
}

#[test]
fn sort_output_feeds_sorted_slice() {
    let sorted = merge_sort(&[3, 3, 1, 2]);
    let view = SortedSlice::new(&sorted).expect("merge sort output is sorted");
    assert_eq!(view.as_slice(), &[1, 2, 3, 3]);
}
