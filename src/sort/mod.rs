// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparison sorts.
//!
//! Merge sort is the main event: top-down recursive (`merge`), iterative
//! (`bottom_up`) for when recursion depth matters, and rayon fan-out
//! (`parallel`) for when there are cores to spare. All three are stable and
//! produce identical output.
//!
//! The classic quadratic and quicksort variants live alongside for
//! completeness and comparison. They sort in place without needing `Clone`.
//!
//! | Module       | Stable | Time (worst) | Extra space |
//! |--------------|--------|--------------|-------------|
//! | `merge`      | yes    | O(n log n)   | O(n)        |
//! | `bottom_up`  | yes    | O(n log n)   | O(n)        |
//! | `parallel`   | yes    | O(n log n)   | O(n)        |
//! | `insertion`  | yes    | O(n²)        | O(1)        |
//! | `bubble`     | yes    | O(n²)        | O(1)        |
//! | `selection`  | no     | O(n²)        | O(1)        |
//! | `quick`      | no     | O(n²)        | O(log n)    |

pub mod bottom_up;
pub mod bubble;
pub mod insertion;
pub mod merge;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod quick;
pub mod selection;

pub use bottom_up::{bottom_up_merge_sort, bottom_up_merge_sort_by};
pub use bubble::{bubble_sort, bubble_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{
    merge, merge_sort, merge_sort_by, merge_sort_by_key, merge_sort_in_place, merge_sort_opt,
};
#[cfg(feature = "parallel")]
pub use parallel::{par_merge_sort, par_merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};
pub use selection::{selection_sort, selection_sort_by};
