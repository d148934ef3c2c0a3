//! Binary search and stable merge sort, with runtime contracts.
//!
//! Two independent, stateless algorithms over slices, plus the classic
//! comparison sorts for reference and a small configuration layer to pick one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────────────────────────┐
//! │  search      │     │  sort                                    │
//! │ binary_search│     │  merge ──▶ bottom_up    parallel (rayon) │
//! │ (Option /    │     │    │          │            │             │
//! │  sentinel)   │     │    └── merge_runs ◀────────┘             │
//! └──────┬───────┘     │  insertion  selection  bubble  quick     │
//!        │             └───────────────────┬──────────────────────┘
//!        ▼                                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         verify                              │
//! │  SortedSlice, check_permutation (Result<_, InvariantError>) │
//! │  contracts: debug-only post-condition checks                │
//! └─────────────────────────────────────────────────────────────┘
//!                    config: SortConfig / Strategy
//! ```
//!
//! # Properties
//!
//! | Operation        | Guarantee                                              |
//! |------------------|--------------------------------------------------------|
//! | `binary_search`  | hit ⇒ `seq[i] == target`; miss on sorted ⇒ absent       |
//! | `merge_sort`     | permutation, non-decreasing, stable, idempotent        |
//! | all merge sorts  | identical output (a stable sort's result is unique)    |
//!
//! # Usage
//!
//! ```
//! use sortsearch::{binary_search, merge_sort};
//!
//! let sorted = merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
//! assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
//! assert_eq!(binary_search(&sorted, &27), Some(3));
//! assert_eq!(binary_search(&sorted, &28), None);
//! ```

// Module declarations
pub mod config;
mod search;
pub mod sort;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use config::{ConfigError, SortConfig, Strategy, DEFAULT_PARALLEL_THRESHOLD};
pub use search::{
    binary_search, binary_search_by, binary_search_by_key, search_or_sentinel, NOT_FOUND,
};
#[cfg(feature = "parallel")]
pub use sort::{par_merge_sort, par_merge_sort_by};
pub use sort::{
    bottom_up_merge_sort, bottom_up_merge_sort_by, bubble_sort, bubble_sort_by, insertion_sort,
    insertion_sort_by, merge, merge_sort, merge_sort_by, merge_sort_by_key, merge_sort_in_place,
    merge_sort_opt, quick_sort, quick_sort_by, selection_sort, selection_sort_by,
};
pub use verify::{check_permutation, InvariantError, SortedSlice};
