// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! Binary search has a precondition nobody checks: the slice must be sorted.
//! Get it wrong and you get a plausible-looking wrong answer. `SortedSlice`
//! checks once, at construction, and from then on `search` can't be handed
//! unsorted data.
//!
//! | Type / fn            | What's Guaranteed                          |
//! |----------------------|--------------------------------------------|
//! | `SortedSlice`        | Non-decreasing order                       |
//! | `check_permutation`  | Output holds exactly the input's multiset  |
//!
//! # Example
//!
//! ```
//! use sortsearch::verify::SortedSlice;
//!
//! let data = [1, 3, 5, 7];
//! let sorted = SortedSlice::new(&data).unwrap();
//! assert_eq!(sorted.search(&5), Some(2));
//!
//! assert!(SortedSlice::new(&[3, 1]).is_err());
//! ```

use crate::search::binary_search;
use std::fmt;
use std::ops::Deref;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `seq[position - 1] > seq[position]`.
    Unsorted { position: usize },
    /// Output has a different number of elements than the input.
    LengthMismatch { expected: usize, actual: usize },
    /// Same length, but the multisets first differ at `position` once both
    /// sides are sorted.
    ElementMismatch { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(f, "sequence not sorted at position {}", position)
            }
            InvariantError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} elements, found {}", expected, actual)
            }
            InvariantError::ElementMismatch { position } => {
                write!(
                    f,
                    "not a permutation: sorted elements differ at position {}",
                    position
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Find the first position where `seq` stops being non-decreasing.
fn first_unsorted<T: Ord>(seq: &[T]) -> Option<usize> {
    (1..seq.len()).find(|&i| seq[i - 1] > seq[i])
}

/// A borrowed slice known to be in non-decreasing order.
///
/// # Invariants (enforced at construction)
/// - `inner[i - 1] <= inner[i]` for every `i` in `1..len`
#[derive(Debug, Clone, Copy)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Validate and wrap a slice.
    ///
    /// Returns `Err(InvariantError::Unsorted)` naming the first offending
    /// position.
    pub fn new(inner: &'a [T]) -> Result<Self, InvariantError> {
        match first_unsorted(inner) {
            Some(position) => Err(InvariantError::Unsorted { position }),
            None => Ok(Self { inner }),
        }
    }

    /// Binary search with the sortedness precondition already established.
    pub fn search(&self, target: &T) -> Option<usize> {
        binary_search(self.inner, target)
    }

    /// Whether `target` occurs anywhere in the slice.
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_some()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }
}

impl<T> Deref for SortedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.inner
    }
}

/// Check that `after` holds exactly the elements of `before`, in any order.
///
/// Costs two clones and two sorts; meant for tests and audits, not hot paths.
pub fn check_permutation<T: Ord + Clone>(before: &[T], after: &[T]) -> Result<(), InvariantError> {
    if before.len() != after.len() {
        return Err(InvariantError::LengthMismatch {
            expected: before.len(),
            actual: after.len(),
        });
    }

    let mut expected = before.to_vec();
    let mut actual = after.to_vec();
    expected.sort();
    actual.sort();

    match expected.iter().zip(&actual).position(|(a, b)| a != b) {
        Some(position) => Err(InvariantError::ElementMismatch { position }),
        None => Ok(()),
    }
}

/// Check that `seq` is non-decreasing, reporting where it isn't.
pub fn check_sorted<T: Ord>(seq: &[T]) -> Result<(), InvariantError> {
    match first_unsorted(seq) {
        Some(position) => Err(InvariantError::Unsorted { position }),
        None => Ok(()),
    }
}
