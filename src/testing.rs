//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

/// An element tagged with where it started, for stability checks.
///
/// Sort by `value` only; `position` is the witness that tells you whether equal
/// values kept their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged<T> {
    pub value: T,
    pub position: usize,
}

/// Tag every element with its index in `values`.
pub fn tag_positions<T: Clone>(values: &[T]) -> Vec<Tagged<T>> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| Tagged {
            value: value.clone(),
            position,
        })
        .collect()
}

/// Whether every adjacent pair satisfies `seq[i] <= seq[i + 1]`.
pub fn is_non_decreasing<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Whether equal values appear in increasing original-position order.
///
/// Only meaningful when `sorted` is already ordered by `value`.
pub fn is_stable<T: PartialEq>(sorted: &[Tagged<T>]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].value != w[1].value || w[0].position < w[1].position)
}

/// Deterministic pseudo-random values for tests and benches (64-bit LCG).
///
/// Same seed, same sequence, on every platform.
pub fn lcg_values(seed: u64, len: usize, modulus: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) % modulus.max(1)
        })
        .collect()
}
