// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedSlice`) that make invalid states
//!    unrepresentable. Once you hold one, binary search's precondition holds.
//!
//! 2. **Runtime contracts** that panic in debug builds when a sort or search
//!    breaks its post-condition. Zero-cost in release, but catch bugs while
//!    the tests run.
//!
//! The checked functions (`check_sorted`, `check_permutation`) return
//! `Result<_, InvariantError>` for callers who want to audit data themselves.

mod types;
pub mod contracts;

pub use types::*;
