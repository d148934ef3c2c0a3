// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort configuration: which algorithm, and when to go parallel.
//!
//! `SortConfig` is plain data. Build it in code, deserialize it with serde
//! (missing fields fall back to defaults), or pick it up from the environment:
//!
//! | Variable                        | Meaning                         |
//! |---------------------------------|---------------------------------|
//! | `SORTSEARCH_STRATEGY`           | strategy name, e.g. `bottom_up` |
//! | `SORTSEARCH_PARALLEL_THRESHOLD` | fork above this many elements   |
//!
//! Unset variables mean "use the default". Set-but-garbage is an error, not a
//! silent fallback.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::sort;

/// Slices at or below this length are sorted sequentially by the parallel
/// strategy. Forking tiny slices costs more than it saves.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Environment variable naming the strategy.
pub const ENV_STRATEGY: &str = "SORTSEARCH_STRATEGY";

/// Environment variable holding the parallel threshold.
pub const ENV_PARALLEL_THRESHOLD: &str = "SORTSEARCH_PARALLEL_THRESHOLD";

/// Error type for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Threshold was zero or not an unsigned integer.
    InvalidThreshold { value: String },
    /// Strategy name didn't match any known strategy.
    UnknownStrategy { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { value } => {
                write!(f, "invalid parallel threshold '{}' (expected integer >= 1)", value)
            }
            ConfigError::UnknownStrategy { name } => {
                write!(f, "unknown sort strategy '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which sorting algorithm `SortConfig::sort` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Top-down recursive merge sort.
    #[default]
    Recursive,
    /// Iterative merge sort, no recursion.
    BottomUp,
    /// Merge sort with rayon fan-out above the threshold. Sequential when the
    /// `parallel` feature is off.
    Parallel,
    Insertion,
    Selection,
    Bubble,
    Quick,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Recursive,
        Strategy::BottomUp,
        Strategy::Parallel,
        Strategy::Insertion,
        Strategy::Selection,
        Strategy::Bubble,
        Strategy::Quick,
    ];

    /// Whether equal elements keep their original relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Strategy::Selection | Strategy::Quick)
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::BottomUp => "bottom_up",
            Strategy::Parallel => "parallel",
            Strategy::Insertion => "insertion",
            Strategy::Selection => "selection",
            Strategy::Bubble => "bubble",
            Strategy::Quick => "quick",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownStrategy { name: s.to_string() })
    }
}

/// Sorting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub strategy: Strategy,
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_threshold(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidThreshold {
            value: value.to_string(),
        }),
    }
}

impl SortConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// mutating the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_STRATEGY) {
            config.strategy = name.parse()?;
        }
        if let Some(value) = lookup(ENV_PARALLEL_THRESHOLD) {
            config.parallel_threshold = parse_threshold(&value)?;
        }

        Ok(config)
    }

    /// Sort `seq` in non-decreasing order with the configured strategy.
    pub fn sort<T: Ord + Clone + Send>(&self, seq: &mut [T]) {
        self.sort_by(seq, T::cmp);
    }

    /// Sort `seq` with a comparator using the configured strategy.
    ///
    /// The comparator must be `Fn + Sync` so the parallel strategy can share
    /// it across workers.
    pub fn sort_by<T, F>(&self, seq: &mut [T], compare: F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        match self.strategy {
            Strategy::Recursive => sort::merge_sort_by(seq, compare),
            Strategy::BottomUp => sort::bottom_up_merge_sort_by(seq, compare),
            #[cfg(feature = "parallel")]
            Strategy::Parallel => sort::par_merge_sort_by(seq, self.parallel_threshold, &compare),
            #[cfg(not(feature = "parallel"))]
            Strategy::Parallel => sort::merge_sort_by(seq, compare),
            Strategy::Insertion => sort::insertion_sort_by(seq, compare),
            Strategy::Selection => sort::selection_sort_by(seq, compare),
            Strategy::Bubble => sort::bubble_sort_by(seq, compare),
            Strategy::Quick => sort::quick_sort_by(seq, compare),
        }
    }
}
