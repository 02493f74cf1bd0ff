// Copyright (c) 2025 Kaula Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing strategies for the Kaula hash map.
//!
//! The table never chooses how keys are hashed. Callers inject any
//! [`KeyHasher`], which includes plain functions and closures of type
//! `Fn(&str) -> u64`. The functions in this module are the stock strategies.

use std::fmt;
use std::hash::Hasher;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maps a string key to a non-negative integer.
///
/// Implementations must be deterministic: the same key always produces the
/// same value, otherwise keys become unreachable after insertion.
#[cfg_attr(test, mockall::automock)]
pub trait KeyHasher {
    /// Computes the hash of `key`.
    fn hash_key(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Sums the character codes of `key`.
///
/// Anagrams collide under this strategy.
pub fn additive_hash(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |hash, c| hash.wrapping_add(u64::from(c)))
}

/// Sums each character code weighted by its one-based position.
pub fn position_weighted_hash(key: &str) -> u64 {
    key.chars().zip(1u64..).fold(0u64, |hash, (c, position)| {
        hash.wrapping_add(position.wrapping_mul(u64::from(c)))
    })
}

/// FNV-1a over the UTF-8 bytes of `key`.
pub fn fnv_hash(key: &str) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

/// Named hashing strategy, selectable from configuration or the command line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashStrategy {
    /// [`additive_hash`]
    Additive,
    /// [`position_weighted_hash`]
    #[default]
    PositionWeighted,
    /// [`fnv_hash`]
    Fnv,
}

impl HashStrategy {
    /// Every available strategy.
    pub const ALL: [HashStrategy; 3] = [Self::Additive, Self::PositionWeighted, Self::Fnv];

    /// Returns the configuration name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::PositionWeighted => "position_weighted",
            Self::Fnv => "fnv",
        }
    }
}

impl KeyHasher for HashStrategy {
    fn hash_key(&self, key: &str) -> u64 {
        match self {
            Self::Additive => additive_hash(key),
            Self::PositionWeighted => position_weighted_hash(key),
            Self::Fnv => fnv_hash(key),
        }
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| {
                format!("unknown hash strategy '{s}', expected one of: additive, position_weighted, fnv")
            })
    }
}
