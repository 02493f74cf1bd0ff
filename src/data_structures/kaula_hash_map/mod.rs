// Copyright (c) 2025 Kaula Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kaula Hash Map, a separate-chaining hash table.
//!
//! Keys are strings, values are generic. Each bucket holds a singly-linked
//! [`Chain`] of entries, and the bucket for a key is chosen by a hash
//! function the caller injects at construction.
//!
//! # Features
//!
//! - Pluggable hashing: any `Fn(&str) -> u64` or [`HashStrategy`].
//! - In-place value updates on repeated `put`.
//! - Caller-driven resizing with all-or-nothing semantics.
//! - Diagnostics: load factor and empty bucket count.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use kaula_lib::data_structures::kaula_hash_map::{additive_hash, KaulaHashMap};
//!
//! let mut table = KaulaHashMap::new(5, additive_hash).unwrap();
//!
//! table.put("a", 1);
//! table.put("b", 2);
//! table.put("a", 5);
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("a"), Some(&5));
//!
//! table.remove("b");
//! assert!(!table.contains_key("b"));
//!
//! // Resizing is always requested by the caller
//! table.resize_table(10).unwrap();
//! assert_eq!(table.get("a"), Some(&5));
//! assert_eq!(table.len(), 1);
//! ```
//!
//! # Thread Safety
//!
//! The table has no internal synchronization. Wrap it in a single lock if
//! several threads need access.

// Module declarations
mod chain;
mod error;
mod hash;
mod table;

// Re-exports
pub use chain::{Chain, Entry};
pub use error::{KaulaHashMapError, Result};
pub use hash::{additive_hash, fnv_hash, position_weighted_hash, HashStrategy, KeyHasher};
pub use table::KaulaHashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut table = KaulaHashMap::new(16, HashStrategy::PositionWeighted).unwrap();

        table.put("hello", 1);
        table.put("world", 2);

        assert_eq!(table.get("hello"), Some(&1));
        assert_eq!(table.get("world"), Some(&2));
        assert_eq!(table.get("test"), None);
        assert_eq!(table.empty_buckets() + 2, table.capacity());
    }

    #[test]
    fn test_closure_hasher() {
        let mut table = KaulaHashMap::new(4, |key: &str| key.len() as u64).unwrap();

        table.put("one", "uno".to_string());
        table.put("two", "dos".to_string());

        // Equal lengths land in the same bucket
        assert_eq!(table.empty_buckets(), 3);
        assert_eq!(table.get("two").map(String::as_str), Some("dos"));
    }
}
