//! Data structures for Kaula.
//!
//! This module contains the hash table implementation used by the word
//! counter and available to any other client of the library.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit `Result` errors for invalid arguments, `Option` for absence
//! - Caller-controlled growth

pub mod kaula_hash_map;

// Re-export common data structures
pub use kaula_hash_map::{HashStrategy, KaulaHashMap, KaulaHashMapError, KeyHasher};
