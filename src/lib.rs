//! Kaula Library
//!
//! This library contains the core components of Kaula: a separate-chaining
//! hash map with caller-injected hashing, and a word-frequency counter
//! built on top of it. The library is used by the `kaula` binary, but can
//! also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! Kaula is designed with the following principles in mind:
//! - Strict component boundaries: the word counter only uses the public table API
//! - Dependency injection for hashing and testability
//! - Comprehensive error handling and propagation
//! - No hidden global state in the data structures

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod word_count;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kaula.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
