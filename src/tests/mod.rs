//! Test modules for Kaula.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the hash map using proptest
//! - File-backed tests for the word counter
//! - Test fixtures and utilities

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, operations_strategy, word_strategy, Operation, TestFixture};
