//! Test utilities and fixtures for Kaula.
//!
//! This module provides reusable test components: proptest strategies for
//! keys and operation sequences, and a fixture for temporary files and
//! environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum number of operations in a generated sequence.
const MAX_OPERATIONS: usize = 200;

/// Generate a strategy for short table keys.
///
/// A small alphabet keeps collisions and repeated keys frequent.
pub fn key_strategy() -> BoxedStrategy<String> {
    "[a-e]{1,4}".boxed()
}

/// Generate a strategy for lower-case words suitable for word counting.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[a-z]{1,8}".boxed()
}

/// A single mutation applied to a table under test.
#[derive(Debug, Clone)]
pub enum Operation {
    /// `put(key, value)`
    Put(String, i64),
    /// `remove(key)`
    Remove(String),
    /// `resize_table(capacity)`
    Resize(usize),
    /// `clear()`
    Clear,
}

/// Generate a strategy for sequences of table operations.
pub fn operations_strategy() -> BoxedStrategy<Vec<Operation>> {
    let operation = prop_oneof![
        6 => (key_strategy(), any::<i64>()).prop_map(|(key, value)| Operation::Put(key, value)),
        3 => key_strategy().prop_map(Operation::Remove),
        1 => (1usize..64).prop_map(Operation::Resize),
        1 => Just(Operation::Clear),
    ];
    proptest::collection::vec(operation, 0..MAX_OPERATIONS).boxed()
}

/// Test fixture for tests that need files on disk or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Create a file with the given name and contents in the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
