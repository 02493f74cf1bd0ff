//! Hash table configuration module.
//!
//! This module defines how the word counter builds its table: the initial
//! bucket count and the hashing strategy injected into it.

use super::{ConfigResult, Validate};
use crate::data_structures::kaula_hash_map::HashStrategy;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of buckets for a word-count table.
pub const DEFAULT_CAPACITY: usize = 2_500;

/// Hash table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of buckets allocated at construction
    pub capacity: usize,

    /// Hash function injected into the table
    pub hash_function: HashStrategy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash_function: HashStrategy::PositionWeighted,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
