//! Word counter configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountConfig {
    /// Number of most frequent words to report
    pub top: usize,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self { top: 10 }
    }
}

impl Validate for WordCountConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.top == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "word_count.top".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
