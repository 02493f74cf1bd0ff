// Copyright (c) 2025 Kaula Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Kaula hash map.

/// Errors that can occur in Kaula hash map operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KaulaHashMapError {
    /// An argument was outside the range the table accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl KaulaHashMapError {
    /// Builds the error reported for a zero bucket count.
    pub(crate) fn zero_capacity(operation: &str) -> Self {
        Self::InvalidArgument(format!(
            "{operation} requires a capacity greater than zero"
        ))
    }
}

/// Result type for Kaula hash map operations
pub type Result<T> = std::result::Result<T, KaulaHashMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KaulaHashMapError::InvalidArgument("capacity".to_string());
        assert_eq!(err.to_string(), "Invalid argument: capacity");

        let err = KaulaHashMapError::zero_capacity("resize_table");
        assert_eq!(
            err.to_string(),
            "Invalid argument: resize_table requires a capacity greater than zero"
        );
    }
}
