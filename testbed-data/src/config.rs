//! Configuration for samplers built from untyped input (JSON files, CLI
//! overrides, experiment manifests).
//!
//! ```rust
//! use testbed_data::config::MultiBatchConfig;
//!
//! let config = MultiBatchConfig::from_json(r#"{"merge_size": 4, "drop_last": false}"#).unwrap();
//! assert_eq!(config.merge_size, 4);
//! assert!(MultiBatchConfig::from_json(r#"{"merge_size": 2.5, "drop_last": false}"#).is_err());
//! ```

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings of a `MultiBatchSampler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiBatchConfig {
    /// Number of consecutive batches merged together. Must be a positive integer.
    pub merge_size: usize,
    /// Whether to drop the last incomplete merged batch.
    pub drop_last: bool,
}

impl MultiBatchConfig {
    /// Parses and validates a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DataError::InvalidArgument(format!("malformed configuration: {}", e)))?;
        Self::from_value(value)
    }

    /// Parses and validates a configuration from an already decoded JSON value.
    ///
    /// Negative, fractional or boolean merge sizes and non-boolean
    /// `drop_last` values are rejected with `DataError::InvalidArgument`.
    pub fn from_value(value: Value) -> Result<Self, DataError> {
        let summary = value.to_string();
        let config: Self = serde_json::from_value(value).map_err(|e| {
            DataError::InvalidArgument(format!("invalid configuration {}: {}", summary, e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.merge_size == 0 {
            return Err(DataError::InvalidArgument(format!(
                "merge_size should be a positive integer value, but got merge_size={}",
                self.merge_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
