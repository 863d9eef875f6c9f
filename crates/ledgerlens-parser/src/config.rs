//! Configuration for the transaction parser

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the transaction parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Text at or below this length (characters) is dispatched as one unit
    pub chunk_threshold: usize,

    /// A chunk is closed once its cumulative line length reaches this size
    pub chunk_size: usize,

    /// Substitute for candidates whose date is missing or literal "null"
    pub fallback_date: String,

    /// Maximum time for a single oracle call (seconds)
    pub llm_timeout_secs: u64,
}

impl ParserConfig {
    /// Get the oracle-call timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.chunk_threshold < self.chunk_size {
            return Err("chunk_threshold cannot be below chunk_size".to_string());
        }
        if self.fallback_date.trim().is_empty() {
            return Err("fallback_date must not be empty".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            chunk_threshold: 10_000,
            chunk_size: 8_000,
            fallback_date: "01-01-2026".to_string(),
            llm_timeout_secs: 120,
        }
    }
}
