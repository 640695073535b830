//! Generator configuration.
//!
//! Callers normally use [`GeneratorConfig::default`]. The struct deserializes
//! with every field optional, so a service can embed it in its own settings
//! file and override only what it needs.

use serde::{Deserialize, Serialize};

use crate::card_engine::error::{EngineError, Result};

/// Reshuffles allowed before giving up on one series.
///
/// About 2.7% of uniform shuffles can be arranged, so the chance of a
/// thousand failures in a row is below 1e-11.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Hard cap on shuffle attempts per series.
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(EngineError::invalid("max_attempts must be at least 1"));
        }
        Ok(())
    }
}
