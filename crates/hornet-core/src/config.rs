//! Engine configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default bound on nested rule applications
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest accepted `max_depth`
pub const MAX_DEPTH_CEILING: usize = 2048;

/// Stack reserved per nested rule application, on top of [`BASE_STACK_SIZE`]
const STACK_PER_LEVEL: usize = 128 * 1024;

const BASE_STACK_SIZE: usize = 1024 * 1024;

/// Tunables for the resolution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of nested rule applications before evaluation aborts
    /// with [`Error::RecursionLimit`]. Cyclic rules are not detected, so this
    /// is what stops them.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(source: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum resolution depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(Error::Config(format!(
                "max_depth {} exceeds the ceiling of {MAX_DEPTH_CEILING}",
                self.max_depth
            )));
        }
        Ok(())
    }

    /// Stack size of the thread that evaluates queries. Grows with
    /// `max_depth` so the limit is reached before the stack runs out.
    pub fn stack_size(&self) -> usize {
        BASE_STACK_SIZE + self.max_depth.min(MAX_DEPTH_CEILING) * STACK_PER_LEVEL
    }
}
