//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! depth = 5
//! jitter = 10
//! seed = 42
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::eval::Evaluator;
use crate::search::Searcher;

/// Deepest search the engine accepts.
pub const MAX_DEPTH: u8 = 12;

/// Largest jitter bound. Keeps every leaf score far inside
/// `SCORE_INFINITY` and reported centipawn scores inside `i32`.
pub const MAX_JITTER: i32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be at least 1")]
    DepthTooLow,

    #[error("search depth must be at most {max} (got {0})", max = MAX_DEPTH)]
    DepthTooHigh(u8),

    #[error("jitter bound must not be negative (got {0})")]
    NegativeJitter(i32),

    #[error("jitter bound must be at most {max} (got {0})", max = MAX_JITTER)]
    JitterTooLarge(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies, used for every move
    pub depth: u8,
    /// Leaf noise bound; 0 makes evaluation deterministic
    pub jitter: i32,
    /// Seed for the noise generator; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            jitter: 10,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::DepthTooLow);
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooHigh(self.depth));
        }
        if self.jitter < 0 {
            return Err(ConfigError::NegativeJitter(self.jitter));
        }
        if self.jitter > MAX_JITTER {
            return Err(ConfigError::JitterTooLarge(self.jitter));
        }
        Ok(())
    }

    pub fn build_searcher(&self) -> Searcher {
        let evaluator = if self.jitter == 0 {
            Evaluator::material_only()
        } else {
            Evaluator::jittered(self.jitter, self.seed)
        };
        Searcher::new(evaluator, self.depth)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
