//! Minimax Chess Engine
//!
//! Fixed-depth alpha-beta search over material evaluation, with bounded
//! random noise at the leaves so repeated games vary.

mod config;
mod eval;
mod jitter;
mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult};
use tracing::info;

pub use config::{ConfigError, EngineConfig, MAX_DEPTH, MAX_JITTER};
pub use eval::{material_balance, Evaluator, PIECE_VALUES};
pub use jitter::Jitter;
pub use search::{Role, SearchError, SearchOutcome, SearchStats, Searcher, SCORE_INFINITY};

/// Chess engine driving a [`Searcher`] built from an [`EngineConfig`].
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning and explicit player roles
/// - Material evaluation with optional leaf jitter
/// - Automatic draw detection (75-move rule, fivefold repetition, dead positions)
pub struct MinimaxEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = config.build_searcher();
        Self { config, searcher }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    fn rebuild(&mut self) {
        self.searcher = self.config.build_searcher();
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    type Error = SearchError;

    fn search(&mut self, pos: &Position, limits: SearchLimits) -> Result<SearchResult, SearchError> {
        let depth = limits.depth.unwrap_or(self.config.depth).clamp(1, MAX_DEPTH);
        self.searcher.set_depth(depth);

        let mut scratch = pos.clone();
        let outcome = self.searcher.search_root(&mut scratch)?;

        // Odd depths minimize scores reported for the opponent.
        let score = match Role::for_root(depth) {
            Role::Maximizer => outcome.score,
            Role::Minimizer => -outcome.score,
        };

        Ok(SearchResult {
            best_move: outcome.best_move,
            score: score * 100,
            depth,
            nodes: self.searcher.stats().nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.rebuild();
    }

    fn uci_options(&self) -> Vec<String> {
        let seed = self
            .config
            .seed
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        vec![
            format!(
                "name Depth type spin default {} min 1 max {MAX_DEPTH}",
                self.config.depth
            ),
            format!(
                "name Jitter type spin default {} min 0 max {MAX_JITTER}",
                self.config.jitter
            ),
            format!("name Seed type string default {seed}"),
        ]
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let mut next = self.config.clone();
        let parsed = match name.to_ascii_lowercase().as_str() {
            "depth" => value.parse().map(|d| next.depth = d).is_ok(),
            "jitter" => value.parse().map(|j| next.jitter = j).is_ok(),
            "seed" => match value {
                "" | "none" | "random" => {
                    next.seed = None;
                    true
                }
                _ => value.parse().map(|s| next.seed = Some(s)).is_ok(),
            },
            _ => false,
        };
        if !parsed || next.validate().is_err() {
            return false;
        }

        info!(name, value, "engine option set");
        self.config = next;
        self.rebuild();
        true
    }
}

#[cfg(test)]
mod lib_tests;
