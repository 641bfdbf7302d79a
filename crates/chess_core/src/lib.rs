pub mod board;
pub mod error;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use cozy_chess::Move;
pub use error::RulesError;
pub use rules::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by move-choosing engines
// =============================================================================

/// Limits for a single search. Only depth is supported; engines search to a
/// fixed depth and always run to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Depth in plies; `None` uses the engine's configured depth
    pub depth: Option<u8>,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth: Some(depth) }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the engine's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that move-choosing engines implement, so drivers (UCI, console play)
/// do not depend on a particular search.
pub trait Engine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search the position with the given limits. The position is not modified.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> Result<SearchResult, Self::Error>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// UCI `option` declarations (without the leading `option `), in the
    /// order they should be advertised.
    fn uci_options(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
