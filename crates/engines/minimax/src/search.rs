//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The two players are searched with explicit roles instead of negamax sign
//! flips: scores always come from [`Evaluator`], which reports them for the
//! side to move at the leaf, and each role picks the maximum or minimum of
//! its children's scores.

use chess_core::{MoveGuard, RulesEngine, RulesError};
use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::eval::Evaluator;

/// Larger than any score the evaluator can produce.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search window is empty (alpha {alpha} >= beta {beta})")]
    EmptyWindow { alpha: i32, beta: i32 },

    #[error(transparent)]
    Rules(#[from] RulesError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Role of the root for a search of `depth` plies.
    ///
    /// Full-depth leaves have the root's side to move when `depth` is even and
    /// the opponent to move when it is odd, so the root maximizes leaf scores
    /// only for even depths.
    pub fn for_root(depth: u8) -> Role {
        if depth % 2 == 0 {
            Role::Maximizer
        } else {
            Role::Minimizer
        }
    }

    fn worst_score(self) -> i32 {
        match self {
            Role::Maximizer => -SCORE_INFINITY,
            Role::Minimizer => SCORE_INFINITY,
        }
    }
}

/// Score of a node and the move that achieved it.
///
/// `best_move` is `None` for leaves: depth exhausted, game over, or no legal
/// moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub score: i32,
    pub best_move: Option<M>,
}

/// Counters for one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
}

pub struct Searcher<G = SmallRng> {
    evaluator: Evaluator<G>,
    depth: u8,
    stats: SearchStats,
}

impl<G: Rng> Searcher<G> {
    pub fn new(evaluator: Evaluator<G>, depth: u8) -> Self {
        Self {
            evaluator,
            depth,
            stats: SearchStats::default(),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator<G> {
        &mut self.evaluator
    }

    /// Picks a move for the side to move, or `None` if there is nothing to
    /// play. `pos` is identical to its entry state when this returns.
    pub fn choose_move<P: RulesEngine>(&mut self, pos: &mut P) -> Result<Option<P::Move>, SearchError> {
        Ok(self.search_root(pos)?.best_move)
    }

    /// Full-window search from the root at the configured depth.
    pub fn search_root<P: RulesEngine>(&mut self, pos: &mut P) -> Result<SearchOutcome<P::Move>, SearchError> {
        self.stats = SearchStats::default();
        let role = Role::for_root(self.depth);
        let outcome = self.search(pos, self.depth, role, -SCORE_INFINITY, SCORE_INFINITY)?;

        debug!(
            depth = self.depth,
            ?role,
            score = outcome.score,
            best_move = ?outcome.best_move,
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );
        Ok(outcome)
    }

    /// Searches `depth` plies below `pos` within the open window `(alpha, beta)`.
    pub fn search<P: RulesEngine>(
        &mut self,
        pos: &mut P,
        depth: u8,
        role: Role,
        alpha: i32,
        beta: i32,
    ) -> Result<SearchOutcome<P::Move>, SearchError> {
        if alpha >= beta {
            return Err(SearchError::EmptyWindow { alpha, beta });
        }
        self.search_node(pos, depth, role, alpha, beta, true)
    }

    fn leaf<P: RulesEngine>(&mut self, pos: &P) -> SearchOutcome<P::Move> {
        self.stats.evaluations += 1;
        SearchOutcome {
            score: self.evaluator.evaluate(pos),
            best_move: None,
        }
    }

    fn search_node<P: RulesEngine>(
        &mut self,
        pos: &mut P,
        depth: u8,
        role: Role,
        mut alpha: i32,
        mut beta: i32,
        root: bool,
    ) -> Result<SearchOutcome<P::Move>, SearchError> {
        debug_assert!(alpha < beta, "searched with an empty window");
        self.stats.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return Ok(self.leaf(pos));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            warn!(depth, "no legal moves in a position the rules engine reports as ongoing");
            return Ok(self.leaf(pos));
        }

        let mut best = SearchOutcome {
            score: role.worst_score(),
            best_move: None,
        };

        for mv in moves {
            let score = {
                let mut child = MoveGuard::apply(&mut *pos, mv)?;
                let reply =
                    self.search_node(&mut *child, depth - 1, role.opposite(), alpha, beta, false)?;
                reply.score
            };
            if root {
                trace!(?mv, score, "root move");
            }

            match role {
                Role::Maximizer => {
                    if score > best.score {
                        best = SearchOutcome {
                            score,
                            best_move: Some(mv),
                        };
                    }
                    alpha = alpha.max(score);
                }
                Role::Minimizer => {
                    if score < best.score {
                        best = SearchOutcome {
                            score,
                            best_move: Some(mv),
                        };
                    }
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
