//! Material-based position evaluation with optional jitter.

use chess_core::{Color, PieceKind, RulesEngine};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::jitter::Jitter;

/// Material values in pawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];

/// Material balance from the side-to-move's perspective.
///
/// Checkmate and stalemate get no special score; only material counts.
pub fn material_balance<P: RulesEngine>(pos: &P) -> i32 {
    let mut score = 0i32;

    for kind in PieceKind::ALL {
        let value = PIECE_VALUES[kind.idx()];
        let white_count = pos.piece_count(kind, Color::White) as i32;
        let black_count = pos.piece_count(kind, Color::Black) as i32;
        score += value * (white_count - black_count);
    }

    // Convert to side-to-move perspective
    if pos.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}

/// Scores leaf positions: material balance plus jitter, if any.
#[derive(Debug, Clone)]
pub struct Evaluator<G = SmallRng> {
    jitter: Option<Jitter<G>>,
}

impl Evaluator<SmallRng> {
    /// Deterministic evaluation: material only.
    pub fn material_only() -> Self {
        Self { jitter: None }
    }

    /// Material plus noise in `[-bound, bound]`.
    pub fn jittered(bound: i32, seed: Option<u64>) -> Self {
        Self::with_jitter(Jitter::new(bound, seed))
    }
}

impl<G: Rng> Evaluator<G> {
    pub fn with_jitter(jitter: Jitter<G>) -> Self {
        Self {
            jitter: Some(jitter),
        }
    }

    pub fn jitter_bound(&self) -> i32 {
        self.jitter.as_ref().map_or(0, Jitter::bound)
    }

    pub fn evaluate<P: RulesEngine>(&mut self, pos: &P) -> i32 {
        let noise = self.jitter.as_mut().map_or(0, Jitter::sample);
        material_balance(pos) + noise
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
