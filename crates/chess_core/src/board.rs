use cozy_chess::{Board, Move, Piece};

use crate::error::RulesError;
use crate::rules::RulesEngine;
use crate::types::*;

/// Squares a1, c1, ..., b2, d2, ... (a1 is dark).
const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;

/// State needed to take back one move.
#[derive(Clone, Debug)]
struct Undo {
    board: Board,
    mv: Move,
    halfmove_clock: u16,
}

/// A chess position with an undo stack.
///
/// Move generation and legality come from `cozy-chess`, which is
/// copy-make only; the stack of previous boards provides `undo_move`, and
/// doubles as the game history for repetition detection. The halfmove clock
/// is tracked here because the seventy-five-move rule needs values the
/// underlying board does not keep.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    halfmove_clock: u16,
    history: Vec<Undo>,
}

impl Position {
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    /// Parses Forsyth-Edwards Notation. Halfmove clocks above 100 are
    /// accepted and kept.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let invalid = |reason: String| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = match fields.get(4) {
            Some(field) => field
                .parse::<u16>()
                .map_err(|_| invalid(format!("bad halfmove clock `{field}`")))?,
            None => 0,
        };
        let clamped = halfmove_clock.min(100).to_string();
        if fields.len() > 4 {
            fields[4] = &clamped;
        }

        let board = Board::from_fen(&fields.join(" "), false).map_err(|e| invalid(format!("{e:?}")))?;
        Ok(Self {
            board,
            halfmove_clock,
            history: Vec::new(),
        })
    }

    pub fn fen(&self) -> String {
        let fen = self.board.to_string();
        let mut fields: Vec<String> = fen.split(' ').map(str::to_string).collect();
        if fields.len() > 4 {
            fields[4] = self.halfmove_clock.to_string();
        }
        fields.join(" ")
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Number of moves applied since this position was created.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    /// How many times the current position occurred since the last capture or
    /// pawn move, this occurrence included.
    pub fn repetitions(&self) -> usize {
        let key = self.board.hash();
        let window = self.halfmove_clock as usize;
        1 + self
            .history
            .iter()
            .rev()
            .take(window)
            .filter(|undo| undo.board.hash() == key)
            .count()
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        let b = &self.board;
        let ours = b.colors(color.into()).0;
        let theirs = b.colors(color.other().into()).0;
        let pawns = b.pieces(Piece::Pawn).0;
        let knights = b.pieces(Piece::Knight).0;
        let bishops = b.pieces(Piece::Bishop).0;
        let rooks = b.pieces(Piece::Rook).0;
        let queens = b.pieces(Piece::Queen).0;
        let kings = b.pieces(Piece::King).0;

        if ours & (pawns | rooks | queens) != 0 {
            return false;
        }
        if ours & knights != 0 {
            // A lone knight can only mate with help from enemy blockers.
            return ours.count_ones() <= 2 && theirs & !kings & !queens == 0;
        }
        if ours & bishops != 0 {
            let one_square_colour = bishops & DARK_SQUARES == 0 || bishops & !DARK_SQUARES == 0;
            return one_square_colour && pawns == 0 && knights == 0;
        }
        true
    }

    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL.iter().all(|&c| self.has_insufficient_material(c))
    }

    /// The reason the game is over, if it is.
    pub fn termination(&self) -> Option<Termination> {
        let has_moves = self.has_legal_moves();
        if !has_moves && self.in_check() {
            return Some(Termination::Checkmate);
        }
        if self.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if !has_moves {
            return Some(Termination::Stalemate);
        }
        if self.halfmove_clock >= 150 {
            return Some(Termination::SeventyFiveMoves);
        }
        if self.repetitions() >= 5 {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.termination().map(|t| match t {
            Termination::Checkmate => Outcome::Decisive {
                winner: self.side_to_move().other(),
            },
            _ => Outcome::Draw,
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl RulesEngine for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            });
        }

        let opponent: cozy_chess::Color = self.side_to_move().other().into();
        let capture = self.board.color_on(mv.to) == Some(opponent);
        let pawn_move = self.board.piece_on(mv.from) == Some(Piece::Pawn);

        self.history.push(Undo {
            board: self.board.clone(),
            mv,
            halfmove_clock: self.halfmove_clock,
        });
        self.board.play_unchecked(mv);
        self.halfmove_clock = if capture || pawn_move {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        Ok(())
    }

    fn undo_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        Some(undo.mv)
    }

    fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn piece_count(&self, kind: PieceKind, side: Color) -> u32 {
        self.board.colored_pieces(side.into(), kind.into()).len()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
