//! The contract a search needs from a rules engine.
//!
//! Searches never own the position they explore: they push a move, recurse,
//! and pop it again. [`MoveGuard`] ties the pop to scope exit so that early
//! returns (pruning, `?`, panics) cannot leave the caller's position changed.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::error::RulesError;
use crate::types::{Color, PieceKind};

/// A mutable game state that can enumerate, apply and undo legal moves.
pub trait RulesEngine {
    type Move: Copy + Eq + Debug;

    /// All legal moves, in an order that is stable for a given state.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` in place. Illegal moves are rejected and leave the state untouched.
    fn apply_move(&mut self, mv: Self::Move) -> Result<(), RulesError>;

    /// Reverts the most recent [`apply_move`](Self::apply_move), returning the
    /// move that was taken back, or `None` if nothing was applied.
    fn undo_move(&mut self) -> Option<Self::Move>;

    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Color;

    fn piece_count(&self, kind: PieceKind, side: Color) -> u32;
}

/// A move that is undone when the guard goes out of scope.
pub struct MoveGuard<'a, R: RulesEngine> {
    rules: &'a mut R,
}

impl<'a, R: RulesEngine> MoveGuard<'a, R> {
    /// Applies `mv`. If the rules engine rejects it no guard is created and
    /// nothing needs undoing.
    pub fn apply(rules: &'a mut R, mv: R::Move) -> Result<Self, RulesError> {
        rules.apply_move(mv)?;
        Ok(Self { rules })
    }
}

impl<R: RulesEngine> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: RulesEngine> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: RulesEngine> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        self.rules.undo_move();
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
