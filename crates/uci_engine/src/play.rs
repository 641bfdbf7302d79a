//! Console game: a human enters UCI moves, the engine answers.

use std::io::{BufRead, Write};

use anyhow::Context;
use chess_core::{move_to_uci, parse_uci_move, Color, Engine, Outcome, Position, RulesEngine, SearchLimits};
use tracing::info;

/// Plays from `pos` until the game ends, the human types `quit`, or input
/// runs out. Returns the outcome if the game finished.
pub fn run<E: Engine>(
    engine: &mut E,
    engine_color: Color,
    mut pos: Position,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<Option<Outcome>> {
    let mut lines = input.lines();

    loop {
        if let (Some(termination), Some(outcome)) = (pos.termination(), pos.outcome()) {
            writeln!(out, "game over: {termination:?} ({outcome})")?;
            info!(?termination, %outcome, plies = pos.ply(), "game finished");
            return Ok(Some(outcome));
        }

        writeln!(out, "{}", pos.fen())?;

        if pos.side_to_move() == engine_color {
            let result = engine.search(&pos, SearchLimits::default())?;
            let Some(mv) = result.best_move else {
                writeln!(out, "engine has no move")?;
                return Ok(None);
            };
            writeln!(out, "engine plays {}", move_to_uci(&pos, mv))?;
            pos.apply_move(mv)?;
            continue;
        }

        write!(out, "your move ({}): ", pos.side_to_move())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read move")?;
        match line.trim() {
            "" => continue,
            "quit" => return Ok(None),
            txt => match parse_uci_move(&pos, txt) {
                Ok(mv) => pos.apply_move(mv)?,
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
