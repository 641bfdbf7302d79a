//! UCI protocol loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use chess_core::{move_to_uci, set_position_from_uci, Engine, Position, SearchLimits};
use tracing::{debug, warn};

/// Reads commands from `input` until `quit` or end of input.
pub fn run<E: Engine>(engine: &mut E, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let mut pos = Position::startpos();

    for line in input.lines() {
        let line = line.context("failed to read UCI command")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", engine.name())?;
                writeln!(out, "id author {}", engine.author())?;
                for option in engine.uci_options() {
                    writeln!(out, "option {option}")?;
                }
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => match parse_setoption(&parts[1..]) {
                Some((name, value)) => {
                    if !engine.set_option(&name, &value) {
                        warn!(%name, %value, "rejected engine option");
                    }
                }
                None => warn!(%line, "malformed setoption"),
            },
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                if let Err(err) = set_position_from_uci(&mut pos, &parts[1..]) {
                    warn!(error = %err, "ignoring position command");
                }
            }
            "go" => {
                let limits = parse_go(&parts[1..]);
                let result = engine.search(&pos, limits)?;
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {}",
                    result.depth, result.score, result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(&pos, mv))?,
                    None => writeln!(out, "bestmove 0000")?, // no moves
                }
            }
            "quit" => break,
            _ => debug!(%command, "ignoring unknown command"),
        }
        out.flush()?;
    }
    Ok(())
}

/// `name <id...> value <x...>`; ids and values may contain spaces.
fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    if args.first() != Some(&"name") {
        return None;
    }
    let value_at = args.iter().position(|&a| a == "value");
    let name_end = value_at.unwrap_or(args.len());
    let name = args[1..name_end].join(" ");
    if name.is_empty() {
        return None;
    }
    let value = value_at.map(|i| args[i + 1..].join(" ")).unwrap_or_default();
    Some((name, value))
}

/// Only `depth` is honoured; clock arguments are ignored.
fn parse_go(args: &[&str]) -> SearchLimits {
    let depth = args
        .iter()
        .position(|&a| a == "depth")
        .and_then(|i| args.get(i + 1))
        .and_then(|d| d.parse::<u8>().ok())
        .filter(|&d| d > 0);
    SearchLimits { depth }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
