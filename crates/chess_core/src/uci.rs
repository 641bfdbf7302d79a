use cozy_chess::{File, Move, Piece, Square};

use crate::{board::Position, error::RulesError, rules::RulesEngine};

/// Formats `mv` in UCI long algebraic notation.
///
/// The move generator encodes castling as the king capturing its own rook;
/// GUIs expect the king's destination square instead (`e1g1`).
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let castles = board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == board.color_on(mv.from);
    if castles {
        let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            File::G
        } else {
            File::C
        };
        let to = Square::new(file, mv.from.rank());
        return format!("{}{}", mv.from, to);
    }
    mv.to_string()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, RulesError> {
    let mut mv: Move = txt
        .parse()
        .map_err(|_| RulesError::MalformedMove(txt.to_string()))?;

    // Map standard castling notation onto king-takes-rook.
    let board = pos.board();
    let from_file = mv.from.file() as u8;
    let to_file = mv.to.file() as u8;
    if board.piece_on(mv.from) == Some(Piece::King) && from_file.abs_diff(to_file) == 2 {
        let rook_file = if to_file > from_file { File::H } else { File::A };
        mv.to = Square::new(rook_file, mv.from.rank());
    }

    // Match against legal moves so only moves the position allows get through.
    pos.legal_moves()
        .into_iter()
        .find(|&legal| legal == mv)
        .ok_or_else(|| RulesError::IllegalMove {
            mv: txt.to_string(),
            fen: pos.fen(),
        })
}

/// Applies the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), RulesError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut next = match setup {
        ["startpos"] | [] => Position::startpos(),
        ["fen", fields @ ..] if !fields.is_empty() => Position::from_fen(&fields.join(" "))?,
        _ => return Err(RulesError::MalformedPosition(args.join(" "))),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(&next, txt)?;
        next.apply_move(mv)?;
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
