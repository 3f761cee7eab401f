//! Plain-text board renderer.
//!
//! Produces the grid front ends print between moves: rank 7 at the top, each
//! row prefixed with its rank index, White in uppercase, Black in lowercase,
//! `_` for empty squares and a file-index legend underneath.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{board::Board, chess_types::*};

/// Render the board to an ASCII string.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'0' + rank));
        out.push('|');
        for file in 0..BOARD_SIZE {
            out.push(match board.piece_at(Position::new(file, rank)) {
                Some(occupant) => occupant_char(occupant),
                None => '_',
            });
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in 0..BOARD_SIZE {
        out.push(char::from(b'0' + file));
    }

    out
}

fn occupant_char(occupant: Occupant) -> char {
    let letter = occupant.piece.letter();
    match occupant.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}
