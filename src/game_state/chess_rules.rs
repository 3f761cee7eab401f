//! Canonical chess-rule constants.
//!
//! Board dimensions, the back-rank layout and the per-color home ranks used to
//! set up a game and to decide pawn double steps, promotion and castling.

use crate::game_state::chess_types::{CastleSide, Color, Piece};

pub const BOARD_SIZE: u8 = 8;

/// Back-rank layout from file 0 to file 7.
pub const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

pub const KING_HOME_FILE: u8 = 4;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => BOARD_SIZE - 1,
    }
}

#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => BOARD_SIZE - 2,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opponent())
}

#[inline]
pub const fn rook_home_file(side: CastleSide) -> u8 {
    match side {
        CastleSide::Queenside => 0,
        CastleSide::Kingside => BOARD_SIZE - 1,
    }
}
