//! Pawn movement geometry.
//!
//! Pawns are the only piece whose moving and capturing squares differ, so the
//! module exposes both the move rule and the narrower capture rule used by
//! attack detection.

use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::{board::Board, chess_types::*};

/// Pawn move rule, ignoring king safety.
///
/// Forward steps need empty squares; a double step only leaves the home rank;
/// a diagonal step must capture an enemy piece or land on the en-passant target.
pub fn pawn_geometry(board: &Board, player: Color, from: Position, to: Position) -> bool {
    let direction = player.pawn_direction();
    let (d_file, d_rank) = from.delta_to(to);

    if d_rank == direction {
        return match d_file.abs() {
            0 => board.is_empty(to),
            1 => board.piece_exists(player.opponent(), to) || is_en_passant_capture(board, player, to),
            _ => false,
        };
    }

    if d_rank == 2 * direction && d_file == 0 {
        return from.rank() == pawn_home_rank(player)
            && from
                .offset(0, direction)
                .is_some_and(|between| board.is_empty(between))
            && board.is_empty(to);
    }

    false
}

/// True if a pawn of `player` stepping diagonally onto `to` takes en passant.
pub fn is_en_passant_capture(board: &Board, player: Color, to: Position) -> bool {
    board.en_passant().is_some_and(|ep| {
        ep.target == to && board.piece_of(player.opponent(), ep.victim) == Some(Piece::Pawn)
    })
}

/// True if a pawn of `color` on `from` attacks `target`.
///
/// Only the two forward diagonals count, whatever stands on them.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Position, target: Position) -> bool {
    let (d_file, d_rank) = from.delta_to(target);
    d_rank == color.pawn_direction() && d_file.abs() == 1
}
