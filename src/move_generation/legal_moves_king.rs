//! King movement geometry, castling included.

use crate::game_state::chess_rules::{back_rank, rook_home_file, KING_HOME_FILE};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::path_is_clear;

/// King move rule: one step in any direction, or a castling move.
pub fn king_geometry(board: &Board, player: Color, from: Position, to: Position) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    if d_file.abs() <= 1 && d_rank.abs() <= 1 {
        return true;
    }
    match castle_side(player, from, to) {
        Some(side) => can_castle(board, player, side),
        None => false,
    }
}

/// Which castling move `from -> to` would be for `player`, judged on squares alone.
pub fn castle_side(player: Color, from: Position, to: Position) -> Option<CastleSide> {
    let home = Position::new(KING_HOME_FILE, back_rank(player));
    if from != home || to.rank() != home.rank() {
        return None;
    }
    match from.delta_to(to).0 {
        -2 => Some(CastleSide::Queenside),
        2 => Some(CastleSide::Kingside),
        _ => None,
    }
}

/// Corner square of the rook involved in castling on `side`.
#[inline]
pub fn castling_rook_home(player: Color, side: CastleSide) -> Position {
    Position::new(rook_home_file(side), back_rank(player))
}

/// Square the rook lands on: next to the king, on the side the king came from.
#[inline]
pub fn castling_rook_target(player: Color, side: CastleSide) -> Position {
    let file = match side {
        CastleSide::Queenside => KING_HOME_FILE - 1,
        CastleSide::Kingside => KING_HOME_FILE + 1,
    };
    Position::new(file, back_rank(player))
}

// The right must still be held, the rook must stand on its corner with nothing
// between it and the king, and the king may not start on, cross or land on an
// attacked square.
fn can_castle(board: &Board, player: Color, side: CastleSide) -> bool {
    let king = Position::new(KING_HOME_FILE, back_rank(player));
    let rook = castling_rook_home(player, side);
    let step: i8 = match side {
        CastleSide::Queenside => -1,
        CastleSide::Kingside => 1,
    };

    if !board.castling_rights().allows(player, side)
        || board.piece_of(player, king) != Some(Piece::King)
        || board.piece_of(player, rook) != Some(Piece::Rook)
        || !path_is_clear(board, king, rook)
    {
        return false;
    }

    [0, step, 2 * step].into_iter().all(|d_file| {
        king.offset(d_file, 0)
            .is_some_and(|square| !is_square_attacked(board, player, square))
    })
}
