use crate::game_state::{board::Board, chess_types::Position};
use crate::move_generation::legal_move_shared::path_is_clear;

/// Bishop move rule: any distance along a diagonal through empty squares.
#[inline]
pub fn bishop_geometry(board: &Board, from: Position, to: Position) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    d_file != 0 && d_file.abs() == d_rank.abs() && path_is_clear(board, from, to)
}
