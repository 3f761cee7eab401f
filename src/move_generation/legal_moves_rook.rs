use crate::game_state::{board::Board, chess_types::Position};
use crate::move_generation::legal_move_shared::path_is_clear;

/// Rook move rule: any distance along a rank or file through empty squares.
#[inline]
pub fn rook_geometry(board: &Board, from: Position, to: Position) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    (d_file == 0) != (d_rank == 0) && path_is_clear(board, from, to)
}
