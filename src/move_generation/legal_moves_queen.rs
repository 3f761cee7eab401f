use crate::game_state::{board::Board, chess_types::Position};
use crate::move_generation::legal_moves_bishop::bishop_geometry;
use crate::move_generation::legal_moves_rook::rook_geometry;

/// Queen move rule: the union of the bishop and rook rules.
#[inline]
pub fn queen_geometry(board: &Board, from: Position, to: Position) -> bool {
    bishop_geometry(board, from, to) || rook_geometry(board, from, to)
}
