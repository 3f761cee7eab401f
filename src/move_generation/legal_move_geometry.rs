//! Per-piece movement legality, without king safety.
//!
//! `is_legal_geometry` is the first gate every move request passes: it looks
//! up the piece on the source square and dispatches to the rule for that
//! piece. Whether the move exposes the mover's king is decided afterwards by
//! applying it tentatively.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::can_stop_at;
use crate::move_generation::legal_moves_bishop::bishop_geometry;
use crate::move_generation::legal_moves_king::king_geometry;
use crate::move_generation::legal_moves_knight::knight_geometry;
use crate::move_generation::legal_moves_pawn::pawn_geometry;
use crate::move_generation::legal_moves_queen::queen_geometry;
use crate::move_generation::legal_moves_rook::rook_geometry;

/// True if `player`'s piece on `from` may move to `to` under its movement rules.
///
/// Requires a piece of `player` on `from`, and `to` must not hold one of
/// `player`'s own pieces.
pub fn is_legal_geometry(board: &Board, player: Color, from: Position, to: Position) -> bool {
    let Some(piece) = board.piece_of(player, from) else {
        return false;
    };
    if from == to || !can_stop_at(board, player, to) {
        return false;
    }
    match piece {
        Piece::Pawn => pawn_geometry(board, player, from, to),
        Piece::Knight => knight_geometry(from, to),
        Piece::Bishop => bishop_geometry(board, from, to),
        Piece::Rook => rook_geometry(board, from, to),
        Piece::Queen => queen_geometry(board, from, to),
        Piece::King => king_geometry(board, player, from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Position {
        Position::new(file, rank)
    }

    #[test]
    fn knight_cannot_land_on_its_own_piece() {
        let board = Board::standard();
        assert!(!is_legal_geometry(&board, Color::White, sq(1, 0), sq(3, 1)));
        assert!(is_legal_geometry(&board, Color::White, sq(1, 0), sq(2, 2)));
    }

    #[test]
    fn only_the_owner_may_move_a_piece() {
        let board = Board::standard();
        assert!(!is_legal_geometry(&board, Color::Black, sq(4, 1), sq(4, 2)));
        assert!(!is_legal_geometry(&board, Color::White, sq(4, 3), sq(4, 4)));
    }

    #[test]
    fn twenty_geometric_moves_from_the_start() {
        let board = Board::standard();
        let count: usize = board
            .pieces_of(Color::White)
            .into_iter()
            .map(|(from, _)| {
                Position::all()
                    .filter(|&to| is_legal_geometry(&board, Color::White, from, to))
                    .count()
            })
            .sum();
        assert_eq!(count, 20);
    }
}
