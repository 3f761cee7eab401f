//! Attack and check detection.
//!
//! Attacks are judged by capture reach rather than by move legality: a pawn
//! attacks only its forward diagonals, a king only its neighbouring squares
//! (castling never attacks), and sliders need a clear path to the target.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_moves_bishop::bishop_geometry;
use crate::move_generation::legal_moves_knight::knight_geometry;
use crate::move_generation::legal_moves_pawn::pawn_attacks_square;
use crate::move_generation::legal_moves_queen::queen_geometry;
use crate::move_generation::legal_moves_rook::rook_geometry;

/// True if `attacker`, standing on `from`, attacks `target`.
pub fn piece_attacks_square(board: &Board, attacker: Occupant, from: Position, target: Position) -> bool {
    if from == target {
        return false;
    }
    match attacker.piece {
        Piece::Pawn => pawn_attacks_square(attacker.color, from, target),
        Piece::Knight => knight_geometry(from, target),
        Piece::Bishop => bishop_geometry(board, from, target),
        Piece::Rook => rook_geometry(board, from, target),
        Piece::Queen => queen_geometry(board, from, target),
        Piece::King => {
            let (d_file, d_rank) = from.delta_to(target);
            d_file.abs() <= 1 && d_rank.abs() <= 1
        }
    }
}

/// True if any piece of `defender`'s opponent attacks `square`.
pub fn is_square_attacked(board: &Board, defender: Color, square: Position) -> bool {
    !attackers_to_square(board, defender, square).is_empty()
}

/// Every enemy piece attacking `square`, in board order.
pub fn attackers_to_square(board: &Board, defender: Color, square: Position) -> Vec<(Position, Piece)> {
    let attacker_color = defender.opponent();
    board
        .pieces_of(attacker_color)
        .into_iter()
        .filter(|&(from, piece)| {
            piece_attacks_square(board, Occupant::new(attacker_color, piece), from, square)
        })
        .collect()
}

/// True if `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_position(color)
        .is_some_and(|king| is_square_attacked(board, color, king))
}
