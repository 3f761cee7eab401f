//! Fully legal move enumeration.
//!
//! Combines the geometry gate with a tentative apply / king check / revert
//! probe. The controller's end-of-turn scan is `has_legal_move`; the listing
//! helpers serve front ends that want to highlight reachable squares.

use log::trace;

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::{revert, tentatively_apply};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_geometry::is_legal_geometry;

/// Squares `player`'s piece on `from` reaches by movement rules alone.
pub fn geometric_destinations(board: &Board, player: Color, from: Position) -> Vec<Position> {
    Position::all()
        .filter(|&to| is_legal_geometry(board, player, from, to))
        .collect()
}

/// True if `from -> to` passes geometry and leaves `player`'s king unattacked.
///
/// The board is left exactly as it was found.
pub fn is_fully_legal(board: &mut Board, player: Color, from: Position, to: Position) -> bool {
    is_legal_geometry(board, player, from, to) && keeps_king_safe(board, player, from, to)
}

/// Probes a geometrically legal move for king safety and takes it back.
pub(crate) fn keeps_king_safe(board: &mut Board, player: Color, from: Position, to: Position) -> bool {
    let Some(undo) = tentatively_apply(board, player, from, to) else {
        return false;
    };
    let safe = !is_king_attacked(board, player);
    revert(board, undo);
    safe
}

/// Fully legal destinations of `player`'s piece on `from`.
pub fn legal_destinations(board: &mut Board, player: Color, from: Position) -> Vec<Position> {
    geometric_destinations(board, player, from)
        .into_iter()
        .filter(|&to| keeps_king_safe(board, player, from, to))
        .collect()
}

/// Every fully legal `(from, to)` pair for `player`.
pub fn legal_moves(board: &mut Board, player: Color) -> Vec<(Position, Position)> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces_of(player) {
        for to in legal_destinations(board, player, from) {
            moves.push((from, to));
        }
    }
    moves
}

/// True if `player` has at least one fully legal move.
///
/// Stops at the first reply that leaves the king unattacked.
pub fn has_legal_move(board: &mut Board, player: Color) -> bool {
    let mut probes = 0usize;
    // Snapshot the squares first; probing moves pieces around.
    for (from, _) in board.pieces_of(player) {
        for to in geometric_destinations(board, player, from) {
            probes += 1;
            if keeps_king_safe(board, player, from, to) {
                trace!("{player:?} has a reply {from}->{to} after {probes} probes");
                return true;
            }
        }
    }
    trace!("{player:?} has no legal reply after {probes} probes");
    false
}
