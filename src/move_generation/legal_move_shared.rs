use crate::game_state::{board::Board, chess_types::*};

/// A piece of `player` may end its move on `to` unless a friendly piece is there.
#[inline]
pub fn can_stop_at(board: &Board, player: Color, to: Position) -> bool {
    !board.piece_exists(player, to)
}

/// Unit step from `from` toward `to`, or `None` if they do not share a line.
#[inline]
pub fn line_step(from: Position, to: Position) -> Option<(i8, i8)> {
    let (d_file, d_rank) = from.delta_to(to);
    if (d_file, d_rank) == (0, 0) {
        return None;
    }
    let straight = d_file == 0 || d_rank == 0;
    let diagonal = d_file.abs() == d_rank.abs();
    if straight || diagonal {
        Some((d_file.signum(), d_rank.signum()))
    } else {
        None
    }
}

/// True if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a rank, file or diagonal.
pub fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let Some((d_file, d_rank)) = line_step(from, to) else {
        return false;
    };
    let mut current = from.offset(d_file, d_rank);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(d_file, d_rank);
    }
    false
}
