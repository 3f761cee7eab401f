//! Applying moves to a board.
//!
//! A move is first applied tentatively, which performs only the occupancy
//! changes and returns the `UndoState` needed to take them back. Once the move
//! is known not to expose the mover's king it is committed, which updates the
//! en-passant window, promotes pawns and revokes castling rights.

use log::debug;

use crate::game_state::chess_rules::{pawn_home_rank, promotion_rank};
use crate::game_state::{board::Board, chess_types::*, undo_state::UndoState};
use crate::move_generation::legal_moves_king::{
    castle_side, castling_rook_home, castling_rook_target,
};
use crate::move_generation::legal_moves_pawn::is_en_passant_capture;

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub player: Color,
    pub from: Position,
    pub to: Position,
    pub moved_piece: Piece,
    /// Square and piece removed by the move, if it captured.
    pub captured: Option<(Position, Piece)>,
    pub castled: Option<CastleSide>,
    pub en_passant: bool,
    pub promoted_to: Option<Piece>,
}

/// Applies the occupancy changes of `from -> to` and records how to undo them.
///
/// The caller must already know the move obeys the movement rules; nothing is
/// re-validated here. Returns `None` only if `player` has no piece on `from`.
pub fn tentatively_apply(
    board: &mut Board,
    player: Color,
    from: Position,
    to: Position,
) -> Option<UndoState> {
    let moved_piece = board.piece_of(player, from)?;
    let mut undo = UndoState::new(player, from, to, moved_piece);

    let capture_square = match board.en_passant() {
        Some(ep) if moved_piece == Piece::Pawn && is_en_passant_capture(board, player, to) => {
            ep.victim
        }
        _ => to,
    };
    if board.piece_exists(player.opponent(), capture_square) {
        if let Some(captured) = undo.remove(board, capture_square) {
            undo.captured = Some((capture_square, captured.piece));
        }
    }

    if moved_piece == Piece::King {
        if let Some(side) = castle_side(player, from, to) {
            undo.relocate(
                board,
                castling_rook_home(player, side),
                castling_rook_target(player, side),
            );
            undo.castled = Some(side);
        }
    }

    undo.relocate(board, from, to);
    Some(undo)
}

/// Takes back a tentatively applied move, castling rook included.
pub fn revert(board: &mut Board, undo: UndoState) {
    undo.replay_backwards(board);
}

/// True if the tentatively applied move brought a pawn to the far rank.
#[inline]
pub fn needs_promotion(undo: &UndoState) -> bool {
    undo.moved_piece == Piece::Pawn && undo.to.rank() == promotion_rank(undo.player)
}

/// Locks in a tentatively applied move and performs the rule bookkeeping.
///
/// `choose_promotion` is called exactly once, and only when a pawn reached the
/// far rank.
pub fn commit_move<F>(board: &mut Board, undo: UndoState, choose_promotion: F) -> CommittedMove
where
    F: FnOnce() -> PromotionChoice,
{
    let player = undo.player;

    let double_advance = undo.moved_piece == Piece::Pawn
        && undo.from.rank() == pawn_home_rank(player)
        && undo.from.delta_to(undo.to) == (0, 2 * player.pawn_direction());
    let next_en_passant = if double_advance {
        undo.from
            .offset(0, player.pawn_direction())
            .map(|target| EnPassant {
                target,
                victim: undo.to,
            })
    } else {
        None
    };
    let en_passant = undo.moved_piece == Piece::Pawn
        && undo.captured.is_some_and(|(at, _)| at != undo.to);
    board.set_en_passant(next_en_passant);

    let promoted_to = if needs_promotion(&undo) {
        let piece = choose_promotion().piece();
        board.set_occupant(undo.to, Occupant::new(player, piece));
        debug!("{player:?} pawn on {} promoted to {piece:?}", undo.to);
        Some(piece)
    } else {
        None
    };

    update_castling_rights(board, &undo);

    if let Some(side) = undo.castled {
        debug!("{player:?} castled {side:?}");
    }
    if en_passant {
        debug!("{player:?} captured en passant on {}", undo.to);
    }

    CommittedMove {
        player,
        from: undo.from,
        to: undo.to,
        moved_piece: undo.moved_piece,
        captured: undo.captured,
        castled: undo.castled,
        en_passant,
        promoted_to,
    }
}

fn update_castling_rights(board: &mut Board, undo: &UndoState) {
    let player = undo.player;
    let rights = board.castling_rights_mut();

    if undo.moved_piece == Piece::King {
        rights.revoke_all(player);
    }

    for side in CastleSide::ALL {
        if undo.moved_piece == Piece::Rook && undo.from == castling_rook_home(player, side) {
            rights.revoke(player, side);
        }
        // A rook captured on its corner can no longer castle.
        let enemy = player.opponent();
        if undo.captured == Some((castling_rook_home(enemy, side), Piece::Rook)) {
            rights.revoke(enemy, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    fn sq(file: u8, rank: u8) -> Position {
        Position::new(file, rank)
    }

    #[test]
    fn apply_then_revert_restores_the_board() {
        let mut board = Board::standard();
        let before = board.clone();
        let undo = tentatively_apply(&mut board, Color::White, sq(6, 0), sq(5, 2)).unwrap();
        assert_eq!(board.piece_of(Color::White, sq(5, 2)), Some(Piece::Knight));
        assert!(board.is_empty(sq(6, 0)));
        revert(&mut board, undo);
        assert_eq!(board, before);
    }

    #[test]
    fn capture_is_restored_on_revert() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        board.place(sq(0, 0), Color::White, Piece::King)?;
        board.place(sq(7, 7), Color::Black, Piece::King)?;
        board.place(sq(3, 3), Color::White, Piece::Rook)?;
        board.place(sq(3, 6), Color::Black, Piece::Bishop)?;
        let before = board.clone();

        let undo = tentatively_apply(&mut board, Color::White, sq(3, 3), sq(3, 6)).unwrap();
        assert_eq!(undo.captured, Some((sq(3, 6), Piece::Bishop)));
        assert_eq!(board.piece_of(Color::White, sq(3, 6)), Some(Piece::Rook));
        revert(&mut board, undo);
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn castling_moves_the_rook_and_reverts_symmetrically() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        board.place(sq(4, 0), Color::White, Piece::King)?;
        board.place(sq(7, 0), Color::White, Piece::Rook)?;
        board.place(sq(4, 7), Color::Black, Piece::King)?;
        board.set_castling_rights(CastlingRights::all());
        let before = board.clone();

        let undo = tentatively_apply(&mut board, Color::White, sq(4, 0), sq(6, 0)).unwrap();
        assert_eq!(undo.castled, Some(CastleSide::Kingside));
        assert_eq!(board.piece_of(Color::White, sq(5, 0)), Some(Piece::Rook));
        assert_eq!(board.king_position(Color::White), Some(sq(6, 0)));
        assert!(board.is_empty(sq(7, 0)));

        revert(&mut board, undo);
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn commit_opens_and_closes_the_en_passant_window() {
        let mut board = Board::standard();
        let undo = tentatively_apply(&mut board, Color::White, sq(4, 1), sq(4, 3)).unwrap();
        let committed = commit_move(&mut board, undo, || unreachable!("no promotion"));
        assert!(!committed.en_passant);
        assert_eq!(
            board.en_passant(),
            Some(EnPassant {
                target: sq(4, 2),
                victim: sq(4, 3)
            })
        );

        let undo = tentatively_apply(&mut board, Color::Black, sq(6, 7), sq(5, 5)).unwrap();
        commit_move(&mut board, undo, || unreachable!("no promotion"));
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn commit_promotes_with_the_chosen_piece() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        board.place(sq(0, 0), Color::White, Piece::King)?;
        board.place(sq(7, 7), Color::Black, Piece::King)?;
        board.place(sq(2, 6), Color::White, Piece::Pawn)?;

        let undo = tentatively_apply(&mut board, Color::White, sq(2, 6), sq(2, 7)).unwrap();
        assert!(needs_promotion(&undo));
        let committed = commit_move(&mut board, undo, || PromotionChoice::Knight);
        assert_eq!(committed.promoted_to, Some(Piece::Knight));
        assert_eq!(board.piece_of(Color::White, sq(2, 7)), Some(Piece::Knight));
        Ok(())
    }

    #[test]
    fn capturing_a_corner_rook_revokes_its_castling_right() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        board.place(sq(4, 0), Color::White, Piece::King)?;
        board.place(sq(4, 7), Color::Black, Piece::King)?;
        board.place(sq(7, 7), Color::Black, Piece::Rook)?;
        board.place(sq(7, 2), Color::White, Piece::Rook)?;
        board.set_castling_rights(CastlingRights::all());

        let undo = tentatively_apply(&mut board, Color::White, sq(7, 2), sq(7, 7)).unwrap();
        commit_move(&mut board, undo, || unreachable!("no promotion"));
        let rights = board.castling_rights();
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
        assert!(rights.allows(Color::Black, CastleSide::Queenside));
        // The white rook did not start on a corner.
        assert!(rights.allows(Color::White, CastleSide::Kingside));
        Ok(())
    }
}
