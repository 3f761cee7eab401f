use smallvec::SmallVec;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// One raw change made to occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEdit {
    Removed { at: Position, occupant: Occupant },
    Placed { at: Position, occupant: Occupant },
}

/// Undo record for a tentatively applied move.
///
/// Holds the ordered edits the move made to the board; reverting replays them
/// backwards. A move touches at most five squares (capture, rook lift and drop,
/// mover lift and drop), so the log never spills to the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a tentative move must be reverted or committed"]
pub struct UndoState {
    pub player: Color,
    pub from: Position,
    pub to: Position,
    pub moved_piece: Piece,
    pub captured: Option<(Position, Piece)>,
    pub castled: Option<CastleSide>,
    edits: SmallVec<[BoardEdit; 6]>,
}

impl UndoState {
    pub(crate) fn new(player: Color, from: Position, to: Position, moved_piece: Piece) -> Self {
        Self {
            player,
            from,
            to,
            moved_piece,
            captured: None,
            castled: None,
            edits: SmallVec::new(),
        }
    }

    /// Clears `at` on the board and logs the removal.
    pub(crate) fn remove(&mut self, board: &mut Board, at: Position) -> Option<Occupant> {
        let occupant = board.take(at)?;
        self.edits.push(BoardEdit::Removed { at, occupant });
        Some(occupant)
    }

    /// Writes `occupant` onto an empty square and logs the placement.
    pub(crate) fn place(&mut self, board: &mut Board, at: Position, occupant: Occupant) {
        debug_assert!(board.is_empty(at), "ledger placement onto an occupied square");
        board.set_occupant(at, occupant);
        self.edits.push(BoardEdit::Placed { at, occupant });
    }

    /// Lifts the occupant of `from` and drops it on `to`.
    pub(crate) fn relocate(&mut self, board: &mut Board, from: Position, to: Position) {
        if let Some(occupant) = self.remove(board, from) {
            self.place(board, to, occupant);
        }
    }

    /// Undoes every logged edit, newest first.
    pub(crate) fn replay_backwards(self, board: &mut Board) {
        for edit in self.edits.into_iter().rev() {
            match edit {
                BoardEdit::Placed { at, .. } => {
                    board.take(at);
                }
                BoardEdit::Removed { at, occupant } => board.set_occupant(at, occupant),
            }
        }
    }
}
