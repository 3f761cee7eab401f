//! Errors used throughout the referee.
//!
//! Two families live here. `IllegalMove` says why a move request was turned
//! down; it is an ordinary outcome of refereeing and callers are expected to
//! match on it or simply treat it as "rejected". `ChessErrors` covers bad
//! setup or bad input handed to the crate (off-board coordinates, malformed
//! positions), which callers usually report back to whoever produced it.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameState, Piece, Position};

/// Reason a move request was rejected. The board is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The game already reached a terminal state.
    #[error("the game is over ({0:?})")]
    GameOver(GameState),

    /// The side to move has no piece on the source square.
    #[error("{player:?} has no piece on {from}")]
    NoPieceToMove { player: Color, from: Position },

    /// The piece cannot reach the destination under its movement rules.
    #[error("{piece:?} cannot move from {from} to {to}")]
    IllegalGeometry {
        piece: Piece,
        from: Position,
        to: Position,
    },

    /// The move would leave the mover's own king attacked.
    #[error("moving from {from} to {to} leaves the king in check")]
    LeavesKingInCheck { from: Position, to: Position },
}

/// Setup and input failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates outside `0..8`.
    #[error("({file}, {rank}) is off the board")]
    OutOfBounds { file: i32, rank: i32 },

    /// Tried to place a piece on a square that already holds one.
    #[error("{0} is already occupied")]
    SquareOccupied(Position),

    /// Tried to place a second king for the same color.
    #[error("{color:?} already has a king on {existing}")]
    DuplicateKing { color: Color, existing: Position },

    /// A position handed to the controller lacks a king for one side.
    #[error("{0:?} has no king on the board")]
    MissingKing(Color),

    /// The side not on move is in check, so its king could be captured.
    #[error("{0:?} is in check but not on move")]
    OpponentInCheck(Color),

    /// A promotion answer did not name a knight, bishop, rook or queen.
    #[error("'{0}' is not a promotion piece (expected n, b, r or q)")]
    InvalidPromotionChar(char),

    /// A move request could not be read as four coordinates.
    #[error("cannot read a move from \"{0}\" (expected: x y nx ny)")]
    InvalidMoveInput(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
