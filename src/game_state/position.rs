use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;

/// A square on the board, `file` and `rank` both in `0..8`.
///
/// `(0, 0)` is a1 and `(7, 7)` is h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Builds a position from trusted coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board. Use
    /// [`Position::try_new`] for untrusted input.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        assert!(file < BOARD_SIZE && rank < BOARD_SIZE, "position off the board");
        Self { file, rank }
    }

    pub fn try_new(file: i32, rank: i32) -> Result<Self, ChessErrors> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&file) && (0..size).contains(&rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessErrors::OutOfBounds { file, rank })
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Moves the position by a file and rank offset, `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::try_new(
            i32::from(self.file) + i32::from(d_file),
            i32::from(self.rank) + i32::from(d_rank),
        )
        .ok()
    }

    /// Signed `(d_file, d_rank)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }

    /// Every square of the board, rank by rank starting at a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position::new(file, rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), self.rank + 1)
    }
}
