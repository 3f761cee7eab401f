//! Closed vocabularies shared by every layer of the referee.
//!
//! Colors, piece tags, castling sides and the game outcome live here so the
//! board, the legality checks and the controller all dispatch on the same types.

pub use crate::game_state::position::Position;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank offset a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece tag. Carries no behavior; the legality checks dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Lowercase letter used by the board renderer.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }
}

/// A piece together with the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub color: Color,
    pub piece: Piece,
}

impl Occupant {
    #[inline]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Self { color, piece }
    }
}

/// Pieces a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Knight,
        PromotionChoice::Bishop,
        PromotionChoice::Rook,
        PromotionChoice::Queen,
    ];

    #[inline]
    pub const fn piece(self) -> Piece {
        match self {
            PromotionChoice::Knight => Piece::Knight,
            PromotionChoice::Bishop => Piece::Bishop,
            PromotionChoice::Rook => Piece::Rook,
            PromotionChoice::Queen => Piece::Queen,
        }
    }
}

impl From<PromotionChoice> for Piece {
    fn from(choice: PromotionChoice) -> Self {
        choice.piece()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }
}

/// Outcome of the game so far. Every value but `Ongoing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Ongoing,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWin,
            Color::Black => GameState::BlackWin,
        }
    }
}

/// Castling availability per color and side. Rights can only be revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    #[inline]
    pub const fn all() -> Self {
        Self {
            rights: [[true; 2]; 2],
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            rights: [[false; 2]; 2],
        }
    }

    /// Starts from no rights and grants exactly the listed ones.
    pub fn only(granted: &[(Color, CastleSide)]) -> Self {
        let mut rights = Self::none();
        for (color, side) in granted {
            rights.rights[color.index()][side.index()] = true;
        }
        rights
    }

    #[inline]
    pub const fn allows(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color.index()][side.index()]
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.rights[color.index()][side.index()] = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color.index()] = [false; 2];
    }

    /// True if every right held by `self` is also held by `earlier`.
    pub fn is_subset_of(&self, earlier: &CastlingRights) -> bool {
        Color::ALL.iter().all(|&color| {
            CastleSide::ALL
                .iter()
                .all(|&side| !self.allows(color, side) || earlier.allows(color, side))
        })
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Square an en-passant capture lands on, and the pawn it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant {
    pub target: Position,
    pub victim: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(color.opponent().opponent(), color);
        }
    }

    #[test]
    fn revoked_rights_stay_a_subset() {
        let start = CastlingRights::all();
        let mut rights = start;
        rights.revoke(Color::White, CastleSide::Kingside);
        assert!(!rights.allows(Color::White, CastleSide::Kingside));
        assert!(rights.allows(Color::White, CastleSide::Queenside));
        assert!(rights.is_subset_of(&start));
        assert!(!start.is_subset_of(&rights));

        rights.revoke_all(Color::Black);
        assert!(!rights.allows(Color::Black, CastleSide::Queenside));
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn only_grants_listed_rights() {
        let rights = CastlingRights::only(&[(Color::Black, CastleSide::Queenside)]);
        assert!(rights.allows(Color::Black, CastleSide::Queenside));
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
        assert!(!rights.allows(Color::White, CastleSide::Queenside));
    }
}
