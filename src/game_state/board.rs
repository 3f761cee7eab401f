//! Board occupancy and the special-rule bookkeeping that travels with it.
//!
//! `Board` is the single owner of raw occupancy. Every square maps to at most
//! one `Occupant`, and the king squares are kept in step with every placement
//! and removal so check detection never has to search for a king.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{back_rank, pawn_home_rank, BACK_ROW, BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [file][rank]
    squares: [[Option<Occupant>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    kings: [Option<Position>; 2],
    castling_rights: CastlingRights,
    en_passant: Option<EnPassant>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// A board with no pieces, no castling rights and no en-passant target.
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            kings: [None; 2],
            castling_rights: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// The standard starting layout with every castling right available.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
        for color in Color::ALL {
            for (file, piece) in BACK_ROW.iter().copied().enumerate() {
                let file = file as u8;
                self.set_occupant(
                    Position::new(file, back_rank(color)),
                    Occupant::new(color, piece),
                );
                self.set_occupant(
                    Position::new(file, pawn_home_rank(color)),
                    Occupant::new(color, Piece::Pawn),
                );
            }
        }
        self.castling_rights = CastlingRights::all();
    }

    /// Adds a piece to an empty square. Intended for setting up positions.
    pub fn place(&mut self, at: Position, color: Color, piece: Piece) -> Result<(), ChessErrors> {
        if self.piece_at(at).is_some() {
            return Err(ChessErrors::SquareOccupied(at));
        }
        if piece == Piece::King {
            if let Some(existing) = self.king_position(color) {
                return Err(ChessErrors::DuplicateKing { color, existing });
            }
        }
        self.set_occupant(at, Occupant::new(color, piece));
        Ok(())
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[inline]
    pub fn piece_at(&self, at: Position) -> Option<Occupant> {
        self.squares[at.file() as usize][at.rank() as usize]
    }

    #[inline]
    pub fn piece_of(&self, color: Color, at: Position) -> Option<Piece> {
        self.piece_at(at)
            .filter(|occupant| occupant.color == color)
            .map(|occupant| occupant.piece)
    }

    #[inline]
    pub fn piece_exists(&self, color: Color, at: Position) -> bool {
        self.piece_of(color, at).is_some()
    }

    #[inline]
    pub fn is_empty(&self, at: Position) -> bool {
        self.piece_at(at).is_none()
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.kings[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant.map(|ep| ep.target)
    }

    /// Squares and pieces owned by `color`, in board order.
    pub fn pieces_of(&self, color: Color) -> Vec<(Position, Piece)> {
        Position::all()
            .filter_map(|at| self.piece_of(color, at).map(|piece| (at, piece)))
            .collect()
    }

    pub(crate) fn castling_rights_mut(&mut self) -> &mut CastlingRights {
        &mut self.castling_rights
    }

    pub(crate) fn set_en_passant(&mut self, en_passant: Option<EnPassant>) {
        self.en_passant = en_passant;
    }

    /// Writes an occupant onto a square, replacing whatever stood there.
    pub(crate) fn set_occupant(&mut self, at: Position, occupant: Occupant) {
        self.take(at);
        self.squares[at.file() as usize][at.rank() as usize] = Some(occupant);
        if occupant.piece == Piece::King {
            self.kings[occupant.color.index()] = Some(at);
        }
    }

    /// Clears a square, returning its previous occupant.
    pub(crate) fn take(&mut self, at: Position) -> Option<Occupant> {
        let previous = self.squares[at.file() as usize][at.rank() as usize].take();
        if let Some(Occupant {
            color,
            piece: Piece::King,
        }) = previous
        {
            if self.kings[color.index()] == Some(at) {
                self.kings[color.index()] = None;
            }
        }
        previous
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_thirty_two_pieces_and_both_kings() {
        let board = Board::standard();
        assert_eq!(board.pieces_of(Color::White).len(), 16);
        assert_eq!(board.pieces_of(Color::Black).len(), 16);
        assert_eq!(board.king_position(Color::White), Some(Position::new(4, 0)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(4, 7)));
        assert_eq!(
            board.piece_at(Position::new(3, 7)),
            Some(Occupant::new(Color::Black, Piece::Queen))
        );
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn place_rejects_occupied_squares_and_second_kings() {
        let mut board = Board::empty();
        let e1 = Position::new(4, 0);
        board.place(e1, Color::White, Piece::King).unwrap();
        assert!(matches!(
            board.place(e1, Color::Black, Piece::Rook),
            Err(ChessErrors::SquareOccupied(at)) if at == e1
        ));
        assert!(matches!(
            board.place(Position::new(0, 0), Color::White, Piece::King),
            Err(ChessErrors::DuplicateKing { color: Color::White, .. })
        ));
    }

    #[test]
    fn king_position_follows_placement_and_removal() {
        let mut board = Board::empty();
        let e1 = Position::new(4, 0);
        let e2 = Position::new(4, 1);
        board.set_occupant(e1, Occupant::new(Color::White, Piece::King));
        assert_eq!(board.king_position(Color::White), Some(e1));

        let king = board.take(e1).unwrap();
        assert_eq!(board.king_position(Color::White), None);
        board.set_occupant(e2, king);
        assert_eq!(board.king_position(Color::White), Some(e2));
        assert!(board.is_empty(e1));
    }

    #[test]
    fn set_occupant_replaces_the_previous_occupant() {
        let mut board = Board::standard();
        let e8 = Position::new(4, 7);
        board.set_occupant(e8, Occupant::new(Color::White, Piece::Queen));
        assert_eq!(board.piece_of(Color::White, e8), Some(Piece::Queen));
        assert!(!board.piece_exists(Color::Black, e8));
        assert_eq!(board.king_position(Color::Black), None);
    }

    #[test]
    fn reset_restores_the_starting_layout() {
        let mut board = Board::standard();
        board.take(Position::new(4, 1));
        board.castling_rights_mut().revoke_all(Color::White);
        board.reset();
        assert_eq!(board, Board::standard());
    }
}
