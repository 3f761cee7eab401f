//! Crate root module declarations for the chess referee.
//!
//! The referee validates move requests under full chess law and keeps the
//! authoritative state of a game: occupancy, whose turn it is, castling and
//! en-passant eligibility, and the final outcome. `game_state` holds the data
//! model and the turn controller, `move_generation` the legality rules and the
//! move executor, and `utils` the text renderer.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod position;
    pub mod promotion;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_geometry;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, IllegalMove};
pub use game_state::board::Board;
pub use game_state::chess_types::{
    CastleSide, CastlingRights, Color, GameState, Occupant, Piece, Position, PromotionChoice,
};
pub use game_state::game_controller::{Game, MoveOutcome};
pub use game_state::promotion::{FixedPromotion, PromotionSelector};
