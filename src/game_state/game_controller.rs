//! Turn-by-turn refereeing of a single game.
//!
//! `Game` owns the board and drives every move request through the same
//! sequence: terminal-state guard, ownership check, movement geometry,
//! tentative apply with a king-safety probe, commit, and finally a scan of
//! the opponent's replies that either hands over the turn or ends the game.

use std::fmt;

use log::{debug, info};

use crate::chess_errors::{ChessErrors, IllegalMove};
use crate::game_state::promotion::{FixedPromotion, PromotionSelector};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::{
    commit_move, revert, tentatively_apply, CommittedMove,
};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_destinations, legal_moves};
use crate::move_generation::legal_move_geometry::is_legal_geometry;

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub committed: CommittedMove,
    /// Whether the move left the opponent's king attacked.
    pub gives_check: bool,
    /// Game state once the move and the reply scan are done.
    pub state: GameState,
}

pub struct Game {
    board: Board,
    current_player: Color,
    state: GameState,
    promotion: Box<dyn PromotionSelector>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Box::new(FixedPromotion::default()))
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

impl Game {
    /// A new game from the standard starting position, White to move.
    pub fn new(promotion: Box<dyn PromotionSelector>) -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::White,
            state: GameState::Ongoing,
            promotion,
        }
    }

    pub fn with_selector<S>(selector: S) -> Self
    where
        S: PromotionSelector + 'static,
    {
        Self::new(Box::new(selector))
    }

    /// A game continuing from a custom position with `to_move` on turn.
    ///
    /// Both sides need a king, and the side not on move may not be in check.
    /// If `to_move` has no legal move the game starts out already decided.
    pub fn from_board(
        board: Board,
        to_move: Color,
        promotion: Box<dyn PromotionSelector>,
    ) -> Result<Self, ChessErrors> {
        for color in Color::ALL {
            if board.king_position(color).is_none() {
                return Err(ChessErrors::MissingKing(color));
            }
        }
        if is_king_attacked(&board, to_move.opponent()) {
            return Err(ChessErrors::OpponentInCheck(to_move.opponent()));
        }
        let mut game = Self {
            board,
            current_player: to_move,
            state: GameState::Ongoing,
            promotion,
        };
        if !has_legal_move(&mut game.board, to_move) {
            game.state = Self::verdict(&game.board, to_move);
        }
        Ok(game)
    }

    /// Back to the starting position, White to move, game ongoing.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Color::White;
        self.state = GameState::Ongoing;
        info!("game reset");
    }

    pub fn set_promotion_selector(&mut self, promotion: Box<dyn PromotionSelector>) {
        self.promotion = promotion;
    }

    /// Plays `from -> to` for the side to move. Returns whether it was accepted.
    pub fn submit_move(&mut self, from: Position, to: Position) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Integer-coordinate form of [`Game::submit_move`]. Off-board input is rejected.
    pub fn submit_coordinates(&mut self, x: i32, y: i32, nx: i32, ny: i32) -> bool {
        match (Position::try_new(x, y), Position::try_new(nx, ny)) {
            (Ok(from), Ok(to)) => self.submit_move(from, to),
            (Err(e), _) | (_, Err(e)) => {
                debug!("move request rejected: {e}");
                false
            }
        }
    }

    /// Plays `from -> to` for the side to move, reporting why a rejection happened.
    ///
    /// A rejected move leaves the game untouched.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, IllegalMove> {
        let result = self.play(from, to);
        if let Err(reason) = &result {
            debug!("move {from}->{to} rejected: {reason}");
        }
        result
    }

    fn play(&mut self, from: Position, to: Position) -> Result<MoveOutcome, IllegalMove> {
        if self.state.is_terminal() {
            return Err(IllegalMove::GameOver(self.state));
        }

        let player = self.current_player;
        let opponent = player.opponent();
        let piece = self
            .board
            .piece_of(player, from)
            .ok_or(IllegalMove::NoPieceToMove { player, from })?;

        if !is_legal_geometry(&self.board, player, from, to) {
            return Err(IllegalMove::IllegalGeometry { piece, from, to });
        }

        let undo = tentatively_apply(&mut self.board, player, from, to)
            .ok_or(IllegalMove::NoPieceToMove { player, from })?;
        if is_king_attacked(&self.board, player) {
            revert(&mut self.board, undo);
            return Err(IllegalMove::LeavesKingInCheck { from, to });
        }

        let promotion = &mut self.promotion;
        let committed = commit_move(&mut self.board, undo, || promotion.choose_promotion());

        let gives_check = is_king_attacked(&self.board, opponent);
        if has_legal_move(&mut self.board, opponent) {
            self.current_player = opponent;
        } else {
            self.state = Self::verdict(&self.board, opponent);
            info!("game over after {player:?} {from}->{to}: {:?}", self.state);
        }

        Ok(MoveOutcome {
            committed,
            gives_check,
            state: self.state,
        })
    }

    // Outcome when `stuck` has no legal move: mate if in check, else stalemate.
    fn verdict(board: &Board, stuck: Color) -> GameState {
        if is_king_attacked(board, stuck) {
            GameState::win_for(stuck.opponent())
        } else {
            GameState::Draw
        }
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn opponent(&self) -> Color {
        self.current_player.opponent()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, at: Position) -> Option<Occupant> {
        self.board.piece_at(at)
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.board.king_position(color)
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.board.castling_rights()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.board.en_passant_target()
    }

    /// True if the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        is_king_attacked(&self.board, self.current_player)
    }

    /// Squares the side to move may legally send its piece on `from` to.
    ///
    /// Empty for squares without a piece of the side to move, and once the game is over.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        legal_destinations(&mut scratch, self.current_player, from)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        legal_moves(&mut scratch, self.current_player)
    }

    /// Printable board, see [`crate::utils::render_game_state::render_board`].
    pub fn board_as_string(&self) -> String {
        self.board.to_string()
    }
}
