//! Move-path enumeration for validating the rules.
//!
//! Counts every legal move sequence of a given length, with the usual
//! breakdown by move kind, so the referee can be checked against published
//! node counts.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::{commit_move, tentatively_apply, CommittedMove};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn tally(&mut self, committed: &CommittedMove, after: &mut Board) {
        let defender = committed.player.opponent();
        self.nodes += 1;
        self.captures += usize::from(committed.captured.is_some());
        self.en_passant += usize::from(committed.en_passant);
        self.castles += usize::from(committed.castled.is_some());
        self.promotions += usize::from(committed.promoted_to.is_some());
        if is_king_attacked(after, defender) {
            self.checks += 1;
            self.checkmates += usize::from(!has_legal_move(after, defender));
        }
    }
}

/// Counts legal move sequences of length `depth` with `player` to move.
///
/// Each promotion counts once per promotion piece.
pub fn perft(board: &Board, player: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let mut scratch = board.clone();
    for (from, to) in legal_moves(&mut scratch, player) {
        let promotes = board.piece_of(player, from) == Some(Piece::Pawn)
            && to.rank() == promotion_rank(player);
        let choices: Vec<Option<PromotionChoice>> = if promotes {
            PromotionChoice::ALL.into_iter().map(Some).collect()
        } else {
            vec![None]
        };

        for choice in choices {
            let mut next = board.clone();
            let Some(undo) = tentatively_apply(&mut next, player, from, to) else {
                continue;
            };
            let committed = commit_move(&mut next, undo, || {
                choice.unwrap_or(PromotionChoice::Queen)
            });
            if depth == 1 {
                total.tally(&committed, &mut next);
            } else {
                total.merge(perft(&next, player.opponent(), depth - 1));
            }
        }
    }
    total
}
