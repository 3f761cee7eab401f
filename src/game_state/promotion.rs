//! The promotion collaborator.
//!
//! The controller asks a `PromotionSelector` which piece a pawn becomes when it
//! reaches the far rank. Front ends implement it to prompt a human; tests and
//! headless callers use `FixedPromotion` or a closure.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PromotionChoice;

pub trait PromotionSelector {
    /// Called synchronously, exactly once per promoting move.
    fn choose_promotion(&mut self) -> PromotionChoice;
}

/// Always promotes to the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub PromotionChoice);

impl Default for FixedPromotion {
    fn default() -> Self {
        Self(PromotionChoice::Queen)
    }
}

impl PromotionSelector for FixedPromotion {
    fn choose_promotion(&mut self) -> PromotionChoice {
        self.0
    }
}

impl<F> PromotionSelector for F
where
    F: FnMut() -> PromotionChoice,
{
    fn choose_promotion(&mut self) -> PromotionChoice {
        self()
    }
}

impl TryFrom<char> for PromotionChoice {
    type Error = ChessErrors;

    /// Reads the answer a terminal user types: `n`, `b`, `r` or `q`, any case.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'n' => Ok(PromotionChoice::Knight),
            'b' => Ok(PromotionChoice::Bishop),
            'r' => Ok(PromotionChoice::Rook),
            'q' => Ok(PromotionChoice::Queen),
            _ => Err(ChessErrors::InvalidPromotionChar(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_letters_parse_in_either_case() {
        assert_eq!(PromotionChoice::try_from('q'), Ok(PromotionChoice::Queen));
        assert_eq!(PromotionChoice::try_from('N'), Ok(PromotionChoice::Knight));
        assert_eq!(
            PromotionChoice::try_from('k'),
            Err(ChessErrors::InvalidPromotionChar('k'))
        );
    }

    #[test]
    fn closures_act_as_selectors() {
        let mut asked = 0;
        let mut selector = || {
            asked += 1;
            PromotionChoice::Rook
        };
        assert_eq!(selector.choose_promotion(), PromotionChoice::Rook);
        assert_eq!(FixedPromotion::default().choose_promotion(), PromotionChoice::Queen);
        drop(selector);
        assert_eq!(asked, 1);
    }
}
