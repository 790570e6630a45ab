//! Heuristic evaluation function for Nine Men's Morris board positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search and by the placement scorer. Scores are always from the
//! perspective of the side passed in.

use crate::board::{Board, Player, Pos, STRATEGIC_POSITIONS};
use crate::rules::{count_mills, count_moves, count_potential_mills};

use super::weights::EvalWeight;

/// Raw differentials (own minus opponent) before weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalTerms {
    pub pieces: i32,
    pub mills: i32,
    pub potential_mills: i32,
    pub mobility: i32,
    pub strategic: i32,
}

impl EvalTerms {
    /// Weighted sum of the terms
    #[must_use]
    pub fn score(&self) -> i32 {
        self.pieces * EvalWeight::PIECE
            + self.mills * EvalWeight::MILL
            + self.potential_mills * EvalWeight::POTENTIAL_MILL
            + self.mobility * EvalWeight::MOBILITY
            + self.strategic * EvalWeight::STRATEGIC
    }
}

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favor `player`. Mobility uses the board-only flying
/// rule: a side with exactly three pieces on the board counts every empty
/// node as reachable from each of its pieces.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    evaluate_terms(board, player).score()
}

/// Compute the individual differentials for `player`
#[must_use]
pub fn evaluate_terms(board: &Board, player: Player) -> EvalTerms {
    let opponent = player.opponent();
    EvalTerms {
        pieces: board.count(player) as i32 - board.count(opponent) as i32,
        mills: count_mills(board, player) - count_mills(board, opponent),
        potential_mills: count_potential_mills(board, player) - count_potential_mills(board, opponent),
        mobility: count_moves(board, player) - count_moves(board, opponent),
        strategic: count_strategic(board, player) - count_strategic(board, opponent),
    }
}

/// Pieces of `player` on mid-edge nodes
fn count_strategic(board: &Board, player: Player) -> i32 {
    STRATEGIC_POSITIONS
        .iter()
        .filter(|&&idx| board.is_owned_by(Pos::new(idx), player))
        .count() as i32
}
