//! One-ply placement scoring
//!
//! While pieces are still in hand the AI does not look ahead: every empty
//! node is tried once, the resulting board is evaluated and a few bonuses
//! are added on top.

use crate::board::topology::mills_through;
use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, PlacementBonus};
use crate::rules::{forms_mill_for, is_two_and_empty};

/// Best placement found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementChoice {
    pub position: Pos,
    pub score: i32,
    /// Number of empty nodes that were scored
    pub candidates: u32,
}

/// Whether putting a piece on `pos` fills the empty node of a line where
/// the opponent of `player` already holds two pieces. Checked on the board
/// before the placement.
#[must_use]
pub fn blocks_opponent_mill(board: &Board, pos: Pos, player: Player) -> bool {
    let opponent = player.opponent();
    mills_through(pos).any(|line| is_two_and_empty(board, &line, opponent))
}

/// Score a placement of `player` on the empty node `pos`
#[must_use]
pub fn score_placement(board: &Board, pos: Pos, player: Player) -> i32 {
    let after = board.with_placement(pos, player);
    let mut score = evaluate(&after, player);

    if forms_mill_for(&after, pos, player) {
        score += PlacementBonus::FORMS_MILL;
    }
    if pos.is_strategic() {
        score += PlacementBonus::STRATEGIC;
    }
    if blocks_opponent_mill(board, pos, player) {
        score += PlacementBonus::BLOCKS_MILL;
    }
    score
}

/// Highest scoring empty node; ties go to the lowest index.
/// `None` when the board is full.
pub fn find_best_placement(board: &Board, player: Player) -> Option<PlacementChoice> {
    let mut best: Option<PlacementChoice> = None;
    let mut candidates = 0;

    for pos in board.empty_positions() {
        candidates += 1;
        let score = score_placement(board, pos, player);
        if best.map_or(true, |b| score > b.score) {
            best = Some(PlacementChoice {
                position: pos,
                score,
                candidates: 0,
            });
        }
    }

    best.map(|b| PlacementChoice { candidates, ..b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_edge_beats_corner() {
        // White opened on 4; Black (AI) to place
        let board = Board::from_pieces(&[4], &[]);
        let mid = score_placement(&board, Pos::new(1), Player::Black);
        let corner = score_placement(&board, Pos::new(0), Player::Black);
        assert!(mid > corner, "mid {} corner {}", mid, corner);
    }

    #[test]
    fn test_prefers_closing_a_mill() {
        let board = Board::from_pieces(&[20, 4], &[0, 1]);
        let choice = find_best_placement(&board, Player::Black).unwrap();
        assert_eq!(choice.position, Pos::new(2));
    }

    #[test]
    fn test_blocks_opponent_two_in_line() {
        let board = Board::from_pieces(&[8, 9], &[20]);
        assert!(blocks_opponent_mill(&board, Pos::new(10), Player::Black));
        assert!(!blocks_opponent_mill(&board, Pos::new(11), Player::Black));
        let choice = find_best_placement(&board, Player::Black).unwrap();
        assert_eq!(choice.position, Pos::new(10));
    }

    #[test]
    fn test_block_bonus_uses_board_before_placement() {
        // After placing on 2 the line 0-1-2 is no longer two-and-empty,
        // the bonus still applies
        let board = Board::from_pieces(&[0, 1], &[]);
        let with_block = score_placement(&board, Pos::new(2), Player::Black);
        let after = board.with_placement(Pos::new(2), Player::Black);
        assert_eq!(with_block, evaluate(&after, Player::Black) + PlacementBonus::BLOCKS_MILL);
    }

    #[test]
    fn test_full_board_has_no_placement() {
        let white: Vec<u8> = (0..12).collect();
        let black: Vec<u8> = (12..24).collect();
        let board = Board::from_pieces(&white, &black);
        assert_eq!(find_best_placement(&board, Player::White), None);
    }

    #[test]
    fn test_candidate_count() {
        let board = Board::from_pieces(&[4], &[]);
        let choice = find_best_placement(&board, Player::Black).unwrap();
        assert_eq!(choice.candidates, 23);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        // Symmetric empty board: the four middle-square mid-edges tie
        let board = Board::new();
        let choice = find_best_placement(&board, Player::White).unwrap();
        assert_eq!(choice.position, Pos::new(9));
    }
}
