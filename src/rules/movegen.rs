//! Relocation generation
//!
//! Generation order is deterministic: origins ascend 0..24, and for each
//! origin destinations follow either ascending order (flying) or the
//! neighbor order of the edge list (sliding). Search tie-breaking depends
//! on this order.

use crate::board::topology::{is_adjacent, neighbors};
use crate::board::{Action, Board, Player, Pos};

/// Piece count at which a player may fly
pub const FLYING_PIECE_COUNT: usize = 3;

/// A relocation of one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Relocation {
            from: mv.from,
            to: mv.to,
        }
    }
}

/// All relocations for `player`, flying when the player has exactly three
/// pieces on the board. This is the board-only rule used by the search and
/// the evaluator; it does not look at pieces still in hand.
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    let flying = board.count(player) == FLYING_PIECE_COUNT;
    generate_moves_with(board, player, flying)
}

/// All relocations for `player` with the flying rule given explicitly
pub fn generate_moves_with(board: &Board, player: Player, flying: bool) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    for from in board.positions_of(player) {
        if flying {
            moves.extend(board.empty_positions().map(|to| Move::new(from, to)));
        } else {
            moves.extend(
                neighbors(from)
                    .filter(|&to| board.is_empty(to))
                    .map(|to| Move::new(from, to)),
            );
        }
    }
    moves
}

/// Number of relocations available (same rule as [`generate_moves`])
pub fn count_moves(board: &Board, player: Player) -> i32 {
    let flying = board.count(player) == FLYING_PIECE_COUNT;
    if flying {
        let empties = board.empty_positions().count();
        (board.count(player) * empties) as i32
    } else {
        board
            .positions_of(player)
            .map(|from| neighbors(from).filter(|&to| board.is_empty(to)).count())
            .sum::<usize>() as i32
    }
}

/// Whether `player` can make any relocation at all
pub fn has_any_move(board: &Board, player: Player, flying: bool) -> bool {
    if flying {
        return board.empty_positions().next().is_some();
    }
    board
        .positions_of(player)
        .any(|from| neighbors(from).any(|to| board.is_empty(to)))
}

/// Check a single relocation against board contents and the flying rule
#[inline]
pub fn is_legal_relocation(board: &Board, player: Player, mv: Move, flying: bool) -> bool {
    board.is_owned_by(mv.from, player)
        && board.is_empty(mv.to)
        && (flying || is_adjacent(mv.from, mv.to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_moves_from_corner() {
        let board = Board::from_pieces(&[0], &[1, 2, 3, 4]);
        let moves = generate_moves(&board, Player::White);
        assert_eq!(moves, vec![Move::new(Pos::new(0), Pos::new(7))]);
    }

    #[test]
    fn test_sliding_order_follows_neighbors() {
        let board = Board::from_pieces(&[9, 20, 21, 22], &[]);
        let moves = generate_moves(&board, Player::White);
        let from_nine: Vec<_> = moves.iter().filter(|m| m.from == Pos::new(9)).map(|m| m.to).collect();
        assert_eq!(from_nine, vec![Pos::new(8), Pos::new(10), Pos::new(1), Pos::new(17)]);
    }

    #[test]
    fn test_flying_with_three_pieces() {
        let board = Board::from_pieces(&[0, 8, 16], &[1, 2, 3, 4]);
        let moves = generate_moves(&board, Player::White);
        // 3 pieces x 17 empty nodes
        assert_eq!(moves.len(), 51);
        assert_eq!(count_moves(&board, Player::White), 51);
        assert_eq!(moves[0], Move::new(Pos::new(0), Pos::new(5)));
    }

    #[test]
    fn test_count_matches_generation() {
        let board = Board::from_pieces(&[0, 1, 9, 12, 20], &[2, 10, 17, 5]);
        for player in [Player::White, Player::Black] {
            assert_eq!(count_moves(&board, player), generate_moves(&board, player).len() as i32);
        }
    }

    #[test]
    fn test_blocked_player() {
        // White corner pieces boxed in by black
        let board = Board::from_pieces(&[0, 2], &[1, 7, 3, 5, 9]);
        assert!(!has_any_move(&board, Player::White, false));
        assert!(has_any_move(&board, Player::White, true));
        assert!(generate_moves_with(&board, Player::White, false).is_empty());
    }

    #[test]
    fn test_legal_relocation() {
        let board = Board::from_pieces(&[0], &[1]);
        assert!(is_legal_relocation(&board, Player::White, Move::new(Pos::new(0), Pos::new(7)), false));
        assert!(!is_legal_relocation(&board, Player::White, Move::new(Pos::new(0), Pos::new(1)), false));
        assert!(!is_legal_relocation(&board, Player::White, Move::new(Pos::new(0), Pos::new(12)), false));
        assert!(is_legal_relocation(&board, Player::White, Move::new(Pos::new(0), Pos::new(12)), true));
    }
}
