//! Mill queries
//!
//! Mill detection is a static check of current board contents: a node
//! "forms a mill" whenever one of its two lines is filled by the node's
//! owner, regardless of whether that line existed a ply earlier. Opening a
//! mill and closing it again therefore grants another capture.

use crate::board::topology::{mill_lines, mills_through};
use crate::board::{Board, Player, Pos};

/// Check whether the piece on `pos` completes a line of its owner.
/// Empty nodes never form a mill.
#[must_use]
pub fn forms_mill_at(board: &Board, pos: Pos) -> bool {
    match board.get(pos) {
        Some(owner) => forms_mill_for(board, pos, owner),
        None => false,
    }
}

/// Check whether some line through `pos` is fully held by `player`
#[must_use]
pub fn forms_mill_for(board: &Board, pos: Pos, player: Player) -> bool {
    mills_through(pos).any(|line| line.iter().all(|&p| board.is_owned_by(p, player)))
}

/// Completed lines through `pos` (for highlighting)
pub fn completed_mills_at(board: &Board, pos: Pos) -> Vec<[Pos; 3]> {
    let Some(owner) = board.get(pos) else {
        return Vec::new();
    };
    mills_through(pos)
        .filter(|line| line.iter().all(|&p| board.is_owned_by(p, owner)))
        .collect()
}

/// Whether `player` has at least one piece outside every completed mill
#[must_use]
pub fn has_non_mill_pieces(board: &Board, player: Player) -> bool {
    board.positions_of(player).any(|p| !forms_mill_at(board, p))
}

/// A piece in a mill may only be captured when its owner has nothing else
#[must_use]
pub fn is_protected(board: &Board, pos: Pos) -> bool {
    match board.get(pos) {
        Some(owner) => forms_mill_at(board, pos) && has_non_mill_pieces(board, owner),
        None => false,
    }
}

/// Opponent pieces that may legally be captured by `captor`
pub fn removable_positions(board: &Board, captor: Player) -> impl Iterator<Item = Pos> + '_ {
    let victim = captor.opponent();
    let loose_exists = has_non_mill_pieces(board, victim);
    board
        .positions_of(victim)
        .filter(move |&p| !(loose_exists && forms_mill_at(board, p)))
}

/// Number of completed lines held by `player`
pub fn count_mills(board: &Board, player: Player) -> i32 {
    mill_lines()
        .filter(|line| line.iter().all(|&p| board.is_owned_by(p, player)))
        .count() as i32
}

/// Number of lines with exactly two of `player`'s pieces and one empty node
pub fn count_potential_mills(board: &Board, player: Player) -> i32 {
    mill_lines()
        .filter(|line| is_two_and_empty(board, line, player))
        .count() as i32
}

/// Line holds two of `player`'s pieces and one empty node
#[inline]
pub fn is_two_and_empty(board: &Board, line: &[Pos; 3], player: Player) -> bool {
    let own = line.iter().filter(|&&p| board.is_owned_by(p, player)).count();
    let empty = line.iter().filter(|&&p| board.is_empty(p)).count();
    own == 2 && empty == 1
}
