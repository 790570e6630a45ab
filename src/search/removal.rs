//! Capture selection
//!
//! Picks which opponent piece to take after the AI closes a mill. Only
//! legally removable pieces are considered: mill members are skipped while
//! the opponent still has a piece outside every mill.

use crate::board::topology::mills_through;
use crate::board::{Board, Player, Pos};
use crate::eval::RemovalBonus;
use crate::rules::removable_positions;

/// How valuable `pos` is to its owner `victim`
#[must_use]
pub fn removal_score(board: &Board, pos: Pos, victim: Player) -> i32 {
    let mut score = 0;

    let on_strong_line = mills_through(pos).any(|line| {
        line.iter().filter(|&&p| board.is_owned_by(p, victim)).count() >= 2
    });
    if on_strong_line {
        score += RemovalBonus::LINE_PRESENCE;
    }
    if pos.is_strategic() {
        score += RemovalBonus::STRATEGIC;
    }
    score
}

/// Best opponent piece for `captor` to remove; ties go to the lowest index.
/// `None` only if the opponent has no removable piece at all.
pub fn select_piece_to_remove(board: &Board, captor: Player) -> Option<Pos> {
    let victim = captor.opponent();
    let mut best: Option<(Pos, i32)> = None;

    for pos in removable_positions(board, captor) {
        let score = removal_score(board, pos, victim);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}
