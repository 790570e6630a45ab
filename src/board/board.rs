//! Board contents: who holds each of the 24 nodes

use super::{Player, Pos, NUM_POSITIONS};

/// Board snapshot.
///
/// Plain value type: copying it yields an independent board, which is how
/// the search works on positions without touching the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; NUM_POSITIONS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_POSITIONS],
        }
    }

    /// Build a board from lists of node indices, mostly for setting up positions
    pub fn from_pieces(white: &[u8], black: &[u8]) -> Self {
        let mut board = Self::new();
        for &idx in white {
            board.place(Pos::new(idx), Player::White);
        }
        for &idx in black {
            board.place(Pos::new(idx), Player::Black);
        }
        board
    }

    /// Get occupant of a node
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.to_index()]
    }

    /// Check if node is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Check if node holds `player`
    #[inline]
    pub fn is_owned_by(&self, pos: Pos, player: Player) -> bool {
        self.cells[pos.to_index()] == Some(player)
    }

    /// Put a piece on a node (no rule checks)
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.cells[pos.to_index()] = Some(player);
    }

    /// Clear a node
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    /// Move whatever is on `from` to `to` (no rule checks)
    #[inline]
    pub fn relocate(&mut self, from: Pos, to: Pos) {
        self.cells[to.to_index()] = self.cells[from.to_index()];
        self.cells[from.to_index()] = None;
    }

    /// Copy of the board with a relocation applied
    #[must_use]
    pub fn with_relocation(&self, from: Pos, to: Pos) -> Board {
        let mut next = *self;
        next.relocate(from, to);
        next
    }

    /// Copy of the board with a placement applied
    #[must_use]
    pub fn with_placement(&self, pos: Pos, player: Player) -> Board {
        let mut next = *self;
        next.place(pos, player);
        next
    }

    /// Number of pieces `player` has on the board
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty nodes in ascending order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&p| self.is_empty(p))
    }

    /// Nodes held by `player` in ascending order
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&p| self.is_owned_by(p, player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
