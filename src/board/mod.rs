//! Board representation for Nine Men's Morris

pub mod board;
pub mod topology;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use topology::{MILLS, STRATEGIC_POSITIONS};

/// Number of nodes on the board (three squares of eight)
pub const NUM_POSITIONS: usize = 24;

/// Pieces each player starts with in hand
pub const PIECES_PER_PLAYER: u8 = 9;

/// Player identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Slot for per-player arrays
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

/// A node of the board graph, 0..24.
///
/// Nodes 0-7 are the outer square, 8-15 the middle square and 16-23 the
/// inner square, each numbered clockwise from its top-left corner. Odd
/// indices are mid-edge nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(u8);

impl Pos {
    /// Create a position. Panics in debug builds when out of range;
    /// use [`Pos::try_new`] for untrusted input.
    #[inline]
    pub const fn new(idx: u8) -> Self {
        debug_assert!((idx as usize) < NUM_POSITIONS);
        Self(idx)
    }

    /// Checked constructor for caller-supplied indices
    #[inline]
    pub fn try_new(idx: u8) -> Option<Self> {
        ((idx as usize) < NUM_POSITIONS).then_some(Self(idx))
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self::new(idx as u8)
    }

    /// All positions in ascending order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..NUM_POSITIONS as u8).map(Pos)
    }

    /// Mid-edge nodes carry 3-4 connections instead of 2
    #[inline]
    pub fn is_strategic(self) -> bool {
        self.0 % 2 == 1
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move by the side to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Put a piece from hand onto an empty node
    Placement { position: Pos },
    /// Slide (or fly) an own piece to an empty node
    Relocation { from: Pos, to: Pos },
}
