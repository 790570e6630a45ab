//! Scoring weights for Nine Men's Morris evaluation
//!
//! All heuristic terms are differentials (own minus opponent) multiplied by
//! one of these weights.

/// Weights of the static evaluation
pub struct EvalWeight;

impl EvalWeight {
    /// Per piece on the board
    pub const PIECE: i32 = 50;
    /// Per completed mill
    pub const MILL: i32 = 100;
    /// Per line with two own pieces and one empty node
    pub const POTENTIAL_MILL: i32 = 30;
    /// Per available relocation
    pub const MOBILITY: i32 = 10;
    /// Per piece on a mid-edge node
    pub const STRATEGIC: i32 = 15;
}

/// Bonuses added on top of the evaluation when scoring a placement
pub struct PlacementBonus;

impl PlacementBonus {
    /// Placement closes a mill
    pub const FORMS_MILL: i32 = 100;
    /// Placement lands on a mid-edge node
    pub const STRATEGIC: i32 = 10;
    /// Placement fills the empty node of an opponent two-of-three line
    pub const BLOCKS_MILL: i32 = 50;
}

/// Scores used to rank capture candidates
pub struct RemovalBonus;

impl RemovalBonus {
    /// Once, if any line through the piece holds two or more of its owner's pieces
    pub const LINE_PRESENCE: i32 = 50;
    /// Piece sits on a mid-edge node
    pub const STRATEGIC: i32 = 20;
}

/// Score for a side that has no legal relocation inside the search
pub const NO_MOVES_SCORE: i32 = 10_000;
