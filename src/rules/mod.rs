//! Game rules for Nine Men's Morris
//!
//! This module implements the rule set:
//! - Mill detection and capture protection
//! - Phase-aware move generation (sliding and flying)
//! - The authoritative game state machine (placing, moving, flying, captures, wins)

pub mod error;
pub mod game;
pub mod mill;
pub mod movegen;

// Re-exports for convenient access
pub use error::{RuleError, RuleResult};
pub use game::{Game, GamePhase, MoveOutcome, WinReason, Winner};
pub use mill::{
    completed_mills_at, count_mills, count_potential_mills, forms_mill_at, forms_mill_for,
    has_non_mill_pieces, is_protected, is_two_and_empty, removable_positions,
};
pub use movegen::{
    count_moves, generate_moves, generate_moves_with, has_any_move, is_legal_relocation, Move,
    FLYING_PIECE_COUNT,
};
