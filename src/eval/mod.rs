//! Evaluation module for Nine Men's Morris positions
//!
//! The evaluation is a weighted sum of five differentials:
//! - Pieces on the board
//! - Completed mills
//! - Potential mills (two pieces and an empty node on a line)
//! - Mobility
//! - Occupied mid-edge nodes

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_terms, EvalTerms};
pub use weights::{EvalWeight, PlacementBonus, RemovalBonus, NO_MOVES_SCORE};
