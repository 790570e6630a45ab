//! Search module for the Nine Men's Morris AI
//!
//! Contains:
//! - One-ply placement scoring for the placing phase
//! - Minimax with alpha-beta pruning for moving and flying
//! - Capture selection after the AI closes a mill

pub mod alphabeta;
pub mod placement;
pub mod removal;

pub use alphabeta::{SearchResult, SearchStats, Searcher, SEARCH_DEPTH};
pub use placement::{blocks_opponent_mill, find_best_placement, score_placement, PlacementChoice};
pub use removal::{removal_score, select_piece_to_remove};
