//! Main AI engine integrating the search components
//!
//! The engine picks the search by phase:
//!
//! 1. **Placing**: one-ply placement scoring with mill, strategic and block bonuses
//! 2. **Moving / Flying**: fixed-depth minimax with alpha-beta pruning
//!
//! and chooses which opponent piece to capture after a mill. It only ever
//! sees board snapshots; the caller validates and applies the returned
//! action through the rules engine.
//!
//! # Example
//!
//! ```
//! use mill::{AIEngine, Board, GamePhase, Player};
//!
//! let mut engine = AIEngine::new();
//! let board = Board::from_pieces(&[4], &[]);
//!
//! let result = engine.get_action_with_stats(&board, Player::Black, GamePhase::Placing);
//! println!("Best action: {:?}", result.action);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Action, Board, Player, Pos};
use crate::rules::GamePhase;
use crate::search::{find_best_placement, select_piece_to_remove, Searcher, SEARCH_DEPTH};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// One-ply placement scoring
    Placement,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

/// Result of an action search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best action found, if any
    pub action: Option<Action>,
    /// Score of the chosen action from the AI's perspective
    pub score: i32,
    /// Which search produced the action
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions scored (placement) or tree nodes visited (alpha-beta)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn none(search_type: SearchType, time_ms: u64, nodes: u64) -> Self {
        Self {
            action: None,
            score: 0,
            search_type,
            time_ms,
            nodes,
        }
    }
}

/// Main AI engine.
///
/// # Example
///
/// ```
/// use mill::{AIEngine, Board, GamePhase, Player};
///
/// let mut engine = AIEngine::new();
/// let board = Board::from_pieces(&[0, 2, 4, 6], &[9, 11, 13, 15]);
/// if let Some(action) = engine.request_action(&board, Player::Black, GamePhase::Moving) {
///     println!("Play {:?}", action);
/// }
/// ```
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    /// Lookahead depth for the moving phases
    max_depth: u8,
}

impl AIEngine {
    /// Engine searching [`SEARCH_DEPTH`] plies
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// Engine with an explicit lookahead depth
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Best action for `player`, or `None` if there is nothing to play
    pub fn request_action(&mut self, board: &Board, player: Player, phase: GamePhase) -> Option<Action> {
        self.get_action_with_stats(board, player, phase).action
    }

    /// Best action for `player` together with search statistics
    pub fn get_action_with_stats(&mut self, board: &Board, player: Player, phase: GamePhase) -> MoveResult {
        let start = Instant::now();

        let result = match phase {
            GamePhase::Placing => match find_best_placement(board, player) {
                Some(choice) => MoveResult {
                    action: Some(Action::Placement {
                        position: choice.position,
                    }),
                    score: choice.score,
                    search_type: SearchType::Placement,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: u64::from(choice.candidates),
                },
                None => MoveResult::none(SearchType::Placement, start.elapsed().as_millis() as u64, 0),
            },
            GamePhase::Moving | GamePhase::Flying => {
                let search = self.searcher.search(board, player, self.max_depth);
                let time_ms = start.elapsed().as_millis() as u64;
                match search.best_move {
                    Some(mv) => MoveResult {
                        action: Some(mv.into()),
                        score: search.score,
                        search_type: SearchType::AlphaBeta,
                        time_ms,
                        nodes: search.nodes,
                    },
                    None => MoveResult::none(SearchType::AlphaBeta, time_ms, search.nodes),
                }
            }
        };

        debug!(
            player = player.name(),
            ?phase,
            action = ?result.action,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "ai search finished"
        );
        result
    }

    /// Opponent piece `player` should capture
    pub fn request_removal(&self, board: &Board, player: Player) -> Option<Pos> {
        let choice = select_piece_to_remove(board, player);
        debug!(player = player.name(), removal = ?choice, "ai removal chosen");
        choice
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
