//! Minimax search with alpha-beta pruning
//!
//! This module implements the lookahead used once placing is over. One ply
//! is a single relocation by one side; captures are not simulated inside
//! the tree, so a mill-closing move is scored on the post-move board as is.
//!
//! # Example
//!
//! ```
//! use mill::board::{Board, Player};
//! use mill::search::Searcher;
//!
//! let board = Board::from_pieces(&[0, 2, 4, 6], &[9, 11, 13, 15]);
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Player::Black, 3);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Player};
use crate::eval::{evaluate, NO_MOVES_SCORE};
use crate::rules::{generate_moves, Move};

/// Lookahead depth in plies
pub const SEARCH_DEPTH: u8 = 3;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Sibling loops cut short because `beta <= alpha`
    pub cutoffs: u64,
    /// Static evaluations at the horizon
    pub leaf_evals: u64,
    /// Nodes where the side to move had no relocation
    pub stalemates: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move for the searching side, `None` at depth 0 or with no moves
    pub best_move: Option<Move>,
    /// Minimax value from the searching side's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Fixed-depth minimax searcher.
///
/// Scores are always from the perspective of the player the search was
/// started for (the maximizing side). Move order, and therefore which of
/// several equally scored moves is returned, is the generation order of
/// [`generate_moves`].
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alpha-beta search for `player` to `depth` plies
    pub fn search(&mut self, board: &Board, player: Player, depth: u8) -> SearchResult {
        self.reset();
        let (score, best_move) = self.alpha_beta(board, player, depth, i32::MIN, i32::MAX, true);
        self.finish(best_move, score, depth)
    }

    /// Full minimax without pruning. Visits every node; meant as a reference
    /// for checking the pruned search.
    pub fn search_exhaustive(&mut self, board: &Board, player: Player, depth: u8) -> SearchResult {
        self.reset();
        let (score, best_move) = self.minimax(board, player, depth, true);
        self.finish(best_move, score, depth)
    }

    fn reset(&mut self) {
        self.nodes = 0;
        self.stats = SearchStats::default();
    }

    fn finish(&mut self, best_move: Option<Move>, score: i32, depth: u8) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: std::mem::take(&mut self.stats),
        }
    }

    /// Side to move at a node
    #[inline]
    fn mover(ai: Player, maximizing: bool) -> Player {
        if maximizing {
            ai
        } else {
            ai.opponent()
        }
    }

    /// Score for a node where the mover cannot move
    #[inline]
    fn stalemate_score(maximizing: bool) -> i32 {
        if maximizing {
            -NO_MOVES_SCORE
        } else {
            NO_MOVES_SCORE
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        ai: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (evaluate(board, ai), None);
        }

        let moves = generate_moves(board, Self::mover(ai, maximizing));
        if moves.is_empty() {
            self.stats.stalemates += 1;
            return (Self::stalemate_score(maximizing), None);
        }

        let mut best_move = None;
        if maximizing {
            let mut best_score = i32::MIN;
            for mv in moves {
                let child = board.with_relocation(mv.from, mv.to);
                let (score, _) = self.alpha_beta(&child, ai, depth - 1, alpha, beta, false);
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = i32::MAX;
            for mv in moves {
                let child = board.with_relocation(mv.from, mv.to);
                let (score, _) = self.alpha_beta(&child, ai, depth - 1, alpha, beta, true);
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best_score, best_move)
        }
    }

    fn minimax(&mut self, board: &Board, ai: Player, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (evaluate(board, ai), None);
        }

        let moves = generate_moves(board, Self::mover(ai, maximizing));
        if moves.is_empty() {
            self.stats.stalemates += 1;
            return (Self::stalemate_score(maximizing), None);
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        for mv in moves {
            let child = board.with_relocation(mv.from, mv.to);
            let (score, _) = self.minimax(&child, ai, depth - 1, !maximizing);
            let better = if maximizing { score > best_score } else { score < best_score };
            if better {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    }
}
