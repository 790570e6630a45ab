//! Nine Men's Morris rules engine and AI
//!
//! Two players alternately place nine pieces each on a 24-node board, then
//! move them along the board lines. Three own pieces on one of the 16 lines
//! form a mill and let the mover capture an opponent piece:
//! - Placing: pieces go on any empty node
//! - Moving: pieces slide to an adjacent empty node
//! - Flying: a player down to three pieces may jump to any empty node
//! - A player loses when reduced to two pieces or left without a move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board topology and snapshots
//! - [`rules`]: Game rules (mills, move generation, the authoritative game state)
//! - [`eval`]: Position evaluation
//! - [`search`]: Placement scoring, alpha-beta search, capture selection
//! - [`engine`]: Main AI engine integrating all components
//! - [`session`]: Turn driver pairing the rules engine with the AI
//!
//! # Quick Start
//!
//! ```
//! use mill::{AIEngine, Game, Player, Pos};
//!
//! let mut game = Game::new();
//! let mut engine = AIEngine::new();
//!
//! // Human opens as White
//! game.place_piece(Pos::new(4)).unwrap();
//!
//! // AI responds as Black
//! let action = engine
//!     .request_action(&game.board(), Player::Black, game.phase())
//!     .unwrap();
//! let outcome = game.apply(action).unwrap();
//! assert_eq!(outcome.next_player, Player::White);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Action, Board, Player, Pos, NUM_POSITIONS, PIECES_PER_PLAYER};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use rules::{Game, GamePhase, MoveOutcome, RuleError, WinReason, Winner};
pub use session::{ClickOutcome, GameMode, Session, SessionError};
