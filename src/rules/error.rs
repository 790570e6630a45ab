//! Rejection reasons for rule-engine actions

use crate::board::Pos;

/// Why an action was refused. The game state is untouched whenever one of
/// these is returned, so callers can simply re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("position {0} is already occupied")]
    OccupiedCell(Pos),

    #[error("action not allowed in the current phase")]
    WrongPhase,

    #[error("position {0} does not hold a piece of the current player")]
    NotOwnPiece(Pos),

    #[error("position {to} is not adjacent to {from}")]
    NotAdjacent { from: Pos, to: Pos },

    #[error("position {0} does not hold an opponent piece")]
    NotOpponentPiece(Pos),

    #[error("piece at {0} is protected by a mill")]
    ProtectedByMill(Pos),

    #[error("no capture is owed")]
    NoPendingRemoval,

    #[error("a captured piece must be removed first")]
    RemovalPending,

    #[error("position index {0} is off the board")]
    InvalidPosition(u8),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),
}

/// Result alias for rule-engine operations
pub type RuleResult<T> = Result<T, RuleError>;
