//! Authoritative game state and turn flow
//!
//! `Game` owns the live board and is the only place where pieces move for
//! real. Every action is validated before any state changes, so a returned
//! [`RuleError`] always leaves the game exactly as it was.

use tracing::{debug, info};

use crate::board::{Action, Board, Player, Pos, PIECES_PER_PLAYER};

use super::error::{RuleError, RuleResult};
use super::mill::{completed_mills_at, forms_mill_at, is_protected, removable_positions};
use super::movegen::{generate_moves_with, has_any_move, is_legal_relocation, Move, FLYING_PIECE_COUNT};

/// Game phase.
///
/// The field is shared by both players and recomputed for whoever is about
/// to move on each turn switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Placing,
    Moving,
    Flying,
}

/// How the game was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// Loser was captured down to two pieces
    ReducedToTwo,
    /// Loser had no legal move on their turn
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    pub player: Player,
    pub reason: WinReason,
}

/// What an accepted action changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// A mill was closed and the mover now owes a capture
    pub mill_formed: bool,
    /// Phase after the action
    pub phase: GamePhase,
    /// Phase differs from before the action
    pub phase_changed: bool,
    /// Player to act next (the mover again while a capture is owed)
    pub next_player: Player,
    /// Set when this action ended the game
    pub winner: Option<Winner>,
}

/// Rules engine
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Player,
    phase: GamePhase,
    pieces_to_place: [u8; 2],
    pieces_on_board: [u8; 2],
    pending_removal: bool,
    winner: Option<Winner>,
    last_move: Option<Action>,
}

impl Game {
    /// New game, White to place first
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::White,
            phase: GamePhase::Placing,
            pieces_to_place: [PIECES_PER_PLAYER; 2],
            pieces_on_board: [0; 2],
            pending_removal: false,
            winner: None,
            last_move: None,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// On-board counts are taken from `board`. The phase is Placing while
    /// anyone still has pieces in hand, otherwise it is derived for
    /// `current` the same way a turn switch would. A Placing setup needs
    /// the player to move to hold at least one piece.
    pub fn from_position(board: Board, current: Player, pieces_to_place: [u8; 2]) -> RuleResult<Self> {
        let mut pieces_on_board = [0u8; 2];
        for player in [Player::White, Player::Black] {
            let count = board.count(player);
            if count + pieces_to_place[player.index()] as usize > PIECES_PER_PLAYER as usize {
                return Err(RuleError::InvalidSetup("more than nine pieces for one player"));
            }
            pieces_on_board[player.index()] = count as u8;
        }

        let mut game = Self {
            board,
            current,
            phase: GamePhase::Placing,
            pieces_to_place,
            pieces_on_board,
            pending_removal: false,
            winner: None,
            last_move: None,
        };
        if pieces_to_place == [0, 0] {
            game.phase = game.phase_for(current);
        } else if pieces_to_place[current.index()] == 0 {
            return Err(RuleError::InvalidSetup("player to move has no piece to place"));
        }
        Ok(game)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Independent copy of the board
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Pieces `player` still has in hand
    #[inline]
    pub fn pieces_remaining(&self, player: Player) -> u8 {
        self.pieces_to_place[player.index()]
    }

    #[inline]
    pub fn pieces_on_board(&self, player: Player) -> u8 {
        self.pieces_on_board[player.index()]
    }

    #[inline]
    pub fn pending_removal(&self) -> bool {
        self.pending_removal
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Action> {
        self.last_move
    }

    /// Completed mills through `pos`, for highlighting
    pub fn mills_at(&self, pos: Pos) -> Vec<[Pos; 3]> {
        completed_mills_at(&self.board, pos)
    }

    /// Actions the current player may take (empty while a capture is owed
    /// or after the game ended)
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() || self.pending_removal {
            return Vec::new();
        }
        match self.phase {
            GamePhase::Placing if self.pieces_remaining(self.current) == 0 => Vec::new(),
            GamePhase::Placing => self
                .board
                .empty_positions()
                .map(|position| Action::Placement { position })
                .collect(),
            GamePhase::Moving | GamePhase::Flying => {
                generate_moves_with(&self.board, self.current, self.phase == GamePhase::Flying)
                    .into_iter()
                    .map(Action::from)
                    .collect()
            }
        }
    }

    /// Opponent pieces that may be captured right now
    pub fn removable_positions(&self) -> Vec<Pos> {
        if !self.pending_removal || self.is_over() {
            return Vec::new();
        }
        removable_positions(&self.board, self.current).collect()
    }

    /// Position from a raw index, for callers holding untrusted input
    pub fn pos(idx: u8) -> RuleResult<Pos> {
        Pos::try_new(idx).ok_or(RuleError::InvalidPosition(idx))
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply any [`Action`]
    pub fn apply(&mut self, action: Action) -> RuleResult<MoveOutcome> {
        match action {
            Action::Placement { position } => self.place_piece(position),
            Action::Relocation { from, to } => self.move_piece(from, to),
        }
    }

    /// Put a piece from hand on an empty node
    pub fn place_piece(&mut self, pos: Pos) -> RuleResult<MoveOutcome> {
        self.ensure_turn_open()?;
        if self.phase != GamePhase::Placing || self.pieces_remaining(self.current) == 0 {
            return Err(RuleError::WrongPhase);
        }
        if !self.board.is_empty(pos) {
            return Err(RuleError::OccupiedCell(pos));
        }

        let before = self.phase;
        let player = self.current;
        self.board.place(pos, player);
        self.pieces_to_place[player.index()] -= 1;
        self.pieces_on_board[player.index()] += 1;
        self.last_move = Some(Action::Placement { position: pos });
        debug!(player = player.name(), %pos, "placed piece");

        if self.pieces_to_place == [0, 0] {
            self.phase = GamePhase::Moving;
            debug!("placing finished, moving phase begins");
        }

        let mill_formed = forms_mill_at(&self.board, pos);
        Ok(self.finish_action(before, mill_formed))
    }

    /// Relocate an own piece
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> RuleResult<MoveOutcome> {
        self.ensure_turn_open()?;
        if self.phase == GamePhase::Placing {
            return Err(RuleError::WrongPhase);
        }
        if !self.board.is_owned_by(from, self.current) {
            return Err(RuleError::NotOwnPiece(from));
        }
        if !self.board.is_empty(to) {
            return Err(RuleError::OccupiedCell(to));
        }
        let flying = self.phase == GamePhase::Flying;
        if !is_legal_relocation(&self.board, self.current, Move::new(from, to), flying) {
            return Err(RuleError::NotAdjacent { from, to });
        }

        let before = self.phase;
        self.board.relocate(from, to);
        self.last_move = Some(Action::Relocation { from, to });
        debug!(player = self.current.name(), %from, %to, flying, "moved piece");

        let mill_formed = forms_mill_at(&self.board, to);
        Ok(self.finish_action(before, mill_formed))
    }

    /// Capture an opponent piece after closing a mill
    pub fn remove_piece(&mut self, pos: Pos) -> RuleResult<MoveOutcome> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if !self.pending_removal {
            return Err(RuleError::NoPendingRemoval);
        }
        let victim = self.current.opponent();
        if !self.board.is_owned_by(pos, victim) {
            return Err(RuleError::NotOpponentPiece(pos));
        }
        if is_protected(&self.board, pos) {
            return Err(RuleError::ProtectedByMill(pos));
        }

        let before = self.phase;
        self.board.remove(pos);
        self.pieces_on_board[victim.index()] -= 1;
        self.pending_removal = false;
        info!(captor = self.current.name(), %pos, "captured piece");

        if self.pieces_on_board(victim) < FLYING_PIECE_COUNT as u8 && self.pieces_remaining(victim) == 0 {
            let winner = Winner {
                player: self.current,
                reason: WinReason::ReducedToTwo,
            };
            info!(winner = winner.player.name(), "game over: opponent reduced to two pieces");
            self.winner = Some(winner);
        } else {
            self.switch_player();
        }

        Ok(MoveOutcome {
            mill_formed: false,
            phase: self.phase,
            phase_changed: self.phase != before,
            next_player: self.current,
            winner: self.winner,
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_turn_open(&self) -> RuleResult<()> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if self.pending_removal {
            return Err(RuleError::RemovalPending);
        }
        Ok(())
    }

    /// Either hold the turn for a capture or pass it on
    fn finish_action(&mut self, before: GamePhase, mill_formed: bool) -> MoveOutcome {
        if mill_formed {
            self.pending_removal = true;
            info!(player = self.current.name(), "mill formed, capture owed");
        } else {
            self.switch_player();
        }
        MoveOutcome {
            mill_formed,
            phase: self.phase,
            phase_changed: self.phase != before,
            next_player: self.current,
            winner: self.winner,
        }
    }

    /// Phase label for `player` once placing is over
    fn phase_for(&self, player: Player) -> GamePhase {
        if self.pieces_on_board(player) == FLYING_PIECE_COUNT as u8 && self.pieces_remaining(player) == 0 {
            GamePhase::Flying
        } else {
            GamePhase::Moving
        }
    }

    fn switch_player(&mut self) {
        self.current = self.current.opponent();
        if self.phase == GamePhase::Placing {
            return;
        }

        let phase = self.phase_for(self.current);
        if phase != self.phase {
            debug!(player = self.current.name(), ?phase, "phase changed");
            self.phase = phase;
        }

        if !has_any_move(&self.board, self.current, self.phase == GamePhase::Flying) {
            let winner = Winner {
                player: self.current.opponent(),
                reason: WinReason::Blocked,
            };
            info!(winner = winner.player.name(), "game over: opponent has no legal move");
            self.winner = Some(winner);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
