//! Turn driver for one game session
//!
//! A [`Session`] couples the rules engine with the AI and decides who may act.
//! Human input arrives as board clicks or direct actions; the AI turn is a
//! blocking call that holds the thinking flag until its action (and any
//! capture it earned) has gone through the rules engine.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::board::{Action, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{Game, GamePhase, MoveOutcome, RuleError};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::White }
    }
}

/// Why the session refused an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("the AI is thinking")]
    AiThinking,
    #[error("it is the AI's turn")]
    NotYourTurn,
    #[error("the AI found no action to play")]
    NoAiAction,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// What a board click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Own piece picked up, waiting for a destination
    Selected(Pos),
    /// Selected piece clicked again
    Deselected,
    /// A placement, move or capture was applied
    Played(MoveOutcome),
}

/// Move timer for tracking thinking time
#[derive(Debug, Clone)]
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// One game between two sides, at least one of them human
pub struct Session {
    game: Game,
    engine: AIEngine,
    mode: GameMode,
    thinking: bool,
    selected: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, AIEngine::new())
    }

    pub fn with_engine(mode: GameMode, engine: AIEngine) -> Self {
        info!(?mode, depth = engine.max_depth(), "new session");
        Self {
            game: Game::new(),
            engine,
            mode,
            thinking: false,
            selected: None,
            last_ai_result: None,
            move_timer: MoveTimer::default(),
        }
    }

    /// Start over with the same mode
    pub fn reset(&mut self) {
        info!(mode = ?self.mode, "session reset");
        self.game = Game::new();
        self.thinking = false;
        self.selected = None;
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
    }

    /// Start over in another mode
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// The side to act is played by the AI
    pub fn is_ai_turn(&self) -> bool {
        if self.game.is_over() {
            return false;
        }
        match self.mode {
            GameMode::PvE { human } => self.game.current_player() != human,
            GameMode::PvP => false,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && !self.is_ai_turn()
    }

    // =========================================================================
    // Human input
    // =========================================================================

    /// Interpret a click on `pos` according to the current state: capture
    /// while one is owed, placement while placing, otherwise pick up an own
    /// piece or drop the picked-up piece on the clicked node.
    pub fn click(&mut self, pos: Pos) -> SessionResult<ClickOutcome> {
        self.ensure_human_can_act()?;

        if self.game.pending_removal() {
            return self.remove(pos).map(ClickOutcome::Played);
        }
        if self.game.phase() == GamePhase::Placing {
            return self.place(pos).map(ClickOutcome::Played);
        }

        let mover = self.game.current_player();
        if self.game.board().is_owned_by(pos, mover) {
            if self.selected == Some(pos) {
                self.selected = None;
                return Ok(ClickOutcome::Deselected);
            }
            self.selected = Some(pos);
            return Ok(ClickOutcome::Selected(pos));
        }

        match self.selected {
            Some(from) => self.move_piece(from, pos).map(ClickOutcome::Played),
            None => Err(RuleError::NotOwnPiece(pos).into()),
        }
    }

    pub fn place(&mut self, pos: Pos) -> SessionResult<MoveOutcome> {
        self.ensure_human_can_act()?;
        let outcome = self.game.place_piece(pos)?;
        Ok(self.after_action(outcome))
    }

    pub fn move_piece(&mut self, from: Pos, to: Pos) -> SessionResult<MoveOutcome> {
        self.ensure_human_can_act()?;
        let outcome = self.game.move_piece(from, to)?;
        Ok(self.after_action(outcome))
    }

    pub fn remove(&mut self, pos: Pos) -> SessionResult<MoveOutcome> {
        self.ensure_human_can_act()?;
        let outcome = self.game.remove_piece(pos)?;
        Ok(self.after_action(outcome))
    }

    fn ensure_human_can_act(&self) -> SessionResult<()> {
        if self.thinking {
            return Err(SessionError::AiThinking);
        }
        if self.game.is_over() {
            return Err(RuleError::GameOver.into());
        }
        if self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }
        Ok(())
    }

    fn after_action(&mut self, outcome: MoveOutcome) -> MoveOutcome {
        self.selected = None;
        if !outcome.mill_formed {
            self.move_timer.stop();
            self.move_timer.start();
        }
        outcome
    }

    // =========================================================================
    // AI turn
    // =========================================================================

    /// Let the AI play its whole turn: one action plus the capture it earns.
    ///
    /// Blocks until the search has finished. The AI only proposes; every
    /// action still goes through the rules engine.
    pub fn play_ai_turn(&mut self) -> SessionResult<MoveOutcome> {
        let outcome = self.play_ai_step()?;
        if outcome.mill_formed {
            return self.play_ai_step();
        }
        Ok(outcome)
    }

    /// Play a single AI step: the owed capture if there is one, otherwise
    /// the placement or move. Lets a front end pace the capture separately.
    pub fn play_ai_step(&mut self) -> SessionResult<MoveOutcome> {
        if self.thinking {
            return Err(SessionError::AiThinking);
        }
        if self.game.is_over() {
            return Err(RuleError::GameOver.into());
        }
        if !self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }

        self.thinking = true;
        let started = Instant::now();
        let result = if self.game.pending_removal() {
            self.play_ai_removal()
        } else {
            self.play_ai_action()
        };
        self.move_timer.ai_thinking_time = Some(started.elapsed());
        self.thinking = false;
        result
    }

    fn play_ai_action(&mut self) -> SessionResult<MoveOutcome> {
        let board = self.game.board();
        let player = self.game.current_player();
        let result = self.engine.get_action_with_stats(&board, player, self.game.phase());
        let action = result.action;
        self.last_ai_result = Some(result);

        let Some(action) = action else {
            warn!(player = player.name(), "AI found no action");
            return Err(SessionError::NoAiAction);
        };

        let outcome = self.game.apply(action)?;
        debug!(player = player.name(), ?action, "AI action applied");
        Ok(self.after_action(outcome))
    }

    fn play_ai_removal(&mut self) -> SessionResult<MoveOutcome> {
        let player = self.game.current_player();
        let Some(pos) = self.engine.request_removal(&self.game.board(), player) else {
            warn!(player = player.name(), "AI found no piece to capture");
            return Err(SessionError::NoAiAction);
        };
        let outcome = self.game.remove_piece(pos)?;
        Ok(self.after_action(outcome))
    }

    /// Suggested action for the side to move, without playing it
    pub fn suggest(&mut self) -> Option<Action> {
        if self.thinking || self.game.is_over() || self.game.pending_removal() {
            return None;
        }
        let result = self
            .engine
            .get_action_with_stats(&self.game.board(), self.game.current_player(), self.game.phase());
        let action = result.action;
        self.last_ai_result = Some(result);
        action
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn p(idx: u8) -> Pos {
        Pos::new(idx)
    }

    fn session_from(board: Board, current: Player, mode: GameMode) -> Session {
        let mut session = Session::new(mode);
        session.game = Game::from_position(board, current, [0, 0]).unwrap();
        session
    }

    #[test]
    fn test_default_mode_is_human_white() {
        let session = Session::default();
        assert_eq!(session.mode(), GameMode::PvE { human: Player::White });
        assert!(session.is_human_turn());
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn test_human_cannot_act_on_ai_turn() {
        let mut session = Session::default();
        session.click(p(4)).unwrap();
        assert!(session.is_ai_turn());
        assert_eq!(session.click(p(5)), Err(SessionError::NotYourTurn));
        assert_eq!(session.place(p(5)), Err(SessionError::NotYourTurn));
    }

    #[test]
    fn test_thinking_flag_rejects_input() {
        let mut session = Session::new(GameMode::PvP);
        session.thinking = true;
        assert_eq!(session.click(p(0)), Err(SessionError::AiThinking));
        assert_eq!(session.move_piece(p(0), p(1)), Err(SessionError::AiThinking));
        assert_eq!(session.remove(p(0)), Err(SessionError::AiThinking));
        assert_eq!(session.game().board(), Board::new());
    }

    #[test]
    fn test_ai_answers_human_placement() {
        let mut session = Session::default();
        session.click(p(4)).unwrap();
        let outcome = session.play_ai_turn().unwrap();
        assert_eq!(outcome.next_player, Player::White);
        assert!(!session.is_thinking());
        assert_eq!(session.game().pieces_on_board(Player::Black), 1);
        assert_eq!(session.game().pieces_remaining(Player::Black), 8);
        assert!(session.last_ai_result.is_some());
    }

    #[test]
    fn test_ai_turn_rejected_on_human_turn() {
        let mut session = Session::default();
        assert_eq!(session.play_ai_turn(), Err(SessionError::NotYourTurn));
        let mut pvp = Session::new(GameMode::PvP);
        assert_eq!(pvp.play_ai_turn(), Err(SessionError::NotYourTurn));
    }

    #[test]
    fn test_click_selection_state_machine() {
        let board = Board::from_pieces(&[0, 9, 12, 20], &[2, 14, 18, 22]);
        let mut session = session_from(board, Player::White, GameMode::PvP);

        assert_eq!(session.click(p(5)), Err(SessionError::Rule(RuleError::NotOwnPiece(p(5)))));
        assert_eq!(session.click(p(0)), Ok(ClickOutcome::Selected(p(0))));
        assert_eq!(session.click(p(0)), Ok(ClickOutcome::Deselected));
        assert_eq!(session.click(p(0)), Ok(ClickOutcome::Selected(p(0))));
        assert_eq!(session.click(p(9)), Ok(ClickOutcome::Selected(p(9))));

        // Illegal destination keeps the selection
        assert!(matches!(
            session.click(p(5)),
            Err(SessionError::Rule(RuleError::NotAdjacent { .. }))
        ));
        assert_eq!(session.selected(), Some(p(9)));

        let outcome = session.click(p(8)).unwrap();
        assert!(matches!(outcome, ClickOutcome::Played(_)));
        assert_eq!(session.selected(), None);
        assert_eq!(session.game().current_player(), Player::Black);
    }

    #[test]
    fn test_click_captures_when_removal_owed() {
        let board = Board::from_pieces(&[0, 1, 3, 20], &[8, 12, 14, 22]);
        let mut session = session_from(board, Player::White, GameMode::PvP);
        session.click(p(3)).unwrap();
        let outcome = session.click(p(2)).unwrap();
        assert!(matches!(outcome, ClickOutcome::Played(o) if o.mill_formed));

        let outcome = session.click(p(8)).unwrap();
        assert!(matches!(outcome, ClickOutcome::Played(o) if !o.mill_formed));
        assert_eq!(session.game().pieces_on_board(Player::Black), 3);
    }

    #[test]
    fn test_ai_resolves_its_own_capture() {
        // Black can close 16-17-18 while placing; White has no threats
        let board = Board::from_pieces(&[0, 4, 12], &[16, 17]);
        let mut session = Session::new(GameMode::default());
        session.game = Game::from_position(board, Player::Black, [6, 7]).unwrap();
        assert!(session.is_ai_turn());

        let outcome = session.play_ai_turn().unwrap();
        assert!(session.game().board().is_owned_by(p(18), Player::Black));
        assert!(!session.game().pending_removal());
        assert_eq!(outcome.next_player, Player::White);
        // Nothing is protected and nothing scores, so the lowest index goes
        assert!(session.game().board().is_empty(p(0)));
        assert_eq!(session.game().pieces_on_board(Player::White), 2);
    }

    #[test]
    fn test_ai_step_leaves_capture_for_next_step() {
        let board = Board::from_pieces(&[0, 4, 12], &[16, 17]);
        let mut session = Session::new(GameMode::default());
        session.game = Game::from_position(board, Player::Black, [6, 7]).unwrap();

        let outcome = session.play_ai_step().unwrap();
        assert!(outcome.mill_formed);
        assert!(session.is_ai_turn());
        assert_eq!(session.click(p(5)), Err(SessionError::NotYourTurn));

        let outcome = session.play_ai_step().unwrap();
        assert!(!outcome.mill_formed);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut session = Session::default();
        session.click(p(4)).unwrap();
        session.play_ai_turn().unwrap();
        session.reset();
        assert_eq!(session.game().board(), Board::new());
        assert!(session.last_ai_result.is_none());
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_actions_after_game_over() {
        let board = Board::from_pieces(&[9, 7, 3, 12, 20, 17, 23, 19], &[0, 2, 16, 18]);
        let mut session = session_from(board, Player::White, GameMode::PvP);
        session.move_piece(p(9), p(1)).unwrap();
        assert!(session.game().is_over());
        assert_eq!(session.click(p(3)), Err(SessionError::Rule(RuleError::GameOver)));
        assert!(!session.is_ai_turn());
    }
}
