//! Whole games driven through the public API

use mill::rules::{has_any_move, FLYING_PIECE_COUNT};
use mill::search::{find_best_placement, score_placement, select_piece_to_remove};
use mill::{
    AIEngine, Action, Board, Game, GameMode, GamePhase, Player, Pos, RuleError, Session, WinReason,
    PIECES_PER_PLAYER,
};

fn p(idx: u8) -> Pos {
    Pos::new(idx)
}

fn check_invariants(game: &Game) {
    let board = game.board();
    for player in [Player::White, Player::Black] {
        assert!(game.pieces_on_board(player) + game.pieces_remaining(player) <= PIECES_PER_PLAYER);
        assert_eq!(board.count(player), game.pieces_on_board(player) as usize);
    }
    if game.phase() == GamePhase::Flying {
        assert_eq!(game.pieces_on_board(game.current_player()), 3);
    }
}

/// Play engine against engine, returning every applied action and capture
fn self_play(max_plies: usize) -> (Game, Vec<(Option<Action>, Option<Pos>)>) {
    let mut game = Game::new();
    let mut engine = AIEngine::new();
    let mut log = Vec::new();

    for _ in 0..max_plies {
        if game.is_over() {
            break;
        }
        let player = game.current_player();
        if game.pending_removal() {
            let pos = engine
                .request_removal(&game.board(), player)
                .expect("a capture is always available");
            game.remove_piece(pos).unwrap();
            log.push((None, Some(pos)));
        } else {
            let action = engine
                .request_action(&game.board(), player, game.phase())
                .expect("side to move has an action");
            game.apply(action).unwrap();
            log.push((Some(action), None));
        }
        check_invariants(&game);
    }
    (game, log)
}

#[test]
fn nine_placements_each_then_moving() {
    // White: 0 2 4 6 9 11 13 15 16  Black: 1 3 5 7 8 10 12 14 17
    let order = [0, 1, 2, 3, 4, 5, 6, 7, 9, 8, 11, 10, 13, 12, 15, 14, 16, 17];
    let mut game = Game::new();
    for idx in order {
        let outcome = game.place_piece(p(idx)).unwrap();
        assert!(!outcome.mill_formed);
        check_invariants(&game);
    }

    assert_eq!(game.pieces_remaining(Player::White), 0);
    assert_eq!(game.pieces_remaining(Player::Black), 0);
    assert_eq!(game.phase(), GamePhase::Moving);

    let err = game.place_piece(p(20)).unwrap_err();
    assert!(matches!(err, RuleError::WrongPhase | RuleError::OccupiedCell(_)));
}

#[test]
fn engine_self_play_stays_legal() {
    let (game, log) = self_play(300);
    assert!(!log.is_empty());
    if let Some(winner) = game.winner() {
        let loser = winner.player.opponent();
        match winner.reason {
            WinReason::ReducedToTwo => assert!(game.pieces_on_board(loser) < FLYING_PIECE_COUNT as u8),
            WinReason::Blocked => {
                let flying = game.pieces_on_board(loser) == FLYING_PIECE_COUNT as u8;
                assert!(!has_any_move(&game.board(), loser, flying));
            }
        }
    }
}

#[test]
fn engine_self_play_is_deterministic() {
    let (_, first) = self_play(120);
    let (_, second) = self_play(120);
    assert_eq!(first, second);
}

#[test]
fn session_human_versus_ai() {
    let mut session = Session::new(GameMode::default());

    for _ in 0..300 {
        let game = session.game();
        if game.is_over() {
            break;
        }
        if session.is_ai_turn() {
            session.play_ai_turn().unwrap();
            assert!(!session.is_thinking());
            continue;
        }

        // The human takes the first thing on offer
        if game.pending_removal() {
            let pos = game.removable_positions()[0];
            session.remove(pos).unwrap();
        } else {
            match game.legal_actions()[0] {
                Action::Placement { position } => session.place(position).map(|_| ()).unwrap(),
                Action::Relocation { from, to } => session.move_piece(from, to).map(|_| ()).unwrap(),
            }
        }
        check_invariants(session.game());
    }
}

#[test]
fn placement_prefers_mid_edge_over_corner() {
    let board = Board::from_pieces(&[4], &[]);
    assert!(score_placement(&board, p(1), Player::Black) > score_placement(&board, p(0), Player::Black));
    let choice = find_best_placement(&board, Player::Black).unwrap();
    assert!(choice.position.is_strategic());
}

#[test]
fn completing_a_line_sets_pending_removal() {
    let board = Board::from_pieces(&[0, 1], &[20]);
    let mut game = Game::from_position(board, Player::White, [7, 8]).unwrap();
    let outcome = game.place_piece(p(2)).unwrap();
    assert!(outcome.mill_formed);
    assert!(game.pending_removal());
    assert_eq!(game.current_player(), Player::White);
    assert_eq!(game.removable_positions(), vec![p(20)]);
}

#[test]
fn completing_a_line_on_an_empty_opponent_side_still_owes_a_capture() {
    let board = Board::from_pieces(&[0, 1], &[]);
    let mut game = Game::from_position(board, Player::White, [7, 9]).unwrap();
    let outcome = game.place_piece(p(2)).unwrap();
    assert!(mill::rules::forms_mill_at(&game.board(), p(2)));
    assert!(outcome.mill_formed);
    assert!(game.pending_removal());
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn removal_picks_the_loose_piece() {
    let board = Board::from_pieces(&[0, 1, 2, 12], &[20, 21, 22]);
    assert_eq!(select_piece_to_remove(&board, Player::Black), Some(p(12)));

    let mut game = Game::from_position(Board::from_pieces(&[0, 1, 2, 12], &[20, 21, 14]), Player::Black, [0, 0])
        .unwrap();
    let outcome = game.move_piece(p(14), p(22)).unwrap();
    assert!(outcome.mill_formed);
    assert_eq!(game.removable_positions(), vec![p(12)]);
    game.remove_piece(p(12)).unwrap();
    assert_eq!(game.pieces_on_board(Player::White), 3);
}
