use super::topology::{degree, is_adjacent, mill_lines, mills_through, neighbors, EDGES};
use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Player::Black.opponent(), Player::White);
}

#[test]
fn test_pos_bounds() {
    assert!(Pos::try_new(0).is_some());
    assert!(Pos::try_new(23).is_some());
    assert!(Pos::try_new(24).is_none());
    assert_eq!(Pos::all().count(), NUM_POSITIONS);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0) < Pos::new(1));
    assert!(Pos::new(9) < Pos::new(23));
}

#[test]
fn test_edge_count() {
    assert_eq!(EDGES.len(), 32);
    let total_degree: usize = Pos::all().map(degree).sum();
    assert_eq!(total_degree, 64);
}

#[test]
fn test_corner_and_mid_edge_degrees() {
    for pos in Pos::all() {
        if pos.is_strategic() {
            assert!(degree(pos) >= 3, "mid-edge {} has degree {}", pos, degree(pos));
        } else {
            assert_eq!(degree(pos), 2, "corner {}", pos);
        }
    }
    // Middle square mid-edges join both other squares
    assert_eq!(degree(Pos::new(9)), 4);
    assert_eq!(degree(Pos::new(1)), 3);
}

#[test]
fn test_adjacency_symmetric() {
    for a in Pos::all() {
        for b in neighbors(a) {
            assert!(is_adjacent(b, a));
        }
    }
    assert!(is_adjacent(Pos::new(0), Pos::new(1)));
    assert!(is_adjacent(Pos::new(7), Pos::new(0)));
    assert!(is_adjacent(Pos::new(9), Pos::new(17)));
    assert!(!is_adjacent(Pos::new(0), Pos::new(8)));
    assert!(!is_adjacent(Pos::new(0), Pos::new(2)));
}

#[test]
fn test_neighbor_order_follows_edges() {
    let n: Vec<_> = neighbors(Pos::new(0)).collect();
    assert_eq!(n, vec![Pos::new(1), Pos::new(7)]);
    let n: Vec<_> = neighbors(Pos::new(9)).collect();
    assert_eq!(n, vec![Pos::new(8), Pos::new(10), Pos::new(1), Pos::new(17)]);
}

#[test]
fn test_every_node_on_two_mills() {
    for pos in Pos::all() {
        let lines: Vec<_> = mills_through(pos).collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.contains(&pos));
        }
    }
    assert_eq!(mill_lines().count(), 16);
}

#[test]
fn test_mill_lines_are_connected() {
    // Consecutive nodes of each line share an edge
    for [a, b, c] in mill_lines() {
        assert!(is_adjacent(a, b));
        assert!(is_adjacent(b, c));
    }
}

#[test]
fn test_strategic_positions() {
    assert_eq!(STRATEGIC_POSITIONS.len(), 12);
    for idx in STRATEGIC_POSITIONS {
        assert!(Pos::new(idx).is_strategic());
    }
    assert!(!Pos::new(0).is_strategic());
}

#[test]
fn test_board_basics() {
    let mut board = Board::new();
    assert_eq!(board.piece_count(), 0);
    assert_eq!(board.empty_positions().count(), 24);

    board.place(Pos::new(4), Player::White);
    assert_eq!(board.get(Pos::new(4)), Some(Player::White));
    assert!(!board.is_empty(Pos::new(4)));
    assert_eq!(board.count(Player::White), 1);
    assert_eq!(board.count(Player::Black), 0);

    board.relocate(Pos::new(4), Pos::new(5));
    assert!(board.is_empty(Pos::new(4)));
    assert!(board.is_owned_by(Pos::new(5), Player::White));

    board.remove(Pos::new(5));
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_board_copies_are_independent() {
    let board = Board::from_pieces(&[0, 1], &[8]);
    let mut copy = board;
    copy.remove(Pos::new(0));
    assert!(board.is_owned_by(Pos::new(0), Player::White));

    let moved = board.with_relocation(Pos::new(8), Pos::new(9));
    assert!(board.is_owned_by(Pos::new(8), Player::Black));
    assert!(moved.is_owned_by(Pos::new(9), Player::Black));
}

#[test]
fn test_positions_of() {
    let board = Board::from_pieces(&[3, 1, 20], &[2]);
    let whites: Vec<_> = board.positions_of(Player::White).collect();
    assert_eq!(whites, vec![Pos::new(1), Pos::new(3), Pos::new(20)]);
}
