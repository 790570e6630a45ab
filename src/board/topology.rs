//! Static board graph: adjacency, mill lines and strategic nodes
//!
//! The board is three concentric squares of eight nodes joined by four
//! spokes at the mid-edge nodes. Everything here is computed at compile
//! time and never mutated.

use super::{Pos, NUM_POSITIONS};

/// The 32 undirected edges. Order matters: neighbor lists (and therefore
/// move generation and tie-breaking) follow this order.
pub const EDGES: [(u8, u8); 32] = [
    // Outer square
    (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0),
    // Middle square
    (8, 9), (9, 10), (10, 11), (11, 12), (12, 13), (13, 14), (14, 15), (15, 8),
    // Inner square
    (16, 17), (17, 18), (18, 19), (19, 20), (20, 21), (21, 22), (22, 23), (23, 16),
    // Spokes
    (1, 9), (9, 17), (3, 11), (11, 19), (5, 13), (13, 21), (7, 15), (15, 23),
];

/// The 16 mill lines
pub const MILLS: [[u8; 3]; 16] = [
    // Outer square sides
    [0, 1, 2], [2, 3, 4], [4, 5, 6], [6, 7, 0],
    // Middle square sides
    [8, 9, 10], [10, 11, 12], [12, 13, 14], [14, 15, 8],
    // Inner square sides
    [16, 17, 18], [18, 19, 20], [20, 21, 22], [22, 23, 16],
    // Spokes
    [1, 9, 17], [3, 11, 19], [5, 13, 21], [7, 15, 23],
];

/// Mid-edge nodes, favored by the evaluator
pub const STRATEGIC_POSITIONS: [u8; 12] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23];

/// Neighbor table entry: up to four neighbors plus the live count
#[derive(Debug, Clone, Copy)]
struct NeighborList {
    nodes: [u8; 4],
    len: u8,
}

const NEIGHBORS: [NeighborList; NUM_POSITIONS] = build_neighbors();

/// Each node sits on exactly two mill lines (one per direction)
const MILLS_THROUGH: [[u8; 2]; NUM_POSITIONS] = build_mills_through();

const fn build_neighbors() -> [NeighborList; NUM_POSITIONS] {
    let mut table = [NeighborList { nodes: [0; 4], len: 0 }; NUM_POSITIONS];
    let mut e = 0;
    while e < EDGES.len() {
        let (a, b) = EDGES[e];
        let la = table[a as usize].len as usize;
        table[a as usize].nodes[la] = b;
        table[a as usize].len += 1;
        let lb = table[b as usize].len as usize;
        table[b as usize].nodes[lb] = a;
        table[b as usize].len += 1;
        e += 1;
    }
    table
}

const fn build_mills_through() -> [[u8; 2]; NUM_POSITIONS] {
    let mut table = [[0u8; 2]; NUM_POSITIONS];
    let mut filled = [0usize; NUM_POSITIONS];
    let mut m = 0;
    while m < MILLS.len() {
        let mut k = 0;
        while k < 3 {
            let p = MILLS[m][k] as usize;
            table[p][filled[p]] = m as u8;
            filled[p] += 1;
            k += 1;
        }
        m += 1;
    }
    table
}

/// Neighbors of `pos` in edge-list order
#[inline]
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    let entry = NEIGHBORS[pos.to_index()];
    entry.nodes.into_iter().take(entry.len as usize).map(Pos::new)
}

/// Number of neighbors (2 for corners, 3 or 4 for mid-edge nodes)
#[inline]
pub fn degree(pos: Pos) -> usize {
    NEIGHBORS[pos.to_index()].len as usize
}

/// Check whether two nodes share an edge
#[inline]
pub fn is_adjacent(a: Pos, b: Pos) -> bool {
    neighbors(a).any(|n| n == b)
}

/// The mill lines passing through `pos`
#[inline]
pub fn mills_through(pos: Pos) -> impl Iterator<Item = [Pos; 3]> {
    MILLS_THROUGH[pos.to_index()]
        .into_iter()
        .map(|m| MILLS[m as usize].map(Pos::new))
}

/// All mill lines as positions
#[inline]
pub fn mill_lines() -> impl Iterator<Item = [Pos; 3]> {
    MILLS.into_iter().map(|line| line.map(Pos::new))
}
