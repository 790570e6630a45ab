//! Board rendering for the Mill GUI
//!
//! The 24 nodes sit on a 7x7 lattice: ring `r` (0 outer, 2 inner) is a
//! square with side `6 - 2r` offset by `r` cells, and each ring is numbered
//! clockwise from its top-left corner.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::topology::EDGES;
use crate::board::{Board, Player, Pos, NUM_POSITIONS};

use super::theme::*;

/// Lattice cells per side
const GRID_SPAN: f32 = 6.0;

/// Corner and mid-edge offsets around one ring, as fractions of its side
const RING_OFFSETS: [(f32, f32); 8] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (1.0, 0.0),
    (1.0, 0.5),
    (1.0, 1.0),
    (0.5, 1.0),
    (0.0, 1.0),
    (0.0, 0.5),
];

/// Lattice coordinates `(x, y)` of a node, both in `0.0..=6.0`
pub fn grid_coords(pos: Pos) -> (f32, f32) {
    let idx = pos.to_index();
    let ring = (idx / 8) as f32;
    let side = GRID_SPAN - 2.0 * ring;
    let (fx, fy) = RING_OFFSETS[idx % 8];
    (ring + fx * side, ring + fy * side)
}

/// What the board should highlight this frame
#[derive(Debug, Default)]
pub struct BoardOverlay {
    pub last_move: Option<Pos>,
    pub selected: Option<Pos>,
    /// Destinations of the selected piece, or empty nodes while placing
    pub targets: Vec<Pos>,
    /// Opponent pieces that may be captured
    pub removable: Vec<Pos>,
    /// Completed mills to outline
    pub mills: Vec<[Pos; 3]>,
    /// Side whose piece a hover preview shows
    pub to_move: Option<Player>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked node if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay, accept_input: bool) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / GRID_SPAN;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_lines(&painter);
        self.draw_mills(&painter, &overlay.mills);
        self.draw_pieces(&painter, board);

        for &pos in &overlay.targets {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, self.piece_radius() * 0.4, target_hint());
        }
        for &pos in &overlay.removable {
            let center = self.board_to_screen(pos);
            painter.circle_stroke(center, self.piece_radius() + 3.0, Stroke::new(3.0, REMOVABLE_RING));
        }
        if let Some(pos) = overlay.selected {
            let center = self.board_to_screen(pos);
            painter.circle_stroke(center, self.piece_radius() + 3.0, Stroke::new(3.0, SELECTED_RING));
        }
        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if !accept_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        if let Some(player) = overlay.to_move {
            if board.is_empty(pos) && overlay.targets.contains(&pos) {
                self.draw_hover_preview(&painter, pos, player);
            }
        }
        response.clicked().then_some(pos)
    }

    #[inline]
    fn piece_radius(&self) -> f32 {
        self.cell_size * PIECE_RADIUS_RATIO
    }

    /// Draw the three squares, the four spokes and a dot on every node
    fn draw_lines(&self, painter: &Painter) {
        let stroke = Stroke::new(BOARD_LINE_WIDTH, BOARD_LINE);
        for &(a, b) in EDGES.iter() {
            let start = self.board_to_screen(Pos::new(a));
            let end = self.board_to_screen(Pos::new(b));
            painter.line_segment([start, end], stroke);
        }
        for idx in 0..NUM_POSITIONS {
            let center = self.board_to_screen(Pos::from_index(idx));
            painter.circle_filled(center, NODE_DOT_RADIUS, NODE_DOT);
        }
    }

    fn draw_mills(&self, painter: &Painter, mills: &[[Pos; 3]]) {
        let stroke = Stroke::new(6.0, MILL_HIGHLIGHT);
        for line in mills {
            let start = self.board_to_screen(line[0]);
            let end = self.board_to_screen(line[2]);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            if let Some(player) = board.get(pos) {
                self.draw_piece(painter, pos, player);
            }
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.piece_radius();
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_PIECE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_PIECE_HIGHLIGHT);
            }
            Player::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let color = match player {
            Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };
        painter.circle_filled(center, self.piece_radius(), color);
        painter.circle_stroke(center, self.piece_radius(), Stroke::new(1.0, hover_valid()));
    }

    /// Nearest node to a screen point, if the point is close enough to it
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let max_dist = self.cell_size * HIT_RADIUS_RATIO;
        Pos::all()
            .map(|pos| (pos, self.board_to_screen(pos).distance(screen_pos)))
            .filter(|&(_, dist)| dist <= max_dist)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(pos, _)| pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let (gx, gy) = grid_coords(pos);
        Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + gx * self.cell_size,
            self.board_rect.min.y + BOARD_MARGIN + gy * self.cell_size,
        )
    }
}
