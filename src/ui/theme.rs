//! Theme constants for the Mill GUI

use std::time::Duration;

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const BOARD_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const NODE_DOT: Color32 = Color32::from_rgb(50, 35, 20);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const MILL_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SELECTED_RING: Color32 = Color32::from_rgb(80, 160, 255);
pub const REMOVABLE_RING: Color32 = Color32::from_rgb(255, 50, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn target_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 160, 255, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.36;
pub const NODE_DOT_RADIUS: f32 = 5.0;
pub const BOARD_LINE_WIDTH: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
/// Clicks farther than this (in cell units) from every node are ignored
pub const HIT_RADIUS_RATIO: f32 = 0.45;

// Pacing of AI turns
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(800);
pub const AI_REMOVAL_DELAY: Duration = Duration::from_millis(500);
