//! GUI module for the Mill game
//!
//! This module provides a native Rust GUI using egui/eframe. It drives a
//! [`Session`](crate::session::Session) and draws what the rules engine
//! reports; no game logic lives here.

mod app;
mod board_view;
mod theme;

pub use app::MillApp;
