//! Main application for the Mill GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{Action, Player};
use crate::rules::{GamePhase, WinReason};
use crate::session::{GameMode, Session};

use super::board_view::{BoardOverlay, BoardView};
use super::theme::*;

/// Main Mill application
pub struct MillApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
    /// When the pending AI step may run
    ai_due: Option<Instant>,
    message: Option<String>,
}

impl Default for MillApp {
    fn default() -> Self {
        Self {
            session: Session::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
            ai_due: None,
            message: None,
        }
    }
}

impl MillApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session.set_mode(mode);
        self.ai_due = None;
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode() {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("NINE MEN'S MORRIS").size(20.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(egui::Color32::from_rgb(80, 60, 30))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                        });
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = self.session.game();
        Self::card_frame().show(ui, |ui| {
            if let Some(winner) = game.winner() {
                let reason = match winner.reason {
                    WinReason::ReducedToTwo => "opponent reduced to two pieces",
                    WinReason::Blocked => "opponent cannot move",
                };
                ui.label(RichText::new(format!("{} WINS", winner.player.name().to_uppercase())).size(18.0).strong().color(MILL_HIGHLIGHT));
                ui.label(RichText::new(reason).size(11.0).color(TEXT_SECONDARY));
                return;
            }

            let player = game.current_player();
            let accent = match player {
                Player::Black => egui::Color32::from_rgb(70, 70, 75),
                Player::White => egui::Color32::from_rgb(220, 220, 225),
            };
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, accent);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let phase = match game.phase() {
                        GamePhase::Placing => "Placing",
                        GamePhase::Moving => "Moving",
                        GamePhase::Flying => "Flying",
                    };
                    let status = if game.pending_removal() {
                        ("Mill! Remove a piece", STATUS_WARNING)
                    } else if self.session.is_ai_turn() {
                        ("AI thinking...", STATUS_WARNING)
                    } else {
                        (phase, STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        let game = self.session.game();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for player in [Player::White, Player::Black] {
                ui.label(
                    RichText::new(format!(
                        "{}: {} on board, {} in hand",
                        player.name(),
                        game.pieces_on_board(player),
                        game.pieces_remaining(player)
                    ))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.new_game(self.session.mode());
                }
                if self.session.mode() == GameMode::PvP && ui.button("Hint (H)").clicked() {
                    self.show_hint();
                }
            });
            ui.add_space(6.0);
            let elapsed = self.session.move_timer.elapsed();
            ui.label(RichText::new(format!("Turn time {:.1}s", elapsed.as_secs_f32())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };
            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_OK));
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes)).size(10.0).color(TEXT_MUTED));
            if let Some(action) = result.action {
                ui.label(RichText::new(format!("-> {}", describe(action))).size(12.0).strong().color(MILL_HIGHLIGHT));
            }
        });
    }

    fn show_hint(&mut self) {
        self.message = self.session.suggest().map(|action| format!("Hint: {}", describe(action)));
    }

    /// What the board should highlight for the current state
    fn overlay(&self) -> BoardOverlay {
        let game = self.session.game();
        let mut overlay = BoardOverlay {
            last_move: game.last_move().map(|action| match action {
                Action::Placement { position } => position,
                Action::Relocation { to, .. } => to,
            }),
            selected: self.session.selected(),
            to_move: (!game.is_over()).then(|| game.current_player()),
            ..Default::default()
        };

        if let Some(pos) = overlay.last_move {
            overlay.mills = game.mills_at(pos);
        }
        if game.pending_removal() {
            overlay.removable = game.removable_positions();
            return overlay;
        }
        overlay.targets = game
            .legal_actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Placement { position } => Some(position),
                Action::Relocation { from, to } if Some(from) == overlay.selected => Some(to),
                Action::Relocation { .. } => None,
            })
            .collect();
        overlay
    }

    fn render_board(&mut self, ctx: &Context) {
        let overlay = self.overlay();
        let accept_input = self.session.is_human_turn() && !self.session.is_thinking();
        let board = self.session.game().board();

        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, &board, &overlay, accept_input) {
                self.message = self.session.click(pos).err().map(|err| err.to_string());
            }
        });
    }

    /// Run the AI step once its pacing delay has passed
    fn drive_ai(&mut self, ctx: &Context) {
        if !self.session.is_ai_turn() {
            self.ai_due = None;
            return;
        }

        let delay = if self.session.game().pending_removal() {
            AI_REMOVAL_DELAY
        } else {
            AI_MOVE_DELAY
        };
        let due = *self.ai_due.get_or_insert_with(|| Instant::now() + delay);
        let now = Instant::now();
        if now < due {
            ctx.request_repaint_after(due - now);
            return;
        }

        self.ai_due = None;
        if let Err(err) = self.session.play_ai_step() {
            self.message = Some(err.to_string());
        }
        ctx.request_repaint();
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, hint, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.session.mode() == GameMode::PvP {
            self.show_hint();
        }
        if new_game {
            self.new_game(self.session.mode());
        }
    }
}

fn describe(action: Action) -> String {
    match action {
        Action::Placement { position } => format!("place {}", position),
        Action::Relocation { from, to } => format!("{} to {}", from, to),
    }
}

impl eframe::App for MillApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drive_ai(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
