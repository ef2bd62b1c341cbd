//! Main application for the GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::game::{render_all, Game, GameEvent, GameStatus, BOT, HUMAN};
use crate::{BotEngine, Mark};
use super::board_view::BoardView;
use super::display::BoardDisplay;
use super::theme::*;

/// Main application: the game plus what the screen shows of it
pub struct GomokuApp {
    game: Game,
    display: BoardDisplay,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_game(Game::default())
    }
}

impl GomokuApp {
    /// Create the app; `seed` fixes the bot's random fallback
    pub fn new(_cc: &eframe::CreationContext<'_>, seed: Option<u64>) -> Self {
        let bot = seed.map_or_else(BotEngine::new, BotEngine::with_seed);
        Self::with_game(Game::new(bot))
    }

    fn with_game(game: Game) -> Self {
        Self {
            game,
            display: BoardDisplay::default(),
            board_view: BoardView::default(),
        }
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        render_all(&events, &mut self.display);
    }

    fn restart(&mut self) {
        let events = self.game.restart();
        self.dispatch(events);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}  Bot: {}", HUMAN.symbol(), BOT.symbol()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_bot_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("FIVE IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("10 x 10 versus bot").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Side to move and game status
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let state = self.game.state();
            let (symbol, accent) = mark_style(state.turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(6), BOARD_BG);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(26.0),
                    accent,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    let (status, color) = match state.status {
                        GameStatus::InProgress => ("Your turn", STATUS_ACTIVE),
                        GameStatus::Won(winner) if winner == HUMAN => ("You won", STATUS_OVER),
                        GameStatus::Won(_) => ("Bot won", STATUS_OVER),
                        GameStatus::Draw => ("Draw", STATUS_OVER),
                    };
                    ui.label(RichText::new(status).size(16.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("Move #{}", state.move_count))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Which rule the bot used last
    fn render_bot_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("BOT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_bot_move() {
                Some(bot_move) => {
                    ui.label(
                        RichText::new(bot_move.kind.label())
                            .size(14.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("at {}", bot_move.pos))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for your move").size(11.0).color(TEXT_MUTED));
                }
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("seed {}", self.game.bot_seed()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let restart = egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(restart).clicked() {
                        self.restart();
                    }
                });
        });
    }

    /// Centered overlay with the terminal message
    fn render_message_modal(&mut self, ctx: &Context) {
        let Some(message) = self.display.message().map(str::to_owned) else {
            return;
        };

        egui::Window::new("game_over")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(
                Frame::new()
                    .fill(CARD_BG)
                    .corner_radius(CornerRadius::same(10))
                    .inner_margin(24.0),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(message).size(28.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(16.0);
                    if ui.button(RichText::new("Restart").size(14.0)).clicked() {
                        self.restart();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let state = self.game.state();
                let clicked = self.board_view.show(
                    ui,
                    &self.display,
                    state.last_move,
                    state.winning_line,
                    state.status == GameStatus::InProgress,
                );

                if let Some(pos) = clicked {
                    let events = self.game.on_cell_activated(pos);
                    self.dispatch(events);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.restart();
        }
    }
}

/// Symbol text and color for a mark
fn mark_style(mark: Mark) -> (&'static str, egui::Color32) {
    match mark {
        Mark::O => (mark.symbol(), O_COLOR),
        _ => (mark.symbol(), X_COLOR),
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_message_modal(ctx);
    }
}
