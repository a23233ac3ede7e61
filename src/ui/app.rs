//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::session::{GameMode, GameSession, Settings};
use super::theme::*;
use crate::config::{BOARD_SIZE_RANGE, DEPTH_RANGE};
use crate::{Algorithm, GameState, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeChoice {
    HumanVsAi,
    AiVsAi,
}

/// Settings being edited; applied on New Game
struct Setup {
    mode: ModeChoice,
    human: Stone,
    settings: Settings,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            mode: ModeChoice::HumanVsAi,
            human: Stone::Black,
            settings: Settings::default(),
        }
    }
}

impl Setup {
    fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::HumanVsAi => GameMode::HumanVsAi { human: self.human },
            ModeChoice::AiVsAi => GameMode::AiVsAi,
        }
    }
}

fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "BLACK",
        Stone::White => "WHITE",
        Stone::Empty => "-",
    }
}

fn algorithm_accent(algorithm: Algorithm) -> Color32 {
    match algorithm {
        Algorithm::Minimax => MINIMAX_ACCENT,
        Algorithm::AlphaBeta => ALPHABETA_ACCENT,
    }
}

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    setup: Setup,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        let setup = Setup::default();
        Self {
            session: GameSession::new(setup.game_mode(), setup.settings),
            setup,
            board_view: BoardView::default(),
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.session = GameSession::new(self.setup.game_mode(), self.setup.settings);
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::HumanVsAi { human } => {
                            format!("You: {} vs {}", color_name(human), self.session.settings.algorithm)
                        }
                        GameMode::AiVsAi => format!("Minimax vs {}", self.session.settings.algorithm),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(250.0)
            .max_width(290.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Minimax vs Alpha-Beta").size(11.0).color(TEXT_MUTED));
                    ui.add_space(12.0);

                    self.render_setup_card(ui);
                    ui.add_space(10.0);
                    self.render_turn_card(ui);
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                    ui.add_space(10.0);
                    self.render_actions_card(ui);

                    if self.session.is_over() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui);
                    }

                    if let Some(msg) = self.session.message.clone() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, &msg);
                    }
                });
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_setup_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "SETUP");
            let setup = &mut self.setup;

            ui.horizontal(|ui| {
                ui.radio_value(&mut setup.mode, ModeChoice::HumanVsAi, "Human vs AI");
                ui.radio_value(&mut setup.mode, ModeChoice::AiVsAi, "AI vs AI");
            });
            if setup.mode == ModeChoice::HumanVsAi {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("You play").color(TEXT_SECONDARY));
                    ui.radio_value(&mut setup.human, Stone::Black, "Black");
                    ui.radio_value(&mut setup.human, Stone::White, "White");
                });
            }

            ui.add(egui::Slider::new(&mut setup.settings.size, BOARD_SIZE_RANGE).text("size"));
            ui.add(egui::Slider::new(&mut setup.settings.depth, DEPTH_RANGE).text("depth"));

            let label = if setup.mode == ModeChoice::AiVsAi { "White AI" } else { "AI" };
            egui::ComboBox::from_label(label)
                .selected_text(setup.settings.algorithm.name())
                .show_ui(ui, |ui| {
                    for algorithm in Algorithm::ALL {
                        ui.selectable_value(&mut setup.settings.algorithm, algorithm, algorithm.name());
                    }
                });

            ui.add_space(6.0);
            if ui.button("New Game").clicked() {
                self.new_game();
            }
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.current_turn();
            let accent = if turn == Stone::Black { BLACK_STONE } else { WHITE_STONE };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, accent);
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(color_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.session.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                        let secs = elapsed.as_secs_f32();
                        let color = if secs < 1.0 {
                            TIMER_NORMAL
                        } else if secs < 5.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {secs:.1}s"), color)
                    } else if self.session.is_human_turn() {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    } else {
                        ("AI to move".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.board.stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "AI STATS");

            match &self.session.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(result.algorithm.name())
                            .size(12.0)
                            .strong()
                            .color(algorithm_accent(result.algorithm)),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(
                            RichText::new(format!("Played {} {}", pos.row + 1, pos.col + 1))
                                .size(11.0)
                                .color(TEXT_PRIMARY),
                        );
                    }
                    ui.label(
                        RichText::new(format!("Score {}  |  {} ms", result.score, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes  |  {} cutoffs", result.nodes, result.cutoffs))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }

            ui.add_space(6.0);
            for algorithm in Algorithm::ALL {
                let times = &self.session.think_times;
                if let Some(avg) = times.average(algorithm) {
                    ui.label(
                        RichText::new(format!(
                            "{}: avg {:.1} ms over {} moves",
                            algorithm.name(),
                            avg.as_secs_f64() * 1000.0,
                            times.count(algorithm)
                        ))
                        .size(10.0)
                        .color(algorithm_accent(algorithm)),
                    );
                }
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "ACTIONS");

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let undo = egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(undo).clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let restart = egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(restart).clicked() {
                        self.session.reset();
                    }
                });
            });
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.session.state {
            GameState::BlackWins => "BLACK WINS!",
            GameState::WhiteWins => "WHITE WINS!",
            GameState::Draw => "DRAW",
            GameState::InProgress => return,
        };

        Frame::new()
            .fill(Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input =
                !self.session.is_over() && self.session.is_human_turn() && !self.session.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.session.board,
                self.session.current_turn(),
                self.session.winning_line.as_deref(),
                accepts_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place_stone(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && !self.session.is_over() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
