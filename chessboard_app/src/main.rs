mod args;
mod fen_input;
mod move_table;

use clap::Parser;
use eframe::egui::{self, Button, Color32, Key, Layout, Vec2};
use log::{error, info};

use chessboard_core::{BoardController, BoardView, Position};
use chessboard_ui::BoardUI;

use args::Args;
use fen_input::FenInput;

const BOARD_MIN_SIZE: f32 = 320.0;
const BOARD_MAX_SIZE: f32 = 720.0;

struct ChessboardApp {
    controller: BoardController,
    view: BoardView,

    board_ui: BoardUI,
    fen_input: FenInput,
    fen_error: Option<String>,
}

impl ChessboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: BoardController) -> Self {
        let view = controller.commit();

        Self {
            controller,
            view,
            board_ui: BoardUI::new(),
            fen_input: FenInput::new(),
            fen_error: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (left, right, flip) = ctx.input(|input| {
            (
                input.key_pressed(Key::ArrowLeft),
                input.key_pressed(Key::ArrowRight),
                input.key_pressed(Key::F),
            )
        });

        if left {
            self.view = self.controller.undo();
        }
        if right {
            self.view = self.controller.redo();
        }
        if flip {
            self.view = self.controller.flip();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("New Game").clicked() {
                self.fen_error = None;
                self.view = self.controller.new_game();
            }

            if ui
                .add_enabled(self.view.can_undo(), Button::new("Undo"))
                .clicked()
            {
                self.view = self.controller.undo();
            }

            if ui
                .add_enabled(self.view.can_redo(), Button::new("Redo"))
                .clicked()
            {
                self.view = self.controller.redo();
            }

            if ui.button("Flip").clicked() {
                self.view = self.controller.flip();
            }

            if ui.button("Copy PGN").clicked() {
                let pgn = self.controller.transcript();
                info!("copied PGN ({} moves)", self.view.moves.len());
                ui.output_mut(|output| output.copied_text = pgn);
            }
        });
    }

    fn fen_field(&mut self, ui: &mut egui::Ui) {
        ui.label("Position (FEN):");

        if let Some(fen) = self.fen_input.show(ui, &self.view.fen) {
            if fen != self.view.fen {
                match self.controller.new_game_from(&Position::new(fen)) {
                    Ok(view) => {
                        self.fen_error = None;
                        self.view = view;
                    }
                    Err(err) => {
                        self.fen_error = Some(err.to_string());
                        self.fen_input.revert();
                    }
                }
            }
        }

        if let Some(err) = &self.fen_error {
            ui.colored_label(Color32::RED, err);
        }
    }
}

impl eframe::App for ChessboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::SidePanel::right("right_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                if self.view.status.is_game_over() {
                    ui.heading("Game Over");
                }
                ui.label(self.view.status_text());

                ui.separator();
                self.controls(ui);

                ui.separator();
                self.fen_field(ui);

                ui.separator();
                ui.label("Move List:");
                if let Some(index) = move_table::show(ui, &self.view) {
                    self.view = self.controller.go_to(index);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(
                Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    // Grey out the board while looking at an earlier position.
                    let props = BoardUI::props(&self.view)
                        .fade_out_board(self.view.can_redo())
                        .min_size(BOARD_MIN_SIZE)
                        .max_size(BOARD_MAX_SIZE);
                    let response = self.board_ui.ui(ui, props);

                    if let Some((row, col)) = response.clicked {
                        self.view = self.controller.click(row, col);
                    }
                },
            );
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut controller = BoardController::new(args.controller_config());

    if let Some(fen) = &args.fen {
        if let Err(err) = controller.new_game_from(&Position::new(fen.as_str())) {
            error!("{err}; starting from the standard position");
        }
    }

    eframe::run_native(
        "Chessboard",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(Vec2::new(1024.0, 768.0)),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(ChessboardApp::new(cc, controller)))),
    )
}
