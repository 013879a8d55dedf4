use egui::{
    epaint::{PathShape, PathStroke},
    Align2, Color32, FontId, Painter, PointerButton, Rect, Sense, Shadow, Ui, Vec2,
};

use chessboard_core::{visual_to_canonical, BoardView, Square};

use crate::{
    board_style::BoardStyle,
    constants::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE},
};

mod pieces;

#[derive(Debug)]
pub struct BoardUIProps<'a> {
    view: &'a BoardView,
    fade_out_board: bool,

    // min, max
    board_size: (Option<f32>, Option<f32>),
}

impl<'a> BoardUIProps<'a> {
    pub fn new(view: &'a BoardView) -> Self {
        Self {
            view,
            fade_out_board: false,
            board_size: (None, Some(DEFAULT_BOARD_SIZE)),
        }
    }

    pub fn fade_out_board(mut self, fade_out_board: bool) -> Self {
        self.fade_out_board = fade_out_board;
        self
    }

    pub fn min_size(mut self, min_size: f32) -> Self {
        self.board_size.0 = Some(min_size);
        self
    }

    pub fn max_size(mut self, max_size: f32) -> Self {
        self.board_size.1 = Some(max_size);
        self
    }
}

#[derive(Debug)]
pub struct BoardUIResponse {
    pub egui_response: egui::Response,
    /// Canonical `(row, col)` of a primary click on the board.
    pub clicked: Option<(usize, usize)>,
}

/// Draws a [`BoardView`] and reports clicks.
///
/// The widget holds no game state: selection, flip and highlights all come
/// from the view, and clicks are handed back untouched for the controller.
#[derive(Debug)]
pub struct BoardUI {
    style: BoardStyle,
    board_rect: Rect,
}

impl Default for BoardUI {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardUI {
    pub fn new() -> Self {
        Self {
            style: BoardStyle::default(),
            board_rect: Rect::NOTHING,
        }
    }

    pub fn props(view: &BoardView) -> BoardUIProps<'_> {
        BoardUIProps::new(view)
    }

    pub fn ui(&mut self, ui: &mut Ui, props: BoardUIProps<'_>) -> BoardUIResponse {
        let board_size = Self::resolve_size(ui, &props);
        self.style = BoardStyle::from_board_size(board_size);

        let (egui_response, painter) =
            ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect =
            Rect::from_center_size(egui_response.rect.center(), Vec2::splat(board_size));

        self.paint_board(&painter, &props);
        self.paint_highlights(&painter, &props);
        self.paint_in_check(&painter, &props);
        self.paint_targets(&painter, &props);
        pieces::paint_pieces(&painter, &self.style, self.board_rect, props.view);

        let mut response = BoardUIResponse {
            egui_response,
            clicked: None,
        };

        if response.egui_response.clicked_by(PointerButton::Primary) {
            response.clicked = response
                .egui_response
                .interact_pointer_pos()
                .and_then(|pos| self.style.cell_at(pos, self.board_rect))
                .map(|(row, col)| visual_to_canonical(props.view.flipped, row, col));
        }

        response
    }

    fn resolve_size(ui: &Ui, props: &BoardUIProps<'_>) -> f32 {
        let available_size = ui.available_size();
        let mut size = available_size.x.min(available_size.y);

        if let Some(min_size) = props.board_size.0 {
            size = size.max(min_size);
        }

        if let Some(max_size) = props.board_size.1 {
            size = size.min(max_size);
        }

        size.max(MIN_BOARD_SIZE)
    }

    fn square_rect(&self, square: Square, flipped: bool) -> Rect {
        let (row, col) = square.coords();
        // Flipping is its own inverse, so the same mapping takes canonical
        // coordinates back to visual ones.
        let (visual_row, visual_col) = visual_to_canonical(flipped, row, col);
        self.style.cell_rect(visual_row, visual_col, self.board_rect)
    }

    fn paint_board(&self, painter: &Painter, props: &BoardUIProps<'_>) {
        let (white_color, black_color) = self.style.board_colors(props.fade_out_board);
        let font = FontId::proportional(self.style.label_font_size());

        for cell in props.view.cells() {
            let rect = self
                .style
                .cell_rect(cell.visual_row, cell.visual_col, self.board_rect);

            let square_is_black = (cell.visual_row + cell.visual_col) % 2 == 1;
            let (fill, text_color) = if square_is_black {
                (black_color, white_color)
            } else {
                (white_color, black_color)
            };
            painter.rect_filled(rect, 0.0, fill);

            if cell.visual_row == 7 {
                painter.text(
                    rect.left_bottom() + Vec2::new(2.0, -2.0),
                    Align2::LEFT_BOTTOM,
                    (b'a' + cell.square.file()) as char,
                    font.clone(),
                    text_color,
                );
            }

            if cell.visual_col == 7 {
                painter.text(
                    rect.right_top() + Vec2::new(-2.0, 2.0),
                    Align2::RIGHT_TOP,
                    (b'1' + cell.square.rank()) as char,
                    font.clone(),
                    text_color,
                );
            }
        }
    }

    fn paint_highlights(&self, painter: &Painter, props: &BoardUIProps<'_>) {
        let view = props.view;

        if let Some((from, to)) = view.last_move {
            for square in [from, to] {
                painter.rect_filled(
                    self.square_rect(square, view.flipped),
                    0.0,
                    self.style.last_move_color(),
                );
            }
        }

        if let Some(selected) = view.selected {
            painter.rect_filled(
                self.square_rect(selected, view.flipped),
                0.0,
                self.style.selected_color(),
            );
        }
    }

    fn paint_in_check(&self, painter: &Painter, props: &BoardUIProps<'_>) {
        if let Some(square) = props.view.checked_king {
            let size = self.style.square_size;
            painter.add(
                Shadow {
                    blur: size * 0.25,
                    spread: -size * 0.125,
                    color: Color32::RED,
                    ..Default::default()
                }
                .as_shape(self.square_rect(square, props.view.flipped), size * 0.5),
            );
        }
    }

    fn paint_targets(&self, painter: &Painter, props: &BoardUIProps<'_>) {
        let view = props.view;

        for &target in &view.targets {
            let rect = self.square_rect(target, view.flipped);

            if view.piece_at(target).is_some() {
                for points in self.style.corner_triangles(rect) {
                    painter.add(PathShape {
                        points,
                        closed: true,
                        fill: self.style.move_color(),
                        stroke: PathStroke::NONE,
                    });
                }
            } else {
                painter.circle_filled(
                    rect.center(),
                    self.style.target_dot_radius(),
                    self.style.move_color(),
                );
            }
        }
    }
}
