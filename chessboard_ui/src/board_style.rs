use egui::{vec2, Color32, Pos2, Rect, Vec2};

use chessboard_core::Color;

use crate::constants::{
    BLACK_PIECE_FILL, BLACK_PIECE_INK, BOARD_BLACK, BOARD_BLACK_FADED, BOARD_LAST_MOVE,
    BOARD_SELECTED, BOARD_WHITE, BOARD_WHITE_FADED, DEFAULT_BOARD_SIZE, MOVE_COLOR,
    WHITE_PIECE_FILL, WHITE_PIECE_INK,
};

/// Sizes and colours of the drawn board. All lengths scale with
/// `square_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStyle {
    pub square_size: f32,
}

impl BoardStyle {
    pub fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    pub fn from_board_size(board_size: f32) -> Self {
        Self::new(board_size / 8.0)
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    pub fn piece_radius(&self) -> f32 {
        0.38 * self.square_size
    }

    pub fn piece_outline_width(&self) -> f32 {
        2.0 / 80.0 * self.square_size
    }

    pub fn piece_font_size(&self) -> f32 {
        0.42 * self.square_size
    }

    pub fn target_dot_radius(&self) -> f32 {
        0.125 * self.square_size
    }

    pub fn label_font_size(&self) -> f32 {
        0.16 * self.square_size
    }

    /// Rect of the cell drawn at `(visual_row, visual_col)`.
    pub fn cell_rect(&self, visual_row: usize, visual_col: usize, board_rect: Rect) -> Rect {
        Rect::from_min_size(
            board_rect.left_top()
                + vec2(
                    visual_col as f32 * self.square_size,
                    visual_row as f32 * self.square_size,
                ),
            Vec2::splat(self.square_size),
        )
    }

    /// The visual cell under `pos`, if it is on the board.
    pub fn cell_at(&self, pos: Pos2, board_rect: Rect) -> Option<(usize, usize)> {
        let Vec2 { x, y } = (pos - board_rect.left_top()) / self.square_size;
        if (0.0..8.0).contains(&x) && (0.0..8.0).contains(&y) {
            Some((y.clamp(0.0, 7.0) as usize, x.clamp(0.0, 7.0) as usize))
        } else {
            None
        }
    }

    /// Corner triangles marking a capture target.
    pub fn corner_triangles(&self, rect: Rect) -> Vec<Vec<Pos2>> {
        let d = self.square_size * 0.25;

        vec![
            vec![
                rect.left_top(),
                rect.left_top() + vec2(d, 0.0),
                rect.left_top() + vec2(0.0, d),
            ],
            vec![
                rect.right_top(),
                rect.right_top() + vec2(-d, 0.0),
                rect.right_top() + vec2(0.0, d),
            ],
            vec![
                rect.left_bottom(),
                rect.left_bottom() + vec2(d, 0.0),
                rect.left_bottom() + vec2(0.0, -d),
            ],
            vec![
                rect.right_bottom(),
                rect.right_bottom() + vec2(-d, 0.0),
                rect.right_bottom() + vec2(0.0, -d),
            ],
        ]
    }

    pub fn board_colors(&self, faded: bool) -> (Color32, Color32) {
        if faded {
            (BOARD_WHITE_FADED, BOARD_BLACK_FADED)
        } else {
            (BOARD_WHITE, BOARD_BLACK)
        }
    }

    /// Fill and letter colour of a piece disc.
    pub fn piece_colors(&self, color: Color) -> (Color32, Color32) {
        match color {
            Color::White => (WHITE_PIECE_FILL, WHITE_PIECE_INK),
            Color::Black => (BLACK_PIECE_FILL, BLACK_PIECE_INK),
        }
    }

    pub fn last_move_color(&self) -> Color32 {
        BOARD_LAST_MOVE
    }

    pub fn selected_color(&self) -> Color32 {
        BOARD_SELECTED
    }

    pub fn move_color(&self) -> Color32 {
        MOVE_COLOR
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self::from_board_size(DEFAULT_BOARD_SIZE)
    }
}
