use egui::{Align2, FontId, Painter, Rect, Stroke};

use chessboard_core::{BoardView, Piece};

use crate::board_style::BoardStyle;

/// Pieces are drawn as discs in the owner's colour carrying the piece
/// letter.
pub(super) fn paint_pieces(
    painter: &Painter,
    style: &BoardStyle,
    board_rect: Rect,
    view: &BoardView,
) {
    for cell in view.cells() {
        if let Some(piece) = cell.piece {
            let rect = style.cell_rect(cell.visual_row, cell.visual_col, board_rect);
            paint_piece(painter, style, rect, piece);
        }
    }
}

fn paint_piece(painter: &Painter, style: &BoardStyle, rect: Rect, piece: Piece) {
    let (fill, ink) = style.piece_colors(piece.color);
    let center = rect.center();

    painter.circle(
        center,
        style.piece_radius(),
        fill,
        Stroke::new(style.piece_outline_width(), ink),
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        piece.piece_type.as_uppercase_char(),
        FontId::proportional(style.piece_font_size()),
        ink,
    );
}
