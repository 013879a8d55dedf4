use eframe::egui::{self, Align, Layout, Sense, Ui};
use egui_extras::{Column, TableBuilder, TableRow};

use chessboard_core::BoardView;

/// Draws the numbered move list. Returns the history index to jump to when a
/// move is clicked.
pub fn show(ui: &mut Ui, view: &BoardView) -> Option<usize> {
    let rows = &view.move_rows;
    let mut jump_request = None;

    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    ui.style_mut().interaction.selectable_labels = false;

    TableBuilder::new(ui)
        .column(Column::auto().at_least(24.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .cell_layout(Layout::left_to_right(Align::Center))
        .sense(Sense::click())
        .stick_to_bottom(true)
        .striped(true)
        .body(|body| {
            body.rows(text_height, rows.len(), |mut r| {
                let row = &rows[r.index()];

                let mut selectable_cell = |r: &mut TableRow, (i, san): &(usize, String)| {
                    // Move `i` produced history entry `i + 1`.
                    r.set_selected(i + 1 == view.pointer);
                    let response = r
                        .col(|ui| {
                            ui.label(san);
                        })
                        .1;

                    if response.clicked() {
                        jump_request = Some(i + 1);
                    }
                };

                r.set_selected(false);

                r.col(|ui| {
                    ui.label(format!("{}.", row.number));
                });

                match &row.white {
                    Some(m) => selectable_cell(&mut r, m),
                    None => {
                        r.col(|ui| {
                            ui.label("...");
                        });
                    }
                }
                if let Some(m) = &row.black {
                    selectable_cell(&mut r, m);
                }
            });
        });

    jump_request
}
