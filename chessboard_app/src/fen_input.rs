use eframe::egui::{Key, TextEdit, Ui};

/// Single-line FEN field that tracks the displayed position until the user
/// edits it.
#[derive(Debug, Default)]
pub struct FenInput {
    last_known_fen: String,
    prospective_fen: String,
}

impl FenInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entered FEN when the user presses enter.
    pub fn show(&mut self, ui: &mut Ui, current_fen: &str) -> Option<String> {
        if self.last_known_fen != current_fen {
            self.last_known_fen = current_fen.to_string();
            self.prospective_fen = current_fen.to_string();
        }

        let response =
            ui.add(TextEdit::singleline(&mut self.prospective_fen).desired_width(f32::INFINITY));

        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            Some(self.prospective_fen.trim().to_string())
        } else {
            None
        }
    }

    /// Puts the field back to the displayed position.
    pub fn revert(&mut self) {
        self.prospective_fen = self.last_known_fen.clone();
    }
}
