use crate::{visual_to_canonical, GameStatus, Piece, Square};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    /// Canonical grid, row 0 is rank 8.
    pub grid: [[Option<Piece>; 8]; 8],
    pub status: GameStatus,
    /// SAN of every move from the initial position to the displayed one.
    pub moves: Vec<String>,
    pub move_rows: Vec<MoveRow>,
    pub selected: Option<Square>,
    /// Legal destinations of the selected piece.
    pub targets: Vec<Square>,
    pub last_move: Option<(Square, Square)>,
    pub checked_king: Option<Square>,
    pub flipped: bool,
    pub pointer: usize,
    pub history_len: usize,
    pub fen: String,
}

/// A numbered line of the move table. Each half holds the move's index into
/// [`BoardView::moves`] and its SAN.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRow {
    pub number: u32,
    pub white: Option<(usize, String)>,
    pub black: Option<(usize, String)>,
}

/// One drawn cell: where it is drawn and which square it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCell {
    pub visual_row: usize,
    pub visual_col: usize,
    pub square: Square,
    pub piece: Option<Piece>,
}

impl BoardView {
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.coords();
        self.grid[row][col]
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.history_len
    }

    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Cells in drawing order, top-left first, honoring the flip.
    pub fn cells(&self) -> impl Iterator<Item = ViewCell> + '_ {
        (0..8).flat_map(move |visual_row| {
            (0..8).map(move |visual_col| {
                let (row, col) = visual_to_canonical(self.flipped, visual_row, visual_col);
                ViewCell {
                    visual_row,
                    visual_col,
                    square: Square::from_coords(row, col),
                    piece: self.grid[row][col],
                }
            })
        })
    }
}

/// Pairs moves into numbered rows. A game that starts with black to move
/// gets a leading row with an empty white half.
pub fn move_rows(moves: &[String], first_number: u32, white_first: bool) -> Vec<MoveRow> {
    let mut rows = Vec::new();
    let mut move_iter = moves.iter().cloned().enumerate().peekable();
    let mut number = first_number;

    if !white_first && move_iter.peek().is_some() {
        rows.push(MoveRow {
            number,
            white: None,
            black: move_iter.next(),
        });
        number += 1;
    }

    while let Some(white) = move_iter.next() {
        rows.push(MoveRow {
            number,
            white: Some(white),
            black: move_iter.next(),
        });
        number += 1;
    }

    rows
}
