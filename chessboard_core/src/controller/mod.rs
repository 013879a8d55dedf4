use log::{debug, info, warn};

use crate::{
    history::HistoryLog,
    view::{move_rows, BoardView},
    ClickAction, ControllerConfig, EngineError, GameStatus, MoveRecord, MoveRequest, Position,
    RulesEngine, Selection, ShakmatyEngine, Square,
};


/// Turns clicks and button presses into engine calls and keeps the displayed
/// position in step with the history log.
///
/// Every public operation runs to completion synchronously and ends with
/// [`BoardController::commit`], so the returned [`BoardView`] always reflects
/// the state after the operation.
#[derive(Debug)]
pub struct BoardController<E: RulesEngine = ShakmatyEngine> {
    engine: E,
    history: HistoryLog,
    selection: Selection,
    flipped: bool,
    config: ControllerConfig,

    first_move_number: u32,
    white_first: bool,
}

impl BoardController<ShakmatyEngine> {
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_engine(ShakmatyEngine::default(), config)
    }
}

impl Default for BoardController<ShakmatyEngine> {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl<E: RulesEngine> BoardController<E> {
    /// Builds a controller around `engine`, taking its live position as the
    /// start of the history.
    pub fn with_engine(engine: E, config: ControllerConfig) -> Self {
        let history = HistoryLog::new(engine.fen());
        let first_move_number = engine.move_number();
        let white_first = engine.turn().is_white();

        Self {
            engine,
            history,
            selection: Selection::Empty,
            flipped: config.start_flipped,
            config,
            first_move_number,
            white_first,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Handles a click on the canonical grid cell `(row, col)`.
    pub fn click(&mut self, row: usize, col: usize) -> BoardView {
        self.click_square(Square::from_coords(row, col))
    }

    pub fn click_square(&mut self, square: Square) -> BoardView {
        let is_own = self.is_own_piece(square);

        match self.selection.on_click(square, is_own) {
            ClickAction::Select(square) => {
                debug!("selected {square}");
                self.selection = Selection::Selected(square);
            }
            ClickAction::Deselect => {
                debug!("deselected {square}");
                self.selection = Selection::Empty;
            }
            ClickAction::AttemptMove { from, to } => {
                if self.apply_move(from, to).is_none() {
                    self.selection = self.selection.after_rejected(to, is_own);
                }
            }
            ClickAction::Ignore => (),
        }

        self.commit()
    }

    /// Asks the engine to play `from` to `to`, promoting according to the
    /// configured policy. On success the history is truncated at the pointer,
    /// the new position appended and the selection cleared. A rejected move
    /// changes nothing.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let request = MoveRequest {
            from,
            to,
            promotion: Some(self.config.promotion.piece_type()),
        };

        let Some(record) = self.engine.try_move(request) else {
            debug!("engine rejected {from}{to}");
            return None;
        };

        info!("played {} ({from}{to})", record.san);

        self.history.push(self.engine.fen(), record.clone());
        self.selection = Selection::Empty;
        self.check_in_sync();

        Some(record)
    }

    /// Steps back one position. Does nothing at the start of the history.
    pub fn undo(&mut self) -> BoardView {
        if self.history.step_back().is_some() {
            self.restore();
        }

        self.commit()
    }

    /// Steps forward one position. Does nothing at the end of the history.
    pub fn redo(&mut self) -> BoardView {
        if self.history.step_forward().is_some() {
            self.restore();
        }

        self.commit()
    }

    /// Jumps to history entry `index` (clamped), keeping the rest of the log.
    pub fn go_to(&mut self, index: usize) -> BoardView {
        if self.history.seek(index).is_some() {
            self.restore();
        }

        self.commit()
    }

    /// Throws away the game and starts over from the standard position.
    pub fn new_game(&mut self) -> BoardView {
        info!("new game");
        self.reset_with(E::new());
        self.commit()
    }

    /// Starts a new game from `position`. A malformed position is reported
    /// and leaves the current game untouched.
    pub fn new_game_from(&mut self, position: &Position) -> Result<BoardView, EngineError> {
        let mut engine = E::new();
        if let Err(err) = engine.load(position) {
            warn!("{err}");
            return Err(err);
        }

        info!("new game from {position}");
        self.reset_with(engine);
        Ok(self.commit())
    }

    pub fn flip(&mut self) -> BoardView {
        self.flipped = !self.flipped;
        self.commit()
    }

    /// PGN of the line from the initial position up to the displayed one.
    pub fn transcript(&self) -> String {
        self.engine.pgn()
    }

    /// Derives the full view from the live engine state.
    pub fn commit(&self) -> BoardView {
        let moves: Vec<String> = self
            .history
            .played()
            .map(|record| record.san.clone())
            .collect();
        let move_rows = move_rows(&moves, self.first_move_number, self.white_first);

        let selected = self.selection.square();
        let targets = selected
            .map(|square| self.engine.destinations(square))
            .unwrap_or_default();

        BoardView {
            grid: self.engine.board(),
            status: GameStatus::derive(&self.engine),
            moves,
            move_rows,
            selected,
            targets,
            last_move: self
                .history
                .last_played()
                .map(|record| (record.from, record.to)),
            checked_king: self.engine.checked_king(),
            flipped: self.flipped,
            pointer: self.history.pointer(),
            history_len: self.history.len(),
            fen: self.history.current().to_string(),
        }
    }

    fn is_own_piece(&self, square: Square) -> bool {
        self.engine
            .get(square)
            .is_some_and(|piece| piece.color == self.engine.turn())
    }

    fn reset_with(&mut self, engine: E) {
        self.engine = engine;
        self.history = HistoryLog::new(self.engine.fen());
        self.first_move_number = self.engine.move_number();
        self.white_first = self.engine.turn().is_white();
        self.selection = Selection::Empty;
    }

    /// Rebuilds the engine on the line up to the pointer. Loading the
    /// position alone would lose the move list and repetition counts.
    fn restore(&mut self) {
        let mut engine = E::new();
        Self::load_or_panic(&mut engine, self.history.initial());

        for record in self.history.played() {
            if engine.try_move(record.request()).is_none() {
                panic!("history holds a move the engine refused to replay: {record:?}");
            }
        }

        self.engine = engine;
        self.selection = Selection::Empty;
        debug!("moved to history entry {}", self.history.pointer());
        self.check_in_sync();
    }

    fn load_or_panic(engine: &mut E, position: &Position) {
        if let Err(err) = engine.load(position) {
            panic!("history holds a position the engine cannot load: {err}");
        }
    }

    fn check_in_sync(&self) {
        debug_assert_eq!(
            self.history.current(),
            &self.engine.fen(),
            "displayed history entry and engine position diverged"
        );
    }
}
