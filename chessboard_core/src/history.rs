use crate::{MoveRecord, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    position: Position,
    /// The move that led to this position. Only the first entry has none.
    played: Option<MoveRecord>,
}

/// Linear log of positions with a pointer to the one on display.
///
/// The log is never empty and the pointer always indexes an entry. Pushing a
/// new position while the pointer is behind the end drops everything after
/// the pointer first, so there is only ever one line of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    pointer: usize,
}

impl HistoryLog {
    pub fn new(initial: Position) -> Self {
        Self {
            entries: vec![HistoryEntry {
                position: initial,
                played: None,
            }],
            pointer: 0,
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the log always holds the initial position.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn current(&self) -> &Position {
        &self.entries[self.pointer].position
    }

    pub fn initial(&self) -> &Position {
        &self.entries[0].position
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer < self.last_index()
    }

    /// Truncates the log after the pointer, appends `position` and moves the
    /// pointer onto it.
    pub fn push(&mut self, position: Position, played: MoveRecord) {
        self.entries.truncate(self.pointer + 1);
        self.entries.push(HistoryEntry {
            position,
            played: Some(played),
        });
        self.pointer = self.last_index();
    }

    /// Moves the pointer back one entry. Returns the new current position, or
    /// `None` when already at the start.
    pub fn step_back(&mut self) -> Option<&Position> {
        if !self.can_undo() {
            return None;
        }

        self.pointer -= 1;
        Some(self.current())
    }

    /// Moves the pointer forward one entry. Returns the new current position,
    /// or `None` when already at the end.
    pub fn step_forward(&mut self) -> Option<&Position> {
        if !self.can_redo() {
            return None;
        }

        self.pointer += 1;
        Some(self.current())
    }

    /// Moves the pointer to `index`, clamped to the log. Returns the new
    /// current position if the pointer moved.
    pub fn seek(&mut self, index: usize) -> Option<&Position> {
        let index = index.min(self.last_index());
        if index == self.pointer {
            return None;
        }

        self.pointer = index;
        Some(self.current())
    }

    /// Moves leading from the initial position to the current one.
    pub fn played(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries[1..=self.pointer]
            .iter()
            .filter_map(|entry| entry.played.as_ref())
    }

    /// The move that produced the current position.
    pub fn last_played(&self) -> Option<&MoveRecord> {
        self.entries[self.pointer].played.as_ref()
    }
}
