use crate::Square;

/// The square picked as the source of the next move, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Selected(Square),
}

/// What a click asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Select(Square),
    Deselect,
    AttemptMove { from: Square, to: Square },
    Ignore,
}

impl Selection {
    pub fn square(self) -> Option<Square> {
        match self {
            Selection::Empty => None,
            Selection::Selected(square) => Some(square),
        }
    }

    /// Decides what a click on `clicked` means. `clicked_is_own` is whether
    /// the clicked square holds a piece of the side to move.
    pub fn on_click(self, clicked: Square, clicked_is_own: bool) -> ClickAction {
        match self {
            Selection::Empty if clicked_is_own => ClickAction::Select(clicked),
            Selection::Empty => ClickAction::Ignore,
            Selection::Selected(from) if from == clicked => ClickAction::Deselect,
            Selection::Selected(from) => ClickAction::AttemptMove { from, to: clicked },
        }
    }

    /// Selection after the engine refused a move onto `to`: switch to `to`
    /// if it holds one of our pieces, otherwise keep the current selection.
    pub fn after_rejected(self, to: Square, to_is_own: bool) -> Selection {
        if to_is_own {
            Selection::Selected(to)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn empty_selects_only_own_pieces() {
        assert_eq!(
            Selection::Empty.on_click(sq("e2"), true),
            ClickAction::Select(sq("e2"))
        );
        assert_eq!(
            Selection::Empty.on_click(sq("e7"), false),
            ClickAction::Ignore
        );
    }

    #[test]
    fn clicking_selected_square_deselects() {
        assert_eq!(
            Selection::Selected(sq("e2")).on_click(sq("e2"), true),
            ClickAction::Deselect
        );
    }

    #[test]
    fn clicking_elsewhere_attempts_move() {
        assert_eq!(
            Selection::Selected(sq("e2")).on_click(sq("e4"), false),
            ClickAction::AttemptMove {
                from: sq("e2"),
                to: sq("e4")
            }
        );
        assert_eq!(
            Selection::Selected(sq("e2")).on_click(sq("d2"), true),
            ClickAction::AttemptMove {
                from: sq("e2"),
                to: sq("d2")
            }
        );
    }

    #[test]
    fn rejected_move_reselects_or_keeps() {
        let selected = Selection::Selected(sq("e2"));

        assert_eq!(
            selected.after_rejected(sq("d2"), true),
            Selection::Selected(sq("d2"))
        );
        assert_eq!(selected.after_rejected(sq("e5"), false), selected);
    }
}
