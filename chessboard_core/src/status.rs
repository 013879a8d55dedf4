use std::fmt::Display;

use crate::{Color, DrawReason, RulesEngine};

/// Human-facing summary of the live position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
    Check { to_move: Color },
    ToMove(Color),
}

impl GameStatus {
    /// Checkmate wins over stalemate, which wins over any other draw, then
    /// check, then a plain side-to-move line.
    pub fn derive<E: RulesEngine>(engine: &E) -> Self {
        let to_move = engine.turn();

        if engine.is_checkmate() {
            // The side that delivered mate is the one not on move.
            GameStatus::Checkmate {
                winner: to_move.flip(),
            }
        } else if engine.is_stalemate() {
            GameStatus::Stalemate
        } else if let Some(reason) = engine.draw_reason() {
            GameStatus::Draw(reason)
        } else if engine.is_check() {
            GameStatus::Check { to_move }
        } else {
            GameStatus::ToMove(to_move)
        }
    }

    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "Checkmate. {winner} wins."),
            GameStatus::Stalemate => write!(f, "Stalemate."),
            GameStatus::Draw(reason) => write!(f, "Draw by {}.", reason.description()),
            GameStatus::Check { to_move } => write!(f, "{to_move} to move, in check."),
            GameStatus::ToMove(to_move) => write!(f, "{to_move} to move."),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MoveRequest, PieceType, Position, ShakmatyEngine};
    use pretty_assertions::assert_eq;

    fn engine_at(fen: &str) -> ShakmatyEngine {
        let mut engine = ShakmatyEngine::new();
        engine.load(&Position::new(fen)).unwrap();
        engine
    }

    #[test]
    fn side_to_move() {
        let mut engine = ShakmatyEngine::new();
        assert_eq!(GameStatus::derive(&engine), GameStatus::ToMove(Color::White));
        assert_eq!(GameStatus::derive(&engine).to_string(), "White to move.");

        engine.try_move(MoveRequest {
            from: "e2".parse().unwrap(),
            to: "e4".parse().unwrap(),
            promotion: Some(PieceType::Queen),
        })
        .unwrap();
        assert_eq!(GameStatus::derive(&engine).to_string(), "Black to move.");
    }

    #[test]
    fn check() {
        // Black rook gives check along the e-file.
        let engine = engine_at("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1");
        let status = GameStatus::derive(&engine);

        assert_eq!(
            status,
            GameStatus::Check {
                to_move: Color::White
            }
        );
        assert_eq!(status.to_string(), "White to move, in check.");
        assert!(!status.is_game_over());
    }

    #[test]
    fn checkmate_names_the_side_that_moved_last() {
        // Back rank mate delivered by white.
        let engine = engine_at("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        let status = GameStatus::derive(&engine);

        assert_eq!(
            status,
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
        assert_eq!(status.to_string(), "Checkmate. White wins.");
        assert!(status.is_game_over());
    }

    #[test]
    fn stalemate() {
        let engine = engine_at("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(GameStatus::derive(&engine), GameStatus::Stalemate);
        assert_eq!(GameStatus::derive(&engine).to_string(), "Stalemate.");
    }

    #[test]
    fn other_draws() {
        let engine = engine_at("8/8/8/4k3/8/8/8/4K3 w - - 0 1");
        let status = GameStatus::derive(&engine);

        assert_eq!(status, GameStatus::Draw(DrawReason::InsufficientMaterial));
        assert_eq!(status.to_string(), "Draw by insufficient material.");
    }
}
