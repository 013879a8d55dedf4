//! Contract with the rules engine.
//!
//! Everything that needs chess knowledge (legality, check detection,
//! notation, FEN) goes through [`RulesEngine`]. The controller never inspects
//! a [`Position`] itself; it only stores positions and hands them back.

use std::fmt::Display;

use thiserror::Error;

use crate::{Color, Piece, PieceType, Square};

mod shakmaty_engine;

pub use shakmaty_engine::ShakmatyEngine;

/// Serialized snapshot of the full board state, as produced by
/// [`RulesEngine::fen`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(String);

impl Position {
    pub fn new(fen: impl Into<String>) -> Self {
        Self(fen.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A move attempt. `promotion` is only consulted when the move actually
/// promotes a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

/// A move the engine accepted and played.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
    /// Standard algebraic notation including `+`/`#` suffixes.
    pub san: String,
}

impl MoveRecord {
    /// A request that replays exactly this move.
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl DrawReason {
    pub const fn description(self) -> &'static str {
        match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Malformed position {fen:?}: {reason}")]
    MalformedPosition { fen: String, reason: String },
}

/// The operations the board controller needs from a chess rules library.
///
/// Implementations own one live game state. `load` and `try_move` are the only
/// mutating operations.
pub trait RulesEngine {
    /// A fresh engine in the standard starting position.
    fn new() -> Self
    where
        Self: Sized;

    /// Replaces the live state with `position`. The move history restarts
    /// from it. On failure the live state is unchanged.
    fn load(&mut self, position: &Position) -> Result<(), EngineError>;

    fn get(&self, square: Square) -> Option<Piece>;

    /// Side to move.
    fn turn(&self) -> Color;

    /// Plays the move if it is legal. Returns `None` for an illegal request,
    /// which leaves the live state untouched.
    fn try_move(&mut self, request: MoveRequest) -> Option<MoveRecord>;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Why the game is drawn, if it is.
    fn draw_reason(&self) -> Option<DrawReason>;

    fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    fn is_check(&self) -> bool;

    fn fen(&self) -> Position;

    /// The full grid, rank-major with row 0 being rank 8.
    fn board(&self) -> [[Option<Piece>; 8]; 8];

    /// SAN of every move played since the last `load` (or creation).
    fn history(&self) -> Vec<String>;

    /// Game transcript in PGN.
    fn pgn(&self) -> String;

    /// Full-move counter of the live position.
    fn move_number(&self) -> u32;

    /// Squares the piece on `from` can legally move to.
    fn destinations(&self, from: Square) -> Vec<Square>;

    /// Square of the king of the side to move when it is in check.
    fn checked_king(&self) -> Option<Square> {
        if !self.is_check() {
            return None;
        }

        let king = PieceType::King.with_color(self.turn());
        Square::all().find(|&square| self.get(square) == Some(king))
    }
}
