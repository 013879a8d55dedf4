use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::PieceType;

/// Piece a pawn turns into when it reaches the last rank. No prompt is shown;
/// every promotion uses the configured piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromotionPolicy {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPolicy {
    pub const fn piece_type(self) -> PieceType {
        match self {
            PromotionPolicy::Queen => PieceType::Queen,
            PromotionPolicy::Rook => PieceType::Rook,
            PromotionPolicy::Bishop => PieceType::Bishop,
            PromotionPolicy::Knight => PieceType::Knight,
        }
    }
}

impl Display for PromotionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PromotionPolicy::Queen => "queen",
            PromotionPolicy::Rook => "rook",
            PromotionPolicy::Bishop => "bishop",
            PromotionPolicy::Knight => "knight",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown promotion piece {0:?}, expected queen, rook, bishop or knight")]
pub struct ParsePromotionPolicyError(pub String);

impl FromStr for PromotionPolicy {
    type Err = ParsePromotionPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "q" | "queen" => Ok(PromotionPolicy::Queen),
            "r" | "rook" => Ok(PromotionPolicy::Rook),
            "b" | "bishop" => Ok(PromotionPolicy::Bishop),
            "n" | "knight" => Ok(PromotionPolicy::Knight),
            _ => Err(ParsePromotionPolicyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    pub promotion: PromotionPolicy,
    /// Draw the board from black's side on start.
    pub start_flipped: bool,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn promotion(mut self, promotion: PromotionPolicy) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn start_flipped(mut self, start_flipped: bool) -> Self {
        self.start_flipped = start_flipped;
        self
    }
}
