use chessboard_core::{ControllerConfig, PromotionPolicy};
use clap::Parser;

/// Interactive chessboard with undo/redo and PGN export.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Piece pawns promote to.
    #[arg(long, default_value_t = PromotionPolicy::Queen)]
    pub promotion: PromotionPolicy,

    /// Draw the board from black's side.
    #[arg(long)]
    pub flipped: bool,

    /// Start from this position instead of the standard one.
    #[arg(long)]
    pub fen: Option<String>,
}

impl Args {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::new()
            .promotion(self.promotion)
            .start_flipped(self.flipped)
    }
}
