//! Board, selection and history bookkeeping for an interactive chessboard.
//!
//! All chess rules live behind the [`RulesEngine`] trait; this crate only
//! tracks which position is displayed, which square is selected, and how
//! clicks turn into move attempts.

pub mod config;
pub mod controller;
pub mod engine;
pub mod history;
pub mod piece;
pub mod selection;
pub mod square;
pub mod status;
pub mod view;

pub use config::{ControllerConfig, ParsePromotionPolicyError, PromotionPolicy};
pub use controller::BoardController;
pub use engine::{
    DrawReason, EngineError, MoveRecord, MoveRequest, Position, RulesEngine, ShakmatyEngine,
};
pub use history::HistoryLog;
pub use piece::{Color, Piece, PieceType};
pub use selection::{ClickAction, Selection};
pub use square::{visual_to_canonical, ParseSquareError, Square};
pub use status::GameStatus;
pub use view::{BoardView, MoveRow, ViewCell};
