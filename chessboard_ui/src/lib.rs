pub mod board_style;
pub mod board_ui;
mod constants;

pub use board_style::BoardStyle;
pub use board_ui::{BoardUI, BoardUIProps, BoardUIResponse};
