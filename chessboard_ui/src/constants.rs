use egui::Color32;

pub const DEFAULT_BOARD_SIZE: f32 = 640.0;
pub const MIN_BOARD_SIZE: f32 = 160.0;

pub const BOARD_WHITE: Color32 = Color32::from_rgb(0xf0, 0xd9, 0xb5);
pub const BOARD_BLACK: Color32 = Color32::from_rgb(0xb5, 0x88, 0x63);
pub const BOARD_WHITE_FADED: Color32 = Color32::from_rgb(0xd8, 0xd2, 0xc8);
pub const BOARD_BLACK_FADED: Color32 = Color32::from_rgb(0xa8, 0x9c, 0x92);
pub const BOARD_LAST_MOVE: Color32 = Color32::from_rgba_premultiplied(0x66, 0x85, 0x00, 0x68);
pub const BOARD_SELECTED: Color32 = Color32::from_rgba_premultiplied(20, 85, 30, 0xb0);

pub const MOVE_COLOR: Color32 = Color32::from_rgba_premultiplied(13, 72, 16, 154);

pub const WHITE_PIECE_FILL: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xf5);
pub const WHITE_PIECE_INK: Color32 = Color32::from_rgb(0x30, 0x30, 0x30);
pub const BLACK_PIECE_FILL: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2a);
pub const BLACK_PIECE_INK: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
