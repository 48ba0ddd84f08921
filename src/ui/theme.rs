use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TILE_BORDER: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TILE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MATCHED_BG: Color = Color::Rgb(0x00, 0xce, 0xd1);
pub const MATCHED_TEXT: Color = Color::Rgb(0x10, 0x10, 0x10);
pub const FOCUS_BORDER: Color = Color::Rgb(0xfa, 0xcc, 0x15);
