use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const TITLE_TEXT: Color = Color::Rgb(0xa5, 0xb4, 0xfc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DISABLED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
