use ratatui::style::Color;

/// Color theme for the TUI. There is no config surface, so the palette is
/// fixed at build time.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub yellow: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x00, 0x10, 0x14),
            text: Color::Rgb(0xA8, 0xD8, 0xD0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFF, 0x8A, 0x3C),
            dim: Color::Rgb(0x5E, 0x7B, 0x76),
            green: Color::Rgb(0x3C, 0xE8, 0x8C),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            selection_bg: Color::Rgb(0x14, 0x3A, 0x33),
        }
    }
}
