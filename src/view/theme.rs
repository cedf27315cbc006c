//! UI palette.

use ratatui::style::Color;

/// Colors for the whole UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: Color,
    pub label: Color,
    pub text: Color,
    pub border: Color,
    pub focused: Color,
    pub placeholder: Color,
    pub cursor: Color,
    pub table_header: Color,
    pub selection_bg: Color,
    pub status: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::White,
            label: Color::Gray,
            text: Color::White,
            border: Color::DarkGray,
            focused: Color::Cyan,
            placeholder: Color::DarkGray,
            cursor: Color::White,
            table_header: Color::Cyan,
            selection_bg: Color::Rgb(40, 40, 60),
            status: Color::Gray,
        }
    }
}
