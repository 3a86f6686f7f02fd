//! UI theme: every colour the renderer uses, in one place.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub title_bg: Color,
    pub title_fg: Color,
    pub menu_bar_bg: Color,
    pub menu_bar_fg: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub muted_fg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub toolbar_bg: Color,
    pub toolbar_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub dialog_border: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_bg: Color::Indexed(4),        // Blue
            title_fg: Color::Indexed(15),       // White
            menu_bar_bg: Color::Indexed(7),     // Gray
            menu_bar_fg: Color::Indexed(0),     // Black
            menu_bg: Color::Indexed(7),
            menu_fg: Color::Indexed(0),
            menu_selected_bg: Color::Indexed(4),
            menu_selected_fg: Color::Indexed(15),
            muted_fg: Color::Indexed(8),        // DarkGray
            editor_bg: Color::Reset,
            editor_fg: Color::Reset,
            selection_bg: Color::Indexed(6),    // Cyan
            selection_fg: Color::Indexed(0),
            toolbar_bg: Color::Indexed(8),
            toolbar_fg: Color::Indexed(15),
            status_bg: Color::Indexed(7),
            status_fg: Color::Indexed(0),
            dialog_bg: Color::Indexed(7),
            dialog_fg: Color::Indexed(0),
            dialog_border: Color::Indexed(4),
            accent_fg: Color::Indexed(4),
            error_fg: Color::Indexed(1),        // Red
        }
    }
}
