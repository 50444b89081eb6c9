use crate::styles::theme;
use ratatui::prelude::*;

/// Get the border style for a focused pane
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Get the border style for an unfocused pane
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

/// Border style for a pane given its focus
pub fn pane_border_style(focused: bool) -> Style {
    if focused {
        focused_border_style()
    } else {
        unfocused_border_style()
    }
}

/// Get the text style for placeholder text
pub fn input_placeholder_style() -> Style {
    theme().muted_style().add_modifier(Modifier::ITALIC)
}

/// Get the text style for normal input text
pub fn input_text_style() -> Style {
    theme().text_style()
}
