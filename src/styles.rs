//! Theme and style system for homebase
//!
//! Provides consistent styling across the application with support for
//! light and dark themes. The active palette is a process-wide value so that
//! toggling the theme restyles every widget on the next frame, the same way a
//! class on the document root restyles a web page.

use crate::catalog::BrandColor;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Light,
    primary: Color::Blue,
    secondary: Color::Magenta,
    accent: Color::Cyan,
    success: Color::Green,
    warning: Color::Rgb(180, 120, 0),
    error: Color::Red,
    text: Color::Black,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Blue,
    border: Color::DarkGray,
    border_focused: Color::Blue,
    highlight_bg: Color::Gray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Primary Colors ===
    /// Main accent color (borders, titles, key UI elements)
    pub primary: Color,
    /// Secondary accent (games)
    pub secondary: Color,
    /// Tertiary accent (files)
    pub accent: Color,

    // === Semantic Colors ===
    pub success: Color,
    pub warning: Color,
    /// Error states and the danger zone
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    /// Emphasized text (key hints, counts)
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: Color::Cyan,
            secondary: Color::Magenta,
            accent: Color::LightBlue,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,

            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            // Darker variants for light backgrounds
            primary: Color::Blue,
            secondary: Color::Magenta,
            accent: Color::Cyan,

            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,

            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    /// No-color theme - for terminals where colors should be disabled
    ///
    /// Style helpers below avoid setting fg/bg in this mode so the UI uses the
    /// terminal defaults without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,

            primary: Color::Reset,
            secondary: Color::Reset,
            accent: Color::Reset,

            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,

            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,

            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_no_color(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints, counts)
    pub fn emphasis_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    pub fn success_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Border shape: thick when focused, rounded otherwise
    pub fn border_type(&self, focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    /// Style for list item highlight (selected row)
    pub fn highlight_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled button / active sidebar entry
    pub fn button_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Background dimming behind modals
    pub fn dim_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted).add_modifier(Modifier::DIM)
    }

    /// Background style
    pub fn background_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }

    /// Foreground in `color`, or bold when colors are disabled
    pub fn fg_style(&self, color: Color) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(color)
    }

    /// Terminal color for a platform's brand tile
    pub fn brand_color(&self, color: BrandColor) -> Color {
        if self.is_no_color() {
            return Color::Reset;
        }
        match color {
            BrandColor::Red => Color::Red,
            BrandColor::Purple => Color::Magenta,
            BrandColor::Green => Color::Green,
        }
    }
}
