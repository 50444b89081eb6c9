//! Icon provider system for the application.
//!
//! Supports multiple icon sets: NerdFonts, Unicode, and ASCII fallback.
//! Auto-detects terminal capabilities and allows user override via the
//! `HOMEBASE_ICONS` environment variable.

use crate::catalog::{FileKind, PlatformIcon};
use std::env;
use std::str::FromStr;

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// NerdFonts icons (requires NerdFont-patched font)
    NerdFonts,
    /// Unicode symbols (works in most modern terminals)
    Unicode,
    /// ASCII-only fallback (maximum compatibility)
    Ascii,
}

impl FromStr for IconSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => Ok(IconSet::NerdFonts),
            "unicode" | "emoji" => Ok(IconSet::Unicode),
            "ascii" | "plain" => Ok(IconSet::Ascii),
            other => Err(format!("Unknown icon set: {}", other)),
        }
    }
}

impl IconSet {
    /// Detect the best icon set for the current terminal
    pub fn detect() -> Self {
        if let Ok(icons) = env::var("HOMEBASE_ICONS") {
            return icons.parse().unwrap_or(IconSet::Unicode);
        }

        if Self::likely_supports_nerd_fonts() {
            IconSet::NerdFonts
        } else {
            IconSet::Unicode
        }
    }

    /// Heuristic to detect if terminal likely supports NerdFonts
    fn likely_supports_nerd_fonts() -> bool {
        if let Ok(term_program) = env::var("TERM_PROGRAM") {
            matches!(
                term_program.as_str(),
                "iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty"
            )
        } else {
            false
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconSet::NerdFonts => "NerdFonts",
            IconSet::Unicode => "Unicode",
            IconSet::Ascii => "ASCII",
        }
    }
}

/// Icon provider that returns appropriate icons based on the selected icon set
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

macro_rules! icon {
    ($name:ident, $nerd:expr, $unicode:expr, $ascii:expr) => {
        pub fn $name(&self) -> &'static str {
            match self.icon_set {
                IconSet::NerdFonts => $nerd,
                IconSet::Unicode => $unicode,
                IconSet::Ascii => $ascii,
            }
        }
    };
}

impl Icons {
    /// Create a new icon provider with auto-detection
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    /// Create an icon provider from config
    /// Priority: HOMEBASE_ICONS env var > config value > auto-detect
    pub fn from_config(config: &crate::config::Config) -> Self {
        if env::var("HOMEBASE_ICONS").is_ok() {
            return Self::new();
        }
        match config.get_icon_set() {
            Some(icon_set) => Self::with_icon_set(icon_set),
            None => Self::new(),
        }
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    // === Chrome ===
    icon!(rocket, "\u{f135}", "🚀", "[*]");
    icon!(languages, "\u{f1ab}", "🌐", "[A]");
    icon!(sun, "\u{f185}", "☀", "[o]");
    icon!(moon, "\u{f186}", "☾", "[c]");
    icon!(log_in, "\u{f090}", "→", "[>]");
    icon!(log_out, "\u{f08b}", "←", "[<]");
    icon!(user_plus, "\u{f234}", "+", "[+]");

    // === Sections ===
    icon!(dashboard, "\u{f009}", "▦", "[#]");
    icon!(user, "\u{f007}", "☺", "[U]");
    icon!(tv, "\u{f26c}", "▣", "[TV]");
    icon!(gamepad, "\u{f11b}", "♞", "[G]");
    icon!(folder, "\u{f07c}", "▤", "[D]");
    icon!(settings, "\u{f013}", "⚙", "[S]");

    // === Items and actions ===
    icon!(play, "\u{f04b}", "▶", "[>]");
    icon!(radio, "\u{f2ce}", "◉", "[R]");
    icon!(music, "\u{f001}", "♪", "[M]");
    icon!(file, "\u{f15c}", "▯", "[F]");
    icon!(archive, "\u{f1c6}", "▩", "[Z]");
    icon!(download, "\u{f019}", "↓", "[v]");
    icon!(upload, "\u{f093}", "↑", "[^]");
    icon!(eye, "\u{f06e}", "◎", "[o]");
    icon!(trash, "\u{f1f8}", "✗", "[x]");
    icon!(plus, "\u{f067}", "+", "[+]");
    icon!(key, "\u{f084}", "⚷", "[K]");
    icon!(more, "\u{f142}", "⋮", "[:]");

    // === Switches ===
    icon!(switch_on, "\u{f205}", "◉", "[x]");
    icon!(switch_off, "\u{f204}", "○", "[ ]");

    /// Glyph for a platform tile
    pub fn platform(&self, icon: PlatformIcon) -> &'static str {
        match icon {
            PlatformIcon::Tv => self.tv(),
            PlatformIcon::Play => self.play(),
            PlatformIcon::Radio => self.radio(),
            PlatformIcon::Music => self.music(),
        }
    }

    /// Glyph for a file row
    pub fn file_kind(&self, kind: FileKind) -> &'static str {
        match kind {
            FileKind::Document => self.file(),
            FileKind::Archive => self.archive(),
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_detection() {
        let icon_set = IconSet::detect();
        assert!(matches!(
            icon_set,
            IconSet::NerdFonts | IconSet::Unicode | IconSet::Ascii
        ));
    }

    #[test]
    fn test_icon_set_from_str() {
        assert_eq!("nerd".parse::<IconSet>().unwrap(), IconSet::NerdFonts);
        assert_eq!("ASCII".parse::<IconSet>().unwrap(), IconSet::Ascii);
        assert!("wingdings".parse::<IconSet>().is_err());
    }

    #[test]
    fn test_all_icon_sets_have_values() {
        for icon_set in [IconSet::NerdFonts, IconSet::Unicode, IconSet::Ascii] {
            let icons = Icons::with_icon_set(icon_set);
            assert!(!icons.rocket().is_empty());
            assert!(!icons.gamepad().is_empty());
            assert!(!icons.platform(PlatformIcon::Music).is_empty());
            assert!(!icons.file_kind(FileKind::Archive).is_empty());
            assert!(!icons.switch_on().is_empty());
        }
    }
}
