//! Preset keymaps: Standard, Vim, Emacs
//!
//! Every preset shares the function-key row (F1 help, F2 language, F3 theme)
//! and Ctrl+Q / Ctrl+C to quit, so those work even while typing.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc and single-letter shortcuts
    #[default]
    Standard,
    /// hjkl movement
    Vim,
    /// Ctrl+N/P movement and Alt-prefixed shortcuts
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings present in every preset
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("f2", Action::ToggleLocale),
        KeyBinding::new("f3", Action::ToggleTheme),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        // Actions
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("a", Action::Create),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("t", Action::ToggleTheme),
        KeyBinding::new("l", Action::ToggleLocale),
        KeyBinding::new("o", Action::Logout),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("g", Action::GoToTop),
        KeyBinding::new("G", Action::GoToEnd),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("$", Action::End),
        // Actions
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("a", Action::Create),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("t", Action::ToggleTheme),
        KeyBinding::new("s", Action::ToggleLocale),
        KeyBinding::new("o", Action::Logout),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+<", Action::GoToTop),
        KeyBinding::new("alt+>", Action::GoToEnd),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        // Actions
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("alt+a", Action::Create),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        // Global
        KeyBinding::new("alt+?", Action::Help),
        KeyBinding::new("alt+t", Action::ToggleTheme),
        KeyBinding::new("alt+l", Action::ToggleLocale),
        KeyBinding::new("alt+o", Action::Logout),
    ]
}
