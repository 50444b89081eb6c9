//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! plus user overrides from the `[keymap]` table of the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    /// Resolve a key event to an action.
    ///
    /// An action that has any override loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides first, then preset bindings for actions not overridden
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action` (e.g. "F2")
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Display string for every key bound to `action`, joined with "/"
    pub fn keys_for(&self, action: Action) -> String {
        let keys: Vec<String> = self
            .all_bindings()
            .iter()
            .filter(|b| b.action == action)
            .map(KeyBinding::display)
            .collect();
        if keys.is_empty() {
            format!("{:?}", action)
        } else {
            keys.join("/")
        }
    }

    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown)
        )
    }

    /// Footer hints for the signed-out form
    pub fn footer_auth(&self) -> String {
        format!(
            "{}: Next field | {}: Submit | {}: Language | {}: Theme | {}: Help | {}: Quit",
            self.key_for(Action::NextTab),
            self.key_for(Action::Confirm),
            self.keys_for(Action::ToggleLocale),
            self.keys_for(Action::ToggleTheme),
            self.keys_for(Action::Help),
            self.keys_for(Action::Quit),
        )
    }

    /// Footer hints for the signed-in dashboard
    pub fn footer_home(&self) -> String {
        format!(
            "{}: Navigate | 1-6: Section | {}: Pane | {}: Add | {}: Language | {}: Theme | {}: Log out | {}: Help | {}: Quit",
            self.navigation_display(),
            self.key_for(Action::NextTab),
            self.key_for(Action::Create),
            self.key_for(Action::ToggleLocale),
            self.key_for(Action::ToggleTheme),
            self.key_for(Action::Logout),
            self.key_for(Action::Help),
            self.key_for(Action::Quit),
        )
    }

    /// Footer hints while the add dialog is open
    pub fn footer_dialog(&self) -> String {
        format!(
            "{}: Add | {}: Cancel",
            self.key_for(Action::Confirm),
            self.key_for(Action::Cancel),
        )
    }
}
