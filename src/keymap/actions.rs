//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All user actions the keymap can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Jump to the first item
    GoToTop,
    /// Jump to the last item
    GoToEnd,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Selection & Confirmation ============
    /// Confirm selection / submit form (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,
    /// Flip a switch (Space)
    ToggleSelect,

    // ============ Global ============
    Quit,
    Help,
    /// Switch between light and dark
    ToggleTheme,
    /// Switch between Russian and English
    ToggleLocale,
    Logout,

    // ============ Screen-specific ============
    /// Open the add dialog for the current section
    Create,

    // ============ Text editing ============
    Backspace,
    DeleteChar,

    // ============ Tab/Field navigation ============
    NextTab,
    PrevTab,
}

impl Action {
    /// Human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Confirm / submit",
            Action::Cancel => "Cancel / go back",
            Action::ToggleSelect => "Toggle switch",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::ToggleTheme => "Toggle light/dark theme",
            Action::ToggleLocale => "Toggle language (RU/EN)",
            Action::Logout => "Log out",
            Action::Create => "Add item",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field / pane",
            Action::PrevTab => "Previous field / pane",
        }
    }

    /// Category used to group bindings in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::GoToTop
            | Action::GoToEnd
            | Action::NextTab
            | Action::PrevTab => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect | Action::Create => "Actions",

            Action::Quit
            | Action::Help
            | Action::ToggleTheme
            | Action::ToggleLocale
            | Action::Logout => "Global",

            Action::Home | Action::End | Action::Backspace | Action::DeleteChar => "Text Editing",
        }
    }
}
