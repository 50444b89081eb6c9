//! Homebase - a terminal dashboard behind a mock login gate
//!
//! Streaming platforms, a game library and a file list rendered with
//! ratatui. Sign-in accepts anything; the interface switches between
//! Russian and English and between light and dark themes.

// Core modules
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod keymap;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use i18n::Locale;
pub use state::{Section, Theme, ViewState};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
