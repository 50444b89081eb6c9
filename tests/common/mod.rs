//! Shared helpers for the integration tests.
//!
//! Builds an [`App`] with ASCII icons so rendered output is stable across
//! terminals, and drives it with synthetic key events.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use homebase::config::Config;
use homebase::i18n::Locale;
use homebase::icons::{IconSet, Icons};
use homebase::state::{Preferences, Theme};
use homebase::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

pub fn app_with(config: Config, locale: Locale) -> App {
    App::new(
        config,
        PathBuf::from("/tmp/homebase-test/config.toml"),
        Preferences::new(Theme::Light, locale),
        false,
    )
    .with_icons(Icons::with_icon_set(IconSet::Ascii))
}

pub fn app(locale: Locale) -> App {
    app_with(Config::default(), locale)
}

pub fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_event(key_event(code, KeyModifiers::NONE))
        .expect("event handling should not fail");
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(key_event(code, modifiers))
        .expect("event handling should not fail");
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill the login form and submit it
pub fn log_in(app: &mut App) {
    type_text(app, "user@example.com");
    press(app, KeyCode::Tab);
    type_text(app, "secret");
    press(app, KeyCode::Enter);
}

/// Switch to the Register tab, fill every field and submit
pub fn register(app: &mut App) {
    // Email -> tab bar
    press(app, KeyCode::Up);
    press(app, KeyCode::Right);
    press(app, KeyCode::Tab);
    type_text(app, "new@example.com");
    press(app, KeyCode::Tab);
    type_text(app, "secret");
    press(app, KeyCode::Tab);
    type_text(app, "secret");
    press(app, KeyCode::Enter);
}

/// A signed-in app with the login toast already shown
pub fn signed_in(locale: Locale) -> App {
    let mut app = app(locale);
    log_in(&mut app);
    assert!(app.view().is_authenticated());
    app
}

/// Render one frame and return the screen as text, one line per row
pub fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| app.render(frame).expect("render should not fail"))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
