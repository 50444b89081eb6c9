//! Full-frame rendering through ratatui's test backend.

mod common;

use common::{app, press, render, signed_in, type_text};
use crossterm::event::KeyCode;
use homebase::i18n::Locale;

#[test]
fn test_login_card_in_russian() {
    let mut app = app(Locale::Ru);
    let screen = render(&mut app, 100, 32);

    assert!(screen.contains("Многофункциональный Веб-Сервис"));
    assert!(screen.contains("Вход"));
    assert!(screen.contains("Регистрация"));
    assert!(screen.contains("Электронная почта"));
    assert!(screen.contains("Войти"));
    assert!(screen.contains("RU"));
    // Confirmation only exists on the register tab
    assert!(!screen.contains("Подтвердите пароль"));
}

#[test]
fn test_password_is_masked() {
    let mut app = app(Locale::En);
    type_text(&mut app, "me@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "hunter2");
    let screen = render(&mut app, 100, 32);

    assert!(screen.contains("me@example.com"));
    assert!(!screen.contains("hunter2"));
}

#[test]
fn test_dashboard_greeting_and_counts() {
    let mut app = signed_in(Locale::En);
    let screen = render(&mut app, 120, 40);

    assert!(screen.contains("Welcome Back!"));
    assert!(screen.contains("user@example.com"));
    assert!(screen.contains("My Platforms"));
    assert!(screen.contains("Popular Games"));
    assert!(screen.contains("Recent Files"));
    assert!(screen.contains("Presentation.pptx"));
    assert!(screen.contains("Logout"));
    assert!(screen.contains("Login successful!"));
}

#[test]
fn test_games_panel_badges() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('4'));
    let screen = render(&mut app, 120, 40);

    assert!(screen.contains("Game Library"));
    assert!(screen.contains("Red Dead Redemption 2"));
    assert_eq!(screen.matches("Playing").count(), 3);
    assert_eq!(screen.matches("Completed").count(), 1);
    assert!(screen.contains("120 hours"));
}

#[test]
fn test_each_section_shows_only_its_panel() {
    let mut app = signed_in(Locale::En);

    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Streaming Platforms"));
    assert!(screen.contains("Spotify"));
    assert!(!screen.contains("Game Library"));

    press(&mut app, KeyCode::Char('5'));
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("File Manager"));
    assert!(screen.contains("Vacation_Photos.zip"));
    assert!(!screen.contains("Streaming Platforms"));

    press(&mut app, KeyCode::Char('6'));
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Danger Zone"));
    assert!(!screen.contains("File Manager"));
}

#[test]
fn test_add_dialog_title_follows_kind() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('a'));
    let screen = render(&mut app, 120, 40);

    assert!(screen.contains("Add Game"));
    assert!(screen.contains("Enter name"));
}

#[test]
fn test_locale_toggle_rerenders_copy() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::F(2));
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("С возвращением!"));
    assert!(!screen.contains("Welcome Back!"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&mut app, 120, 44);
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Standard"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app(Locale::En);
    let _ = render(&mut app, 20, 6);
    let mut app = signed_in(Locale::En);
    let _ = render(&mut app, 20, 6);
}
