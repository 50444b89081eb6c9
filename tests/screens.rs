//! Key handling on the sign-in gate and the dashboard, driven through the app.

mod common;

use common::{app, log_in, press, press_with, register, render, signed_in, type_text};
use crossterm::event::{KeyCode, KeyModifiers};
use homebase::i18n::Locale;
use homebase::screens::{AuthField, AuthTab, HomeFocus};
use homebase::state::{ItemKind, Section, Theme};
use homebase::widgets::ToastVariant;

fn toast_message(app: &homebase::App) -> Option<String> {
    app.toasts().current().map(|t| t.message.clone())
}

// === Sign-in gate ===

#[test]
fn test_empty_login_warns_and_focuses_email() {
    let mut app = app(Locale::En);
    press(&mut app, KeyCode::Enter);

    assert!(!app.view().is_authenticated());
    assert_eq!(app.auth_screen().focus(), AuthField::Email);
    let toast = app.toasts().current().expect("warning toast");
    assert_eq!(toast.variant, ToastVariant::Warning);
    assert_eq!(toast.message, "Please fill in this field");
}

#[test]
fn test_missing_password_focuses_password() {
    let mut app = app(Locale::En);
    type_text(&mut app, "user@example.com");
    press(&mut app, KeyCode::Enter);

    assert!(!app.view().is_authenticated());
    assert_eq!(app.auth_screen().focus(), AuthField::Password);
}

#[test]
fn test_whitespace_only_counts_as_empty() {
    let mut app = app(Locale::En);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "pw");
    press(&mut app, KeyCode::Enter);

    assert!(!app.view().is_authenticated());
    assert_eq!(app.auth_screen().focus(), AuthField::Email);
}

#[test]
fn test_login_signs_in_with_toast() {
    let mut app = app(Locale::En);
    log_in(&mut app);

    assert!(app.view().is_authenticated());
    assert_eq!(toast_message(&app).as_deref(), Some("Login successful!"));
    assert_eq!(app.view().active_section(), Section::Dashboard);
}

#[test]
fn test_register_requires_confirmation_field() {
    let mut app = app(Locale::En);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.auth_screen().tab(), AuthTab::Register);

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "new@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret");
    press(&mut app, KeyCode::Enter);

    assert!(!app.view().is_authenticated());
    assert_eq!(app.auth_screen().focus(), AuthField::ConfirmPassword);
}

#[test]
fn test_register_signs_in() {
    let mut app = app(Locale::Ru);
    register(&mut app);

    assert!(app.view().is_authenticated());
    assert_eq!(
        toast_message(&app).as_deref(),
        Some("Регистрация завершена!")
    );
}

#[test]
fn test_letters_are_typed_not_shortcuts() {
    let mut app = app(Locale::En);
    type_text(&mut app, "qt?l");

    assert!(!app.should_quit());
    assert!(!app.is_help_visible());
    assert_eq!(app.view().theme(), Theme::Light);
    assert_eq!(app.view().locale(), Locale::En);
}

#[test]
fn test_function_keys_work_while_typing() {
    let mut app = app(Locale::Ru);
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::F(3));

    assert_eq!(app.view().locale(), Locale::En);
    assert_eq!(app.view().theme(), Theme::Dark);
}

#[test]
fn test_ctrl_q_quits_from_input() {
    let mut app = app(Locale::En);
    press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[test]
fn test_unbound_chords_are_not_typed() {
    let mut app = app(Locale::En);
    type_text(&mut app, "ab");
    press_with(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
    press_with(&mut app, KeyCode::Char('z'), KeyModifiers::ALT);
    type_text(&mut app, "@c");

    let screen = render(&mut app, 100, 32);
    assert!(screen.contains("ab@c"));
    assert!(!app.should_quit());
}

#[test]
fn test_space_on_submit_button_submits() {
    let mut app = app(Locale::En);
    type_text(&mut app, "user@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.auth_screen().focus(), AuthField::Submit);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.view().is_authenticated());
}

#[test]
fn test_help_overlay_closes_on_any_key() {
    let mut app = app(Locale::En);
    press(&mut app, KeyCode::F(1));
    assert!(app.is_help_visible());

    // Swallowed by the overlay
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.is_help_visible());
    press(&mut app, KeyCode::Enter);
    assert!(app.toasts().current().is_some());
    assert!(!app.view().is_authenticated());
}

// === Dashboard ===

#[test]
fn test_digits_jump_to_sections() {
    let mut app = signed_in(Locale::En);
    for (digit, section) in ('1'..='6').zip(Section::ALL) {
        press(&mut app, KeyCode::Char(digit));
        assert_eq!(app.view().active_section(), section);
    }
}

#[test]
fn test_sidebar_arrows_wrap() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.view().active_section(), Section::Settings);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.view().active_section(), Section::Dashboard);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.view().active_section(), Section::Profile);
}

#[test]
fn test_add_shortcut_only_where_a_list_exists() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('a'));
    assert!(!app.view().dialog().is_open());

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view().dialog().open_kind(), Some(ItemKind::Platform));
}

#[test]
fn test_add_game_dialog_flow() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view().dialog().open_kind(), Some(ItemKind::Game));

    // Shortcut letters and digits go into the name field
    type_text(&mut app, "tq 1");
    assert_eq!(app.home_screen().dialog_input(), "tq 1");
    assert_eq!(app.view().theme(), Theme::Light);
    assert_eq!(app.view().active_section(), Section::Games);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Enter);
    assert!(!app.view().dialog().is_open());
    assert_eq!(toast_message(&app).as_deref(), Some("Successfully added!"));
}

#[test]
fn test_chords_in_add_dialog_quit_without_typing() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('a'));
    press_with(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
    assert_eq!(app.home_screen().dialog_input(), "");
    assert!(!app.should_quit());

    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(app.home_screen().dialog_input(), "");
    assert!(app.should_quit());
}

#[test]
fn test_dialog_dismiss_is_silent_and_field_resets() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "draft");
    press(&mut app, KeyCode::Esc);

    assert!(!app.view().dialog().is_open());
    assert_eq!(toast_message(&app).as_deref(), Some("Login successful!"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view().dialog().open_kind(), Some(ItemKind::File));
    assert_eq!(app.home_screen().dialog_input(), "");
}

#[test]
fn test_panel_add_button_opens_dialog() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.home_screen().focus(), HomeFocus::Content);
    assert_eq!(app.home_screen().selected_control(), Some(0));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view().dialog().open_kind(), Some(ItemKind::Game));
}

#[test]
fn test_settings_switches_reset_on_leave() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    let switches = app.home_screen().switches();
    assert!(switches.analytics);
    assert!(switches.action_logging);
    assert!(!switches.two_factor);

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('6'));
    assert!(!app.home_screen().switches().analytics);
}

#[test]
fn test_theme_and_locale_toggle_in_dashboard() {
    let mut app = signed_in(Locale::Ru);
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.view().theme(), Theme::Dark);
    assert_eq!(app.view().locale(), Locale::En);

    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.view().theme(), Theme::Light);
    assert_eq!(app.view().locale(), Locale::Ru);
}

#[test]
fn test_logout_returns_to_fresh_login_form() {
    let mut app = app(Locale::En);
    register(&mut app);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('o'));

    assert!(!app.view().is_authenticated());
    assert_eq!(app.view().active_section(), Section::Games);
    assert_eq!(app.auth_screen().tab(), AuthTab::Login);
    assert_eq!(app.auth_screen().focus(), AuthField::Email);

    // Previously typed credentials are gone
    press(&mut app, KeyCode::Enter);
    assert!(!app.view().is_authenticated());
    assert_eq!(app.auth_screen().focus(), AuthField::Email);

    log_in(&mut app);
    assert!(app.view().is_authenticated());
    assert_eq!(app.home_screen().focus(), HomeFocus::Sidebar);
}

#[test]
fn test_quit_from_dashboard() {
    let mut app = signed_in(Locale::En);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
