//! View state transitions driven through the public operations.

use homebase::catalog;
use homebase::i18n::Locale;
use homebase::state::{
    Credentials, ItemKind, Notice, NoticeKind, Preferences, Section, Theme, ViewState,
};

fn view(locale: Locale) -> ViewState {
    ViewState::new(Preferences::new(Theme::Light, locale))
}

#[test]
fn test_every_section_can_be_selected() {
    let mut view = view(Locale::En);
    view.submit_login(&Credentials::new("a@b.c", "pw"));
    for section in Section::ALL {
        view.select_section(section);
        assert_eq!(view.active_section(), section);
    }
}

#[test]
fn test_login_and_register_authenticate() {
    let mut view = view(Locale::Ru);
    assert!(!view.is_authenticated());
    view.submit_login(&Credentials::new("a@b.c", "pw"));
    assert!(view.is_authenticated());
    assert_eq!(
        view.drain_notices(),
        vec![Notice::success("Успешный вход!")]
    );

    view.logout();
    assert!(!view.is_authenticated());

    view.submit_register(&Credentials::new("a@b.c", "pw"));
    assert!(view.is_authenticated());
    let notices = view.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[test]
fn test_logout_keeps_section_and_preferences() {
    let mut view = view(Locale::En);
    view.submit_login(&Credentials::default());
    view.select_section(Section::Files);
    view.toggle_theme();
    view.logout();

    assert!(!view.is_authenticated());
    assert_eq!(view.active_section(), Section::Files);
    assert_eq!(view.theme(), Theme::Dark);
    assert_eq!(view.locale(), Locale::En);
}

#[test]
fn test_double_toggle_restores_preferences() {
    let mut view = view(Locale::Ru);
    let welcome = view.strings().welcome_back;

    view.toggle_locale();
    assert_eq!(view.strings().welcome_back, "Welcome Back!");
    view.toggle_locale();
    assert_eq!(view.strings().welcome_back, welcome);

    view.toggle_theme();
    assert!(view.theme().is_dark());
    view.toggle_theme();
    assert!(!view.theme().is_dark());
}

#[test]
fn test_add_game_closes_dialog_and_keeps_catalog() {
    let mut view = view(Locale::En);
    view.submit_login(&Credentials::default());
    let _ = view.drain_notices();

    view.open_add_dialog(ItemKind::Game);
    assert_eq!(view.dialog().open_kind(), Some(ItemKind::Game));
    view.submit_add_dialog();

    assert!(!view.dialog().is_open());
    assert_eq!(view.drain_notices(), vec![Notice::success("Successfully added!")]);
    assert_eq!(catalog::games().len(), 4);
}

#[test]
fn test_register_scenario() {
    let mut view = view(Locale::En);
    view.submit_register(&Credentials::new("new@example.com", "secret"));
    assert!(view.is_authenticated());
    assert_eq!(view.active_section(), Section::Dashboard);

    let counts = (
        catalog::platforms().len(),
        catalog::games().len(),
        catalog::files().len(),
    );
    assert_eq!(counts, (4, 4, 3));

    view.select_section(Section::Games);
    let playing = catalog::games()
        .iter()
        .filter(|g| g.status == catalog::GameStatus::Playing)
        .count();
    assert_eq!(playing, 3);

    view.open_add_dialog(Section::Games.add_kind().unwrap());
    view.submit_add_dialog();
    let notices = view.drain_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[1], Notice::success("Successfully added!"));
    assert_eq!(catalog::games().len(), 4);
}
