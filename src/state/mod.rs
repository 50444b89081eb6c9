//! View state controller.
//!
//! All mutable UI state lives in [`ViewState`]. Screens never mutate it
//! directly: they return a [`ScreenAction`](crate::screens::ScreenAction) and
//! the app applies it through the operations below.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     ViewState                        │
//! ├──────────────────────────────────────────────────────┤
//! │  Session       - authenticated gate                  │
//! │  Preferences   - theme (light/dark), locale (ru/en)  │
//! │  Section       - active dashboard panel              │
//! │  DialogState   - add dialog {open, kind}             │
//! │  notices       - outbox drained into toasts          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a plain state assignment. Nothing here can fail.

pub mod dialog;
pub mod navigation;
pub mod preferences;
pub mod session;

pub use dialog::{DialogState, ItemKind};
pub use navigation::Section;
pub use preferences::{Preferences, Theme};
pub use session::{Credentials, Session};

use crate::i18n::{Locale, Strings};
use tracing::{debug, info};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// Localized message produced by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}

/// Owner of all mutable UI state
#[derive(Debug, Default)]
pub struct ViewState {
    session: Session,
    preferences: Preferences,
    section: Section,
    dialog: DialogState,
    notices: Vec<Notice>,
}

impl ViewState {
    /// Create a signed-out view state with the given starting preferences.
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    // === Queries ===

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    pub fn locale(&self) -> Locale {
        self.preferences.locale
    }

    /// String table for the current locale
    pub fn strings(&self) -> &'static Strings {
        self.preferences.locale.strings()
    }

    pub fn active_section(&self) -> Section {
        self.section
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// Notices waiting to be shown
    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Take all queued notices, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // === Operations ===

    /// Mock login: any credentials succeed.
    pub fn submit_login(&mut self, _credentials: &Credentials) {
        info!("Login submitted");
        self.session.sign_in();
        self.notify(Notice::success(self.strings().login_success));
    }

    /// Mock registration: any credentials succeed.
    pub fn submit_register(&mut self, _credentials: &Credentials) {
        info!("Registration submitted");
        self.session.sign_in();
        self.notify(Notice::success(self.strings().register_success));
    }

    pub fn logout(&mut self) {
        info!("Logged out");
        self.session.sign_out();
        self.dialog.close();
    }

    /// Flip light/dark. The caller applies the new theme to the terminal
    /// palette.
    pub fn toggle_theme(&mut self) {
        self.preferences.theme = self.preferences.theme.toggle();
        info!(theme = ?self.preferences.theme, "Theme toggled");
    }

    pub fn toggle_locale(&mut self) {
        self.preferences.locale = self.preferences.locale.toggle();
        info!(locale = %self.preferences.locale, "Locale toggled");
    }

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            debug!(from = ?self.section, to = ?section, "Section selected");
        }
        self.section = section;
    }

    pub fn open_add_dialog(&mut self, kind: ItemKind) {
        debug!(?kind, "Add dialog opened");
        self.dialog.open(kind);
    }

    /// Confirm the add dialog. Nothing is created; the user only gets a
    /// success notice.
    pub fn submit_add_dialog(&mut self) {
        debug!(kind = ?self.dialog.kind(), "Add dialog submitted");
        self.notify(Notice::success(self.strings().added_success));
        self.dialog.close();
    }

    /// Close the add dialog without a notice (Esc / click outside).
    pub fn dismiss_add_dialog(&mut self) {
        debug!("Add dialog dismissed");
        self.dialog.close();
    }

    /// Queue a notice for display
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let view = ViewState::default();
        assert!(!view.is_authenticated());
        assert_eq!(view.active_section(), Section::Dashboard);
        assert!(!view.dialog().is_open());
        assert_eq!(view.locale(), Locale::Ru);
        assert_eq!(view.theme(), Theme::Light);
    }

    #[test]
    fn test_login_notice_follows_locale() {
        let mut view = ViewState::new(Preferences::new(Theme::Light, Locale::En));
        view.submit_login(&Credentials::default());
        assert_eq!(
            view.drain_notices(),
            vec![Notice::success("Login successful!")]
        );

        view.logout();
        view.toggle_locale();
        view.submit_register(&Credentials::default());
        assert_eq!(
            view.drain_notices(),
            vec![Notice::success("Регистрация завершена!")]
        );
    }

    #[test]
    fn test_drain_empties_outbox() {
        let mut view = ViewState::default();
        view.open_add_dialog(ItemKind::File);
        view.submit_add_dialog();
        assert_eq!(view.pending_notices().len(), 1);
        let _ = view.drain_notices();
        assert!(view.pending_notices().is_empty());
    }

    #[test]
    fn test_dismiss_is_silent() {
        let mut view = ViewState::default();
        view.open_add_dialog(ItemKind::Platform);
        view.dismiss_add_dialog();
        assert!(!view.dialog().is_open());
        assert!(view.pending_notices().is_empty());
    }

    #[test]
    fn test_logout_closes_dialog() {
        let mut view = ViewState::default();
        view.submit_login(&Credentials::default());
        view.open_add_dialog(ItemKind::Game);
        view.logout();
        assert!(!view.dialog().is_open());
    }
}
