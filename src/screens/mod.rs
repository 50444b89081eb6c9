//! Screen controllers.
//!
//! There are two screens: the sign-in gate and the dashboard shell. The app
//! picks one from the session flag and routes every event to it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   authenticated?  ── no ──▶  AuthScreen      │
//! │                   ── yes ─▶  HomeScreen      │
//! │                                              │
//! │   Screen::handle_event() -> ScreenAction     │
//! │   App::apply(action)     -> ViewState op     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod home;
pub mod screen_trait;

pub use auth::{AuthField, AuthScreen, AuthTab};
pub use home::{HomeFocus, HomeScreen};
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};

use crate::keymap::Action;
use crate::utils::TextInput;
use crossterm::event::KeyEvent;

/// Look up the bound action for `key`, dropping it when a focused text field
/// should receive the key as typed text instead.
pub(crate) fn resolve_action(
    ctx: &ScreenContext,
    key: &KeyEvent,
    input_focused: bool,
) -> Option<Action> {
    let action = ctx.keymap().get_action(key.code, key.modifiers)?;
    if input_focused && !TextInput::is_action_allowed_when_focused(&action, key.code, key.modifiers)
    {
        return None;
    }
    Some(action)
}
