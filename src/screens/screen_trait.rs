//! Screen trait and associated types.
//!
//! Screens own their local UI state (form fields, focus, switches) but never
//! touch [`ViewState`] directly: they return a [`ScreenAction`] and the app
//! applies it.

use crate::config::Config;
use crate::icons::Icons;
use crate::keymap::Keymap;
use crate::state::{Credentials, ItemKind, Notice, Section, ViewState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Read-only resources needed for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub view: &'a ViewState,
    pub icons: &'a Icons,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, view: &'a ViewState, icons: &'a Icons) -> Self {
        Self {
            config,
            view,
            icons,
        }
    }

    pub fn keymap(&self) -> &'a Keymap {
        &self.config.keymap
    }
}

/// Read-only resources needed for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub view: &'a ViewState,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, view: &'a ViewState) -> Self {
        Self { config, view }
    }

    pub fn keymap(&self) -> &'a Keymap {
        &self.config.keymap
    }
}

/// What a screen asks the app to do after handling an event.
///
/// Each variant other than `None`, `Quit` and `ShowHelp` maps onto exactly
/// one [`ViewState`] operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen
    #[default]
    None,
    Quit,
    /// Open the help overlay
    ShowHelp,
    SubmitLogin(Credentials),
    SubmitRegister(Credentials),
    Logout,
    ToggleTheme,
    ToggleLocale,
    SelectSection(Section),
    OpenAddDialog(ItemKind),
    SubmitAddDialog,
    DismissAddDialog,
    /// Show a toast without changing any state
    Notify(Notice),
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(_) => Ok(ScreenAction::ToggleTheme),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// When true, plain character keys are typed instead of triggering
    /// single-letter shortcuts.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen becomes visible.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen stops being visible.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
