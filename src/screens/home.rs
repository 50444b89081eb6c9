//! Signed-in dashboard shell: header, sidebar, one content panel, footer.

use crate::components::panels::{self, PanelFocus, SettingsSwitches};
use crate::components::{AddItemDialog, Footer, Header, Sidebar};
use crate::keymap::Action;
use crate::screens::resolve_action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::Section;
use crate::styles::theme;
use crate::utils::{create_split_layout, create_standard_layout, pane_border_style, ListStateExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, ListState, Padding};

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Sidebar,
    Content,
}

#[derive(Debug, Default)]
pub struct HomeScreen {
    focus: HomeFocus,
    /// Selected control inside the visible panel
    controls: ListState,
    switches: SettingsSwitches,
    dialog: AddItemDialog,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> HomeFocus {
        self.focus
    }

    pub fn selected_control(&self) -> Option<usize> {
        self.controls.selected()
    }

    pub fn switches(&self) -> SettingsSwitches {
        self.switches
    }

    pub fn dialog_input(&self) -> &str {
        self.dialog.name()
    }

    fn focus_content(&mut self, section: Section) {
        self.focus = HomeFocus::Content;
        if self.controls.selected().is_none() {
            self.controls.select_first_item(panels::control_count(section));
        }
    }

    fn focus_sidebar(&mut self) {
        self.focus = HomeFocus::Sidebar;
    }

    /// Switch panels. Leaving the settings panel drops its switch positions.
    fn select_section(&mut self, current: Section, target: Section) -> ScreenAction {
        if current == target {
            return ScreenAction::None;
        }
        if current == Section::Settings {
            self.switches.reset();
        }
        self.controls.select(None);
        if self.focus == HomeFocus::Content {
            self.controls.select_first_item(panels::control_count(target));
        }
        ScreenAction::SelectSection(target)
    }

    /// Every path that opens the add dialog starts from an empty field.
    fn finish(&mut self, action: ScreenAction) -> ScreenAction {
        if matches!(action, ScreenAction::OpenAddDialog(_)) {
            self.dialog.reset();
        }
        action
    }

    fn handle_sidebar(&mut self, action: Action, section: Section) -> ScreenAction {
        match action {
            Action::MoveUp => self.select_section(section, section.prev()),
            Action::MoveDown => self.select_section(section, section.next()),
            Action::GoToTop => self.select_section(section, Section::Dashboard),
            Action::GoToEnd => self.select_section(section, Section::Settings),
            Action::MoveRight | Action::Confirm | Action::ToggleSelect => {
                self.focus_content(section);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    fn handle_content(&mut self, action: Action, section: Section) -> ScreenAction {
        let count = panels::control_count(section);
        match action {
            Action::MoveUp | Action::MoveLeft => {
                self.controls.select_previous_wrap(count);
                ScreenAction::None
            }
            Action::MoveDown | Action::MoveRight => {
                self.controls.select_next_wrap(count);
                ScreenAction::None
            }
            Action::GoToTop => {
                self.controls.select_first_item(count);
                ScreenAction::None
            }
            Action::GoToEnd => {
                self.controls.select_last_item(count);
                ScreenAction::None
            }
            Action::Confirm | Action::ToggleSelect => match self.controls.selected() {
                Some(index) if index < count => panels::activate(section, index, &mut self.switches),
                _ => ScreenAction::None,
            },
            Action::Cancel => {
                self.focus_sidebar();
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let view = ctx.view;
        let section = view.active_section();
        let dialog_kind = view.dialog().open_kind();

        frame.render_widget(Block::default().style(t.background_style()), area);
        let (header_area, body, footer_area) =
            create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header_area, view, ctx.icons);

        let footer_text = if dialog_kind.is_some() {
            ctx.keymap().footer_dialog()
        } else {
            ctx.keymap().footer_home()
        };
        Footer::render(frame, footer_area, &footer_text);

        let (sidebar_area, main_area) = create_split_layout(body, Sidebar::WIDTH);
        let sidebar_focused = dialog_kind.is_none() && self.focus == HomeFocus::Sidebar;
        let content_focused = dialog_kind.is_none() && self.focus == HomeFocus::Content;
        Sidebar::render(frame, sidebar_area, view, ctx.icons, sidebar_focused);

        let pane = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(content_focused))
            .border_style(pane_border_style(content_focused))
            .padding(Padding::new(2, 2, 1, 0));
        let inner = pane.inner(main_area);
        frame.render_widget(pane, main_area);

        self.controls.clamp_to(panels::control_count(section));
        let focus = PanelFocus {
            focused: content_focused,
            selected: self.controls.selected(),
        };
        panels::render(frame, inner, section, ctx, focus, &self.switches);

        if let Some(kind) = dialog_kind {
            self.dialog
                .render(frame, area, kind, view.strings(), ctx.keymap());
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if ctx.view.dialog().is_open() {
            return Ok(self.dialog.handle_event(&event, ctx.keymap()));
        }

        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let section = ctx.view.active_section();

        // Digits jump straight to a section
        if let KeyCode::Char(c @ '1'..='6') = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                let index = c as usize - '1' as usize;
                if let Some(target) = Section::from_index(index) {
                    return Ok(self.select_section(section, target));
                }
            }
        }

        let Some(action) = resolve_action(ctx, &key, false) else {
            return Ok(ScreenAction::None);
        };

        let result = match action {
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            Action::ToggleTheme => ScreenAction::ToggleTheme,
            Action::ToggleLocale => ScreenAction::ToggleLocale,
            Action::Logout => ScreenAction::Logout,
            Action::Create => section
                .add_kind()
                .map_or(ScreenAction::None, ScreenAction::OpenAddDialog),
            Action::NextTab | Action::PrevTab => {
                match self.focus {
                    HomeFocus::Sidebar => self.focus_content(section),
                    HomeFocus::Content => self.focus_sidebar(),
                }
                ScreenAction::None
            }
            _ => match self.focus {
                HomeFocus::Sidebar => self.handle_sidebar(action, section),
                HomeFocus::Content => self.handle_content(action, section),
            },
        };
        Ok(self.finish(result))
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        *self = Self::default();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.switches.reset();
        self.dialog.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaving_settings_resets_switches() {
        let mut screen = HomeScreen::new();
        screen.switches.analytics = true;
        assert_eq!(
            screen.select_section(Section::Settings, Section::Games),
            ScreenAction::SelectSection(Section::Games)
        );
        assert_eq!(screen.switches(), SettingsSwitches::default());
    }

    #[test]
    fn test_reselecting_same_section_is_noop() {
        let mut screen = HomeScreen::new();
        screen.switches.two_factor = true;
        assert_eq!(
            screen.select_section(Section::Settings, Section::Settings),
            ScreenAction::None
        );
        assert!(screen.switches().two_factor);
    }

    #[test]
    fn test_focus_content_selects_first_control() {
        let mut screen = HomeScreen::new();
        screen.focus_content(Section::Games);
        assert_eq!(screen.focus(), HomeFocus::Content);
        assert_eq!(screen.selected_control(), Some(0));
    }
}
