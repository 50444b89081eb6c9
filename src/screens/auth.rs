//! Sign-in gate.
//!
//! Login and Register tabs over the same card. Both forms accept any
//! non-empty input; an empty required field takes focus and raises a warning
//! toast instead of submitting.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::resolve_action;
use crate::state::{Credentials, Notice};
use crate::styles::theme;
use crate::utils::{center_popup, create_standard_layout, TextInput};
use crate::widgets::{HomebaseLogo, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    fn toggle(self) -> Self {
        match self {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        }
    }

    /// Focus order for this tab's form
    fn fields(self) -> &'static [AuthField] {
        match self {
            AuthTab::Login => &[
                AuthField::Tabs,
                AuthField::Email,
                AuthField::Password,
                AuthField::Submit,
            ],
            AuthTab::Register => &[
                AuthField::Tabs,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
                AuthField::Submit,
            ],
        }
    }
}

/// Focusable parts of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    Tabs,
    #[default]
    Email,
    Password,
    ConfirmPassword,
    Submit,
}

impl AuthField {
    fn is_input(self) -> bool {
        matches!(
            self,
            AuthField::Email | AuthField::Password | AuthField::ConfirmPassword
        )
    }
}

#[derive(Debug, Default)]
struct LoginForm {
    email: TextInput,
    password: TextInput,
}

#[derive(Debug, Default)]
struct RegisterForm {
    email: TextInput,
    password: TextInput,
    confirm_password: TextInput,
}

#[derive(Debug, Default)]
pub struct AuthScreen {
    tab: AuthTab,
    focus: AuthField,
    login: LoginForm,
    register: RegisterForm,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn focus(&self) -> AuthField {
        self.focus
    }

    /// Back to an empty Login form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn input_mut(&mut self, field: AuthField) -> Option<&mut TextInput> {
        match (self.tab, field) {
            (AuthTab::Login, AuthField::Email) => Some(&mut self.login.email),
            (AuthTab::Login, AuthField::Password) => Some(&mut self.login.password),
            (AuthTab::Register, AuthField::Email) => Some(&mut self.register.email),
            (AuthTab::Register, AuthField::Password) => Some(&mut self.register.password),
            (AuthTab::Register, AuthField::ConfirmPassword) => {
                Some(&mut self.register.confirm_password)
            }
            _ => None,
        }
    }

    fn input(&self, field: AuthField) -> Option<&TextInput> {
        match (self.tab, field) {
            (AuthTab::Login, AuthField::Email) => Some(&self.login.email),
            (AuthTab::Login, AuthField::Password) => Some(&self.login.password),
            (AuthTab::Register, AuthField::Email) => Some(&self.register.email),
            (AuthTab::Register, AuthField::Password) => Some(&self.register.password),
            (AuthTab::Register, AuthField::ConfirmPassword) => {
                Some(&self.register.confirm_password)
            }
            _ => None,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.tab.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    fn switch_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.focus = AuthField::Tabs;
    }

    /// Check required fields in order, then submit the active form.
    fn submit(&mut self, ctx: &ScreenContext) -> ScreenAction {
        let empty = self
            .tab
            .fields()
            .iter()
            .copied()
            .filter(|f| f.is_input())
            .find(|f| self.input(*f).is_some_and(TextInput::is_empty));
        if let Some(field) = empty {
            self.focus = field;
            return ScreenAction::Notify(Notice::warning(ctx.view.strings().fill_in_field));
        }

        match self.tab {
            AuthTab::Login => ScreenAction::SubmitLogin(Credentials::new(
                self.login.email.text_trimmed(),
                self.login.password.text(),
            )),
            AuthTab::Register => ScreenAction::SubmitRegister(Credentials::new(
                self.register.email.text_trimmed(),
                self.register.password.text(),
            )),
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let s = ctx.view.strings();
        let focused = self.focus == AuthField::Tabs;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(focused))
            .border_style(crate::utils::pane_border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [left, right] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(inner);
        for (tab, label, cell) in [
            (AuthTab::Login, s.login, left),
            (AuthTab::Register, s.register, right),
        ] {
            let style = if tab == self.tab {
                t.button_style()
            } else {
                t.muted_style()
            };
            frame.render_widget(
                Paragraph::new(label).alignment(Alignment::Center).style(style),
                cell,
            );
        }
    }
}

impl Screen for AuthScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let s = ctx.view.strings();
        let icons = ctx.icons;

        frame.render_widget(Block::default().style(t.background_style()), area);
        let (toggles_area, body, footer_area) =
            create_standard_layout(area, 1, Footer::HEIGHT);
        Header::render_toggles(frame, toggles_area, ctx.view, icons);
        Footer::render(frame, footer_area, &ctx.keymap().footer_auth());

        let fields = self.tab.fields();
        let input_count = fields.iter().filter(|f| f.is_input()).count() as u16;
        let show_logo = body.height >= 30;
        let logo_height = if show_logo { HomebaseLogo::height() + 1 } else { 0 };
        // Title block, tab bar, inputs, button and borders
        let card_height = logo_height + 3 + 3 + input_count * 3 + 2 + 2;

        let card_area = center_popup(body, 72, card_height);
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(t.border_style())
            .padding(Padding::horizontal(2))
            .style(t.background_style());
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let mut constraints = vec![
            Constraint::Length(logo_height),
            Constraint::Length(3),
            Constraint::Length(3),
        ];
        constraints.extend(std::iter::repeat_n(Constraint::Length(3), input_count as usize));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        if show_logo {
            frame.render_widget(HomebaseLogo::new(), rows[0]);
        }
        let heading = vec![
            Line::from(Span::styled(format!("{} {}", icons.rocket(), s.title), t.title_style())),
            Line::from(Span::styled(s.subtitle, t.muted_style())),
        ];
        frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), rows[1]);

        self.render_tabs(frame, rows[2], ctx);

        for (i, field) in fields.iter().filter(|f| f.is_input()).enumerate() {
            let Some(input) = self.input(*field) else {
                continue;
            };
            let (label, placeholder, masked) = match field {
                AuthField::Email => (s.email, "user@example.com", false),
                AuthField::Password => (s.password, "••••••••", true),
                _ => (s.confirm_password, "••••••••", true),
            };
            frame.render_text_input_widget(
                TextInputWidget::new(input)
                    .title(label)
                    .placeholder(placeholder)
                    .masked(masked)
                    .focused(self.focus == *field),
                rows[3 + i],
            );
        }

        let (submit_icon, submit_label) = match self.tab {
            AuthTab::Login => (icons.log_in(), s.sign_in),
            AuthTab::Register => (icons.user_plus(), s.sign_up),
        };
        let submit_style = if self.focus == AuthField::Submit {
            t.highlight_style()
        } else {
            t.button_style()
        };
        let button_area = rows[rows.len() - 1];
        frame.render_widget(
            Paragraph::new(format!("{} {}", submit_icon, submit_label))
                .alignment(Alignment::Center)
                .style(submit_style),
            button_area,
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let action = resolve_action(ctx, &key, self.is_input_focused());
        let result = match action {
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::ToggleTheme) => ScreenAction::ToggleTheme,
            Some(Action::ToggleLocale) => ScreenAction::ToggleLocale,
            Some(Action::NextTab | Action::MoveDown) => {
                self.move_focus(true);
                ScreenAction::None
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.move_focus(false);
                ScreenAction::None
            }
            Some(Action::MoveLeft | Action::MoveRight) if self.focus == AuthField::Tabs => {
                self.switch_tab();
                ScreenAction::None
            }
            Some(Action::Confirm | Action::ToggleSelect) if self.focus == AuthField::Tabs => {
                self.switch_tab();
                ScreenAction::None
            }
            Some(Action::Confirm) => self.submit(ctx),
            Some(Action::ToggleSelect) if self.focus == AuthField::Submit => self.submit(ctx),
            _ => {
                let focus = self.focus;
                if let Some(input) = self.input_mut(focus) {
                    input.handle_key_with_action(key.code, key.modifiers, action);
                }
                ScreenAction::None
            }
        };
        Ok(result)
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is_input()
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.reset();
        Ok(())
    }
}
