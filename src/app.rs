use crate::components::HelpOverlay;
use crate::config::Config;
use crate::icons::Icons;
use crate::screens::{AuthScreen, HomeScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{Preferences, ViewState};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use crate::widgets::{Toast, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing (expires toasts)
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    view: ViewState,
    icons: Icons,
    auth: AuthScreen,
    home: HomeScreen,
    toasts: ToastManager,
    show_help: bool,
    /// Colors disabled for the whole run; theme toggles only flip the icon
    no_color: bool,
    should_quit: bool,
}

impl App {
    /// Build the app from a loaded config. `preferences` is the starting
    /// theme and language after CLI overrides.
    pub fn new(config: Config, config_path: PathBuf, preferences: Preferences, no_color: bool) -> Self {
        let icons = Icons::from_config(&config);
        let toasts = ToastManager::new(config.toast_duration());
        let app = Self {
            config,
            config_path,
            view: ViewState::new(preferences),
            icons,
            auth: AuthScreen::new(),
            home: HomeScreen::new(),
            toasts,
            show_help: false,
            no_color,
            should_quit: false,
        };
        app.apply_theme();
        app
    }

    /// Replace the auto-detected icon set
    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn auth_screen(&self) -> &AuthScreen {
        &self.auth
    }

    pub fn home_screen(&self) -> &HomeScreen {
        &self.home
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("UI started");

        loop {
            self.toasts.tick();

            let mut rendered = Ok(());
            tui.terminal_mut().draw(|frame| rendered = self.render(frame))?;
            rendered?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }

        tui.exit()?;
        info!("UI closed");
        Ok(())
    }

    /// Draw the current screen plus any toast and the help overlay
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.view, &self.icons);
        if self.view.is_authenticated() {
            self.home.render(frame, area, &ctx)?;
        } else {
            self.auth.render(frame, area, &ctx)?;
        }

        self.toasts.render(frame, area);

        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.display().to_string(),
            );
        }
        Ok(())
    }

    /// Route one terminal event to the visible screen and apply the result
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.show_help = false;
                }
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config, &self.view);
        let action = if self.view.is_authenticated() {
            self.home.handle_event(event, &ctx)?
        } else {
            self.auth.handle_event(event, &ctx)?
        };
        self.apply(action)
    }

    /// Apply a screen action to the view state and surface its notices
    pub fn apply(&mut self, action: ScreenAction) -> Result<()> {
        if action != ScreenAction::None {
            debug!(?action, "Applying screen action");
        }
        let was_authenticated = self.view.is_authenticated();

        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::SubmitLogin(credentials) => self.view.submit_login(&credentials),
            ScreenAction::SubmitRegister(credentials) => self.view.submit_register(&credentials),
            ScreenAction::Logout => self.view.logout(),
            ScreenAction::ToggleTheme => {
                self.view.toggle_theme();
                self.apply_theme();
            }
            ScreenAction::ToggleLocale => self.view.toggle_locale(),
            ScreenAction::SelectSection(section) => self.view.select_section(section),
            ScreenAction::OpenAddDialog(kind) => self.view.open_add_dialog(kind),
            ScreenAction::SubmitAddDialog => self.view.submit_add_dialog(),
            ScreenAction::DismissAddDialog => self.view.dismiss_add_dialog(),
            ScreenAction::Notify(notice) => self.view.notify(notice),
        }

        if was_authenticated != self.view.is_authenticated() {
            self.switch_screens(was_authenticated)?;
        }

        for notice in self.view.drain_notices() {
            self.toasts.push(Toast::from(notice));
        }
        Ok(())
    }

    fn switch_screens(&mut self, was_authenticated: bool) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.view);
        if was_authenticated {
            self.home.on_exit(&ctx)?;
            self.auth.on_enter(&ctx)?;
        } else {
            self.auth.on_exit(&ctx)?;
            self.home.on_enter(&ctx)?;
        }
        Ok(())
    }

    fn apply_theme(&self) {
        if self.no_color {
            init_theme(ThemeType::NoColor);
        } else {
            init_theme(self.view.theme().into());
        }
    }
}
