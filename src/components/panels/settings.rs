//! Privacy and security switches, danger zone.
//!
//! Switch positions are local to the panel. They start off and reset whenever
//! the panel is left.

use super::{button, card, heading, PanelFocus};
use crate::icons::Icons;
use crate::screens::{RenderContext, ScreenAction};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

/// Three switches, "Configure 2FA" and "Delete account"
pub const CONTROLS: usize = 5;

const ANALYTICS: usize = 0;
const ACTION_LOGGING: usize = 1;
const TWO_FACTOR: usize = 2;
const CONFIGURE_2FA: usize = 3;
const DELETE_ACCOUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsSwitches {
    pub analytics: bool,
    pub action_logging: bool,
    pub two_factor: bool,
}

impl SettingsSwitches {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    focus: PanelFocus,
    switches: &SettingsSwitches,
) {
    let t = theme();
    let s = ctx.view.strings();
    let icons = ctx.icons;

    let body = heading(frame, area, s.settings, None);
    let [privacy_area, security_area, danger_area, _] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(body);

    let privacy = vec![
        switch_row(icons, s.analytics, switches.analytics, focus.is_selected(ANALYTICS)),
        hint_row(s.analytics_hint),
        Line::from(""),
        switch_row(
            icons,
            s.action_logging,
            switches.action_logging,
            focus.is_selected(ACTION_LOGGING),
        ),
        hint_row(s.action_logging_hint),
    ];
    frame.render_widget(
        Paragraph::new(privacy).block(card().title(format!(" {} ", s.privacy))),
        privacy_area,
    );

    let security = vec![
        switch_row(icons, s.two_factor, switches.two_factor, focus.is_selected(TWO_FACTOR)),
        hint_row(s.two_factor_hint),
        Line::from(""),
        Line::from(button(
            format!("{} {}", icons.key(), s.configure_2fa),
            focus.is_selected(CONFIGURE_2FA),
        )),
    ];
    frame.render_widget(
        Paragraph::new(security).block(card().title(format!(" {} ", s.security))),
        security_area,
    );

    let delete_style = if focus.is_selected(DELETE_ACCOUNT) {
        t.highlight_style()
    } else {
        t.error_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    let danger = Line::from(Span::styled(
        format!(" {} {} ", icons.trash(), s.delete_account),
        delete_style,
    ));
    frame.render_widget(
        Paragraph::new(danger).block(
            card()
                .title(Span::styled(format!(" {} ", s.danger_zone), t.error_style()))
                .border_style(t.error_style()),
        ),
        danger_area,
    );
}

fn switch_row(icons: &Icons, label: &'static str, on: bool, selected: bool) -> Line<'static> {
    let t = theme();
    let glyph = if on { icons.switch_on() } else { icons.switch_off() };
    let glyph_style = match (selected, on) {
        (true, _) => t.highlight_style(),
        (false, true) => t.success_style(),
        (false, false) => t.muted_style(),
    };
    Line::from(vec![
        Span::styled(format!("{} ", glyph), glyph_style),
        Span::styled(label, t.text_style().add_modifier(Modifier::BOLD)),
    ])
}

fn hint_row(hint: &'static str) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", hint), theme().muted_style()))
}

pub fn activate(index: usize, switches: &mut SettingsSwitches) -> ScreenAction {
    match index {
        ANALYTICS => switches.analytics = !switches.analytics,
        ACTION_LOGGING => switches.action_logging = !switches.action_logging,
        TWO_FACTOR => switches.two_factor = !switches.two_factor,
        CONFIGURE_2FA => debug!("Configure 2FA pressed"),
        DELETE_ACCOUNT => debug!("Delete account pressed"),
        _ => {}
    }
    ScreenAction::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_toggle_and_reset() {
        let mut switches = SettingsSwitches::default();
        activate(ANALYTICS, &mut switches);
        activate(TWO_FACTOR, &mut switches);
        assert!(switches.analytics);
        assert!(!switches.action_logging);
        assert!(switches.two_factor);

        activate(TWO_FACTOR, &mut switches);
        assert!(!switches.two_factor);

        switches.reset();
        assert_eq!(switches, SettingsSwitches::default());
    }

    #[test]
    fn test_inert_buttons_change_nothing() {
        let mut switches = SettingsSwitches::default();
        assert_eq!(activate(DELETE_ACCOUNT, &mut switches), ScreenAction::None);
        assert_eq!(switches, SettingsSwitches::default());
    }
}
