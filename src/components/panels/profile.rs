//! Read-only account summary.

use super::{card, heading};
use crate::catalog::DEMO_EMAIL;
use crate::screens::RenderContext;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let t = theme();
    let s = ctx.view.strings();
    let prefs = ctx.view.preferences();

    let body = heading(frame, area, s.profile, None);
    let [card_area, _] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(body);

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<24}", label), t.muted_style()),
            Span::styled(value, t.text_style().add_modifier(Modifier::BOLD)),
        ])
    };
    let lines = vec![
        row(s.email, DEMO_EMAIL.to_string()),
        row(s.language, prefs.locale.native_name().to_string()),
        row(
            s.dark_mode,
            (if prefs.theme.is_dark() { s.on } else { s.off }).to_string(),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(card().title(format!(" {} {} ", ctx.icons.user(), s.profile))),
        card_area,
    );
}
