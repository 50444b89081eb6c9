//! Overview: greeting, summary counts and recent files.

use super::{button, card, grid, PanelFocus};
use crate::catalog::{self, DEMO_EMAIL};
use crate::screens::{RenderContext, ScreenAction};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

/// One download button per recent file
pub const CONTROLS: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, focus: PanelFocus) {
    let t = theme();
    let s = ctx.view.strings();
    let icons = ctx.icons;

    let [greeting_area, cards_area, _gap, recent_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let greeting = vec![
        Line::from(Span::styled(s.welcome_back, t.title_style())),
        Line::from(Span::styled(DEMO_EMAIL, t.muted_style())),
    ];
    frame.render_widget(Paragraph::new(greeting), greeting_area);

    let summary = [
        (icons.tv(), s.my_platforms, catalog::platforms().len(), t.primary),
        (icons.gamepad(), s.popular_games, catalog::games().len(), t.secondary),
        (icons.folder(), s.recent_files, catalog::files().len(), t.accent),
    ];
    for (cell, (icon, label, count, color)) in grid(cards_area, 3, 4, summary.len())
        .into_iter()
        .zip(summary)
    {
        let icon_style = t.fg_style(color);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", icon), icon_style),
                Span::styled(label, t.muted_style()),
            ]),
            Line::from(Span::styled(
                count.to_string(),
                t.text_style().add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(card()), cell);
    }

    let rows: Vec<Line> = catalog::files()
        .iter()
        .enumerate()
        .map(|(i, file)| {
            Line::from(vec![
                Span::styled(format!("{} ", icons.file()), t.emphasis_style()),
                Span::styled(format!("{:<24}", file.name), t.text_style()),
                Span::styled(format!("{:>8}  ", file.size), t.muted_style()),
                button(icons.download(), focus.is_selected(i)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(rows).block(card().title(format!(" {} ", s.recent_files))),
        recent_area,
    );
}

pub fn activate(index: usize) -> ScreenAction {
    if let Some(file) = catalog::files().get(index) {
        debug!(file = file.name, "Download pressed");
    }
    ScreenAction::None
}
