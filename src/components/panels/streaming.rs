//! Streaming platforms grid.

use super::{card, grid, heading, primary_button, PanelFocus};
use crate::catalog;
use crate::screens::{RenderContext, ScreenAction};
use crate::state::ItemKind;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// The "add platform" button
pub const CONTROLS: usize = 1;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, focus: PanelFocus) {
    let t = theme();
    let s = ctx.view.strings();
    let icons = ctx.icons;

    let add = primary_button(
        format!("{} {}", icons.plus(), s.add_platform),
        focus.is_selected(0),
    );
    let body = heading(frame, area, s.streaming_platforms, Some(add));

    let columns = if body.width >= 90 { 3 } else { 2 };
    let platforms = catalog::platforms();
    for (cell, platform) in grid(body, columns, 4, platforms.len())
        .into_iter()
        .zip(platforms)
    {
        let tile = t
            .fg_style(Color::White)
            .bg(t.brand_color(platform.color));
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", icons.platform(platform.icon)), tile),
                Span::raw(" "),
                Span::styled(platform.name, t.text_style().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!(" {} ", s.active), t.highlight_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(card()), cell);
    }
}

pub fn activate(index: usize) -> ScreenAction {
    match index {
        0 => ScreenAction::OpenAddDialog(ItemKind::Platform),
        _ => ScreenAction::None,
    }
}
