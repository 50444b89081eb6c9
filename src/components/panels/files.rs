//! Upload zone and file rows.

use super::{button, card, heading, primary_button, PanelFocus};
use crate::catalog;
use crate::screens::{RenderContext, ScreenAction};
use crate::state::ItemKind;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

/// Buttons on each file row
const ROW_BUTTONS: usize = 3;

/// "Upload file", "Select files", then view/download/delete per file
pub const CONTROLS: usize = 2 + 3 * ROW_BUTTONS;

/// Dashed outline for the drop zone
const DASHED: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, focus: PanelFocus) {
    let t = theme();
    let s = ctx.view.strings();
    let icons = ctx.icons;

    let upload = primary_button(
        format!("{} {}", icons.upload(), s.upload_file),
        focus.is_selected(0),
    );
    let body = heading(frame, area, s.file_manager, Some(upload));

    let [zone_area, _gap, rows_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(body);

    let zone_border = if focus.focused && focus.selected == Some(1) {
        t.border_focused_style()
    } else {
        t.border_style()
    };
    let zone = Block::default()
        .borders(Borders::ALL)
        .border_set(DASHED)
        .border_style(zone_border);
    let zone_text = vec![
        Line::from(Span::styled(icons.upload(), t.emphasis_style())),
        Line::from(Span::styled(s.upload_files, t.text_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(s.drop_hint, t.muted_style())),
        Line::from(primary_button(s.select_files, focus.is_selected(1))),
    ];
    frame.render_widget(
        Paragraph::new(zone_text)
            .alignment(Alignment::Center)
            .block(zone),
        zone_area,
    );

    let rows: Vec<Line> = catalog::files()
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let base = 2 + i * ROW_BUTTONS;
            Line::from(vec![
                Span::styled(
                    format!("{} ", icons.file_kind(file.kind)),
                    t.fg_style(t.secondary),
                ),
                Span::styled(format!("{:<24}", file.name), t.text_style()),
                Span::styled(format!("{:>8}  ", file.size), t.muted_style()),
                button(icons.eye(), focus.is_selected(base)),
                Span::raw(" "),
                button(icons.download(), focus.is_selected(base + 1)),
                Span::raw(" "),
                button(icons.trash(), focus.is_selected(base + 2)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(rows).block(card()), rows_area);
}

pub fn activate(index: usize) -> ScreenAction {
    match index {
        0 => ScreenAction::OpenAddDialog(ItemKind::File),
        1 => {
            debug!("Select files pressed");
            ScreenAction::None
        }
        i => {
            let row = (i - 2) / ROW_BUTTONS;
            let button = match (i - 2) % ROW_BUTTONS {
                0 => "view",
                1 => "download",
                _ => "delete",
            };
            if let Some(file) = catalog::files().get(row) {
                debug!(file = file.name, button, "File button pressed");
            }
            ScreenAction::None
        }
    }
}
