//! Content panels, one per dashboard section.
//!
//! Every panel exposes a flat list of focusable controls (buttons and
//! switches). The home screen tracks which one is selected and calls
//! [`activate`] on Enter/Space. Exactly one panel is visible at a time.

pub mod dashboard;
pub mod files;
pub mod games;
pub mod profile;
pub mod settings;
pub mod streaming;

pub use settings::SettingsSwitches;

use crate::screens::{RenderContext, ScreenAction};
use crate::state::Section;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Focus information passed to a panel while rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelFocus {
    /// Content pane has keyboard focus
    pub focused: bool,
    /// Index of the selected control
    pub selected: Option<usize>,
}

impl PanelFocus {
    pub fn is_selected(&self, index: usize) -> bool {
        self.focused && self.selected == Some(index)
    }
}

/// Number of focusable controls in a section's panel
pub fn control_count(section: Section) -> usize {
    match section {
        Section::Dashboard => dashboard::CONTROLS,
        Section::Profile => 0,
        Section::Streaming => streaming::CONTROLS,
        Section::Games => games::CONTROLS,
        Section::Files => files::CONTROLS,
        Section::Settings => settings::CONTROLS,
    }
}

/// Render the panel for `section`
pub fn render(
    frame: &mut Frame,
    area: Rect,
    section: Section,
    ctx: &RenderContext,
    focus: PanelFocus,
    switches: &SettingsSwitches,
) {
    match section {
        Section::Dashboard => dashboard::render(frame, area, ctx, focus),
        Section::Profile => profile::render(frame, area, ctx),
        Section::Streaming => streaming::render(frame, area, ctx, focus),
        Section::Games => games::render(frame, area, ctx, focus),
        Section::Files => files::render(frame, area, ctx, focus),
        Section::Settings => settings::render(frame, area, ctx, focus, switches),
    }
}

/// Press the control at `index` in the panel for `section`
pub fn activate(section: Section, index: usize, switches: &mut SettingsSwitches) -> ScreenAction {
    match section {
        Section::Dashboard => dashboard::activate(index),
        Section::Profile => ScreenAction::None,
        Section::Streaming => streaming::activate(index),
        Section::Games => games::activate(index),
        Section::Files => files::activate(index),
        Section::Settings => settings::activate(index, switches),
    }
}

// === Shared drawing helpers ===

/// A bordered card
pub(crate) fn card<'a>() -> Block<'a> {
    let t = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(t.border_type(false))
        .border_style(t.border_style())
        .padding(Padding::horizontal(1))
}

/// `[ label ]`, highlighted when selected
pub(crate) fn button(label: impl Into<String>, selected: bool) -> Span<'static> {
    let t = theme();
    let style = if selected {
        t.highlight_style()
    } else {
        t.emphasis_style()
    };
    Span::styled(format!("[ {} ]", label.into()), style)
}

/// A filled button used for primary actions
pub(crate) fn primary_button(label: impl Into<String>, selected: bool) -> Span<'static> {
    let t = theme();
    let style = if selected {
        t.highlight_style()
    } else {
        t.button_style()
    };
    Span::styled(format!(" {} ", label.into()), style)
}

/// Heading row with an optional action button on the right. Returns the
/// area below the heading.
pub(crate) fn heading(frame: &mut Frame, area: Rect, title: &str, action: Option<Span<'static>>) -> Rect {
    let t = theme();
    let [row, _gap, rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let action_width = action.as_ref().map_or(0, |span| span.width() as u16);
    let [title_area, action_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(action_width)]).areas(row);

    frame.render_widget(
        Paragraph::new(Span::styled(title.to_string(), t.title_style())),
        title_area,
    );
    if let Some(action) = action {
        frame.render_widget(Paragraph::new(action).alignment(Alignment::Right), action_area);
    }
    rest
}

/// Split `area` into rows of `columns` equal cells, each `height` tall.
pub(crate) fn grid(area: Rect, columns: u16, height: u16, count: usize) -> Vec<Rect> {
    let columns = columns.max(1) as usize;
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(height); rows]).split(area);
    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(1)
            .split(*row);
        cells.extend(cols.iter().copied());
    }
    cells.truncate(count);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_cells() {
        let cells = grid(Rect::new(0, 0, 41, 20), 2, 4, 3);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].y, cells[1].y);
        assert_eq!(cells[2].y, 4);
        assert_eq!(cells[0].height, 4);
    }

    #[test]
    fn test_focus_requires_pane_focus() {
        let focus = PanelFocus {
            focused: false,
            selected: Some(0),
        };
        assert!(!focus.is_selected(0));
    }

    #[test]
    fn test_profile_has_no_controls() {
        assert_eq!(control_count(Section::Profile), 0);
        assert!(control_count(Section::Settings) > 0);
    }
}
