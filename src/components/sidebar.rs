use crate::icons::Icons;
use crate::state::{Section, ViewState};
use crate::styles::theme;
use crate::utils::pane_border_style;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

/// Section navigation column
pub struct Sidebar;

impl Sidebar {
    pub const WIDTH: u16 = 26;

    pub fn section_icon(icons: &Icons, section: Section) -> &'static str {
        match section {
            Section::Dashboard => icons.dashboard(),
            Section::Profile => icons.user(),
            Section::Streaming => icons.tv(),
            Section::Games => icons.gamepad(),
            Section::Files => icons.folder(),
            Section::Settings => icons.settings(),
        }
    }

    /// The active section is drawn as a filled button, the rest as ghosts.
    pub fn render(frame: &mut Frame, area: Rect, view: &ViewState, icons: &Icons, focused: bool) {
        let t = theme();
        let strings = view.strings();

        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|&section| {
                ListItem::new(Line::from(format!(
                    " {} {:<2}{}",
                    Self::section_icon(icons, section),
                    section.index() + 1,
                    section.label(strings)
                )))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(focused))
            .border_style(pane_border_style(focused))
            .padding(Padding::vertical(1));

        let list = List::new(items)
            .block(block)
            .style(t.text_style())
            .highlight_style(t.button_style());

        let mut state = ListState::default();
        state.select(Some(view.active_section().index()));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
