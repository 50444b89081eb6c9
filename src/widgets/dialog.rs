//! Modal dialog frame
//!
//! Dims the page, clears a centered box and draws title, body and footer
//! sections with collapsed borders. Callers render their own content into
//! [`Dialog::body_area`].

use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget};

const TITLE_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

pub struct Dialog<'a> {
    pub title: &'a str,
    /// Width in columns, clipped to the screen
    pub width: u16,
    /// Height of the body section in rows
    pub body_height: u16,
    pub footer: Option<&'a str>,
    pub dim_background: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            width: 50,
            body_height: 5,
            footer: None,
            dim_background: true,
        }
    }

    pub fn width(mut self, columns: u16) -> Self {
        self.width = columns;
        self
    }

    pub fn body_height(mut self, rows: u16) -> Self {
        self.body_height = rows;
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    fn popup_area(&self, area: Rect) -> Rect {
        // Each collapsed border saves a row
        let mut height = TITLE_HEIGHT + self.body_height + 2 - 1;
        if self.footer.is_some() {
            height += FOOTER_HEIGHT - 1;
        }
        center_popup(area, self.width, height)
    }

    fn sections(&self, area: Rect) -> Vec<Rect> {
        let mut constraints = vec![Constraint::Length(TITLE_HEIGHT), Constraint::Min(3)];
        if self.footer.is_some() {
            constraints.push(Constraint::Length(FOOTER_HEIGHT));
        }
        Layout::vertical(constraints)
            .spacing(Spacing::Overlap(1))
            .split(self.popup_area(area))
            .to_vec()
    }

    /// Inner area of the body section for caller content
    pub fn body_area(&self, area: Rect) -> Rect {
        let sections = self.sections(area);
        section_block().inner(sections[1])
    }
}

fn section_block<'b>() -> Block<'b> {
    let t = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_focused_style())
        .padding(Padding::horizontal(2))
        .merge_borders(MergeStrategy::Exact)
        .style(t.background_style())
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        if self.dim_background {
            Block::default().style(t.dim_style()).render(area, buf);
        }
        Clear.render(self.popup_area(area), buf);

        let sections = self.sections(area);

        let title_block = section_block();
        let title_inner = title_block.inner(sections[0]);
        title_block.render(sections[0], buf);
        Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(t.title_style())
            .render(title_inner, buf);

        section_block().render(sections[1], buf);

        if let (Some(footer), Some(footer_area)) = (self.footer, sections.get(2)) {
            let footer_block = section_block();
            let footer_inner = footer_block.inner(*footer_area);
            footer_block.render(*footer_area, buf);
            Paragraph::new(footer)
                .alignment(Alignment::Center)
                .style(t.muted_style())
                .render(footer_inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_area_is_inside_popup() {
        let area = Rect::new(0, 0, 100, 30);
        let dialog = Dialog::new("Add").width(40).body_height(3).footer("Enter");
        let popup = dialog.popup_area(area);
        let body = dialog.body_area(area);
        assert!(popup.contains(body.as_position()));
        assert_eq!(body.height, 3);
    }

    #[test]
    fn test_renders_title() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new("Add game").width(30).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Add game"));
    }
}
