//! The [`HomebaseLogo`] widget renders the wordmark shown above the sign-in form.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

/// A widget that renders the homebase wordmark
///
/// ```text
/// ╻ ╻┏━┓┏┳┓┏━╸┏┓ ┏━┓┏━┓┏━╸
/// ┣━┫┃ ┃┃┃┃┣╸ ┣┻┓┣━┫┗━┓┣╸
/// ╹ ╹┗━┛╹ ╹┗━╸┗━┛╹ ╹┗━┛┗━╸
/// ```
///
/// Areas narrower than the wordmark get the plain `HOMEBASE` text instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HomebaseLogo;

const WORDMARK: &str = indoc! {"
    ╻ ╻┏━┓┏┳┓┏━╸┏┓ ┏━┓┏━┓┏━╸
    ┣━┫┃ ┃┃┃┃┣╸ ┣┻┓┣━┫┗━┓┣╸
    ╹ ╹┗━┛╹ ╹┗━╸┗━┛╹ ╹┗━┛┗━╸
"};

const WORDMARK_WIDTH: u16 = 24;

impl HomebaseLogo {
    pub const fn new() -> Self {
        Self
    }

    /// Rows the logo needs
    pub const fn height() -> u16 {
        3
    }
}

impl Widget for HomebaseLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if area.width >= WORDMARK_WIDTH {
            Text::raw(WORDMARK)
        } else {
            Text::raw("HOMEBASE")
        };
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(theme().title_style())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordmark_shape() {
        let lines: Vec<&str> = WORDMARK.lines().collect();
        assert_eq!(lines.len(), HomebaseLogo::height() as usize);
        assert!(lines
            .iter()
            .all(|l| l.chars().count() <= WORDMARK_WIDTH as usize));
    }

    #[test]
    fn test_narrow_area_falls_back_to_text() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        HomebaseLogo::new().render(area, &mut buf);
        let row: String = (0..10).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.contains("HOMEBASE"));
    }
}
