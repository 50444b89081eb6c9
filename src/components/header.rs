use crate::icons::Icons;
use crate::state::ViewState;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Top bar of the signed-in screen and the toggle row of the sign-in gate
pub struct Header;

impl Header {
    /// Height of the top bar including its bottom border
    pub const HEIGHT: u16 = 2;

    /// Brand on the left; language, theme and logout buttons on the right.
    pub fn render(frame: &mut Frame, area: Rect, view: &ViewState, icons: &Icons) {
        let t = theme();
        let strings = view.strings();

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Line::from(vec![
            Span::styled(format!("{} ", icons.rocket()), t.title_style()),
            Span::styled(strings.brand(), t.emphasis_style().add_modifier(Modifier::BOLD)),
        ]);

        let mut buttons = Self::toggle_spans(view, icons);
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            format!("{} {}", icons.log_out(), strings.logout),
            t.text_style(),
        ));
        let buttons = Line::from(buttons);

        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(buttons.width() as u16),
        ])
        .areas(inner);
        frame.render_widget(Paragraph::new(brand), left);
        frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), right);
    }

    /// Right-aligned language and theme buttons for the sign-in gate.
    pub fn render_toggles(frame: &mut Frame, area: Rect, view: &ViewState, icons: &Icons) {
        let line = Line::from(Self::toggle_spans(view, icons));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }

    /// "🌐 RU   ☾": the theme button shows the icon of the theme it switches to.
    fn toggle_spans(view: &ViewState, icons: &Icons) -> Vec<Span<'static>> {
        let t = theme();
        let theme_icon = if view.theme().is_dark() {
            icons.sun()
        } else {
            icons.moon()
        };
        vec![
            Span::styled(
                format!("{} {}", icons.languages(), view.locale().code()),
                t.text_style(),
            ),
            Span::raw("   "),
            Span::styled(theme_icon, t.emphasis_style()),
        ]
    }
}
