//! Renders a [`TextInput`] as a bordered field with placeholder, masking and
//! cursor placement.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use crate::utils::{input_placeholder_style, input_text_style, pane_border_style};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use homebase::widgets::TextInputWidget;
/// use homebase::utils::TextInput;
///
/// let input = TextInput::with_text("user@example.com");
/// let widget = TextInputWidget::new(&input)
///     .title("Email")
///     .placeholder("user@example.com")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Text shown while the field is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mask the text with bullets (passwords)
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or_default().to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme().border_type(self.focused))
            .border_style(pane_border_style(self.focused));
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `area`, clamped to the visible width
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.create_block().inner(area);
        let offset = self.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        Position::new(inner.x + offset, inner.y)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Extension trait for Frame to render a TextInputWidget and place the
/// terminal cursor when it is focused.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
