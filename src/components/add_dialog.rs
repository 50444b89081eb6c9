//! "Add platform / game / file" modal with a single name field.
//!
//! Submitting only produces a success notice. The typed name is discarded.

use crate::keymap::{Action, Keymap};
use crate::screens::ScreenAction;
use crate::state::ItemKind;
use crate::i18n::Strings;
use crate::styles::theme;
use crate::utils::TextInput;
use crate::widgets::{Dialog, TextInputWidget, TextInputWidgetExt};
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

#[derive(Debug, Default)]
pub struct AddItemDialog {
    name: TextInput,
}

impl AddItemDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an empty field each time the dialog opens
    pub fn reset(&mut self) {
        self.name.clear();
    }

    pub fn name(&self) -> &str {
        self.name.text()
    }

    pub fn handle_event(&mut self, event: &Event, keymap: &Keymap) -> ScreenAction {
        let Event::Key(key) = event else {
            return ScreenAction::None;
        };
        if key.kind != KeyEventKind::Press {
            return ScreenAction::None;
        }

        // Plain letters belong to the name field even when bound to an action
        let action = keymap
            .get_action(key.code, key.modifiers)
            .filter(|a| TextInput::is_action_allowed_when_focused(a, key.code, key.modifiers));
        match action {
            Some(Action::Confirm) => ScreenAction::SubmitAddDialog,
            Some(Action::Cancel) => ScreenAction::DismissAddDialog,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => {
                self.name
                    .handle_key_with_action(key.code, key.modifiers, action);
                ScreenAction::None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, kind: ItemKind, strings: &Strings, keymap: &Keymap) {
        let footer = keymap.footer_dialog();
        let dialog = Dialog::new(kind.title(strings))
            .width(52)
            .body_height(6)
            .footer(&footer);
        let body = dialog.body_area(area);
        frame.render_widget(dialog, area);

        let [label_area, input_area, _gap, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(body);

        let t = theme();
        frame.render_widget(
            Paragraph::new(Span::styled(strings.name, t.text_style().add_modifier(Modifier::BOLD))),
            label_area,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.name)
                .placeholder(strings.enter_name)
                .focused(true),
            input_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", strings.add), t.button_style()))
                .alignment(Alignment::Center),
            button_area,
        );
    }
}
