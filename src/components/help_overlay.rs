//! Help Overlay Component
//!
//! Displays the active keybindings. Any key closes it.

use crate::keymap::{KeyBinding, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORIES: [&str; 4] = ["Global", "Navigation", "Actions", "Text Editing"];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();

        let popup_area = center_popup(
            area,
            (area.width * 9 / 10).min(80),
            (area.height * 9 / 10).min(44),
        );
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(2)]).areas(inner_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        ))
        .style(t.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }

    /// Bindings grouped by category, keys of the same action joined
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = vec![Line::from("")];

        for category in CATEGORIES {
            // First binding per action; an override's description wins
            let mut actions: Vec<&KeyBinding> = Vec::new();
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                if !actions.iter().any(|a| a.action == binding.action) {
                    actions.push(binding);
                }
            }
            if actions.is_empty() {
                continue;
            }

            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                t.title_style().fg(t.secondary).add_modifier(Modifier::BOLD),
            )));
            for binding in actions {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {:16}", keymap.keys_for(binding.action)),
                        t.emphasis_style(),
                    ),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
            if category == "Navigation" {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:16}", "1-6"), t.emphasis_style()),
                    Span::styled("Jump to section", t.text_style()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_lines_group_each_action_once() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let locale_rows = text
            .iter()
            .filter(|l| l.contains("Toggle language"))
            .count();
        assert_eq!(locale_rows, 1);
        assert!(text.iter().any(|l| l.contains("L/F2")));
        assert!(text.iter().any(|l| l.contains("Jump to section")));
    }
}
