//! Game library cards.

use super::{button, card, grid, heading, primary_button, PanelFocus};
use crate::catalog::{self, GameStatus};
use crate::screens::{RenderContext, ScreenAction};
use crate::state::ItemKind;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

/// "Add game", then a Launch button per game
pub const CONTROLS: usize = 1 + 4;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, focus: PanelFocus) {
    let t = theme();
    let s = ctx.view.strings();
    let icons = ctx.icons;

    let add = primary_button(format!("{} {}", icons.plus(), s.add_game), focus.is_selected(0));
    let body = heading(frame, area, s.game_library, Some(add));

    let games = catalog::games();
    for (i, (cell, game)) in grid(body, 2, 5, games.len())
        .into_iter()
        .zip(games)
        .enumerate()
    {
        let badge_style = match game.status {
            GameStatus::Completed => t.button_style(),
            GameStatus::Playing => t.highlight_style(),
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(game.name, t.text_style().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(format!(" {} ", game.status.label(s)), badge_style),
            ]),
            Line::from(Span::styled(
                format!("{} {}", game.hours, s.hours),
                t.muted_style(),
            )),
            Line::from(vec![
                button(format!("{} {}", icons.play(), s.launch), focus.is_selected(1 + i)),
                Span::raw(" "),
                button(icons.more(), false),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(card()), cell);
    }
}

pub fn activate(index: usize) -> ScreenAction {
    match index {
        0 => ScreenAction::OpenAddDialog(ItemKind::Game),
        i => {
            if let Some(game) = catalog::games().get(i - 1) {
                debug!(game = game.name, "Launch pressed");
            }
            ScreenAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_cover_every_game() {
        assert_eq!(CONTROLS, 1 + catalog::games().len());
    }

    #[test]
    fn test_first_control_opens_game_dialog() {
        assert_eq!(activate(0), ScreenAction::OpenAddDialog(ItemKind::Game));
        assert_eq!(activate(2), ScreenAction::None);
    }
}
