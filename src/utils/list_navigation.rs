//! Selection movement for `ListState`-backed lists and grids.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` with wrapping and clamped movement.
pub trait ListStateExt {
    /// Previous item, wrapping from the first to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Next item, wrapping from the last to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items`, selecting the first item
    /// if nothing is selected.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some((current + total_items - 1) % total_items));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let next = self.selected().map_or(0, |current| (current + 1) % total_items);
        self.select(Some(next));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
        } else {
            let current = self.selected().unwrap_or(0);
            self.select(Some(current.min(total_items - 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_navigation() {
        let mut state = ListState::default();
        state.select(Some(0));

        state.select_previous_wrap(5);
        assert_eq!(state.selected(), Some(4));

        state.select_next_wrap(5);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_next_from_nothing_selects_first() {
        let mut state = ListState::default();
        state.select_next_wrap(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_select_first_last() {
        let mut state = ListState::default();
        state.select_last_item(6);
        assert_eq!(state.selected(), Some(5));
        state.select_first_item(6);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list() {
        let mut state = ListState::default();
        state.select_previous_wrap(0);
        state.select_next_wrap(0);
        state.select_first_item(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_to() {
        let mut state = ListState::default();
        state.select(Some(7));
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp_to(0);
        assert_eq!(state.selected(), None);
    }
}
