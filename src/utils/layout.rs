use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A fixed-size rectangle centered in `area`, clipped to fit.
pub fn center_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Split the screen into header, content and footer.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    (header, content, footer)
}

/// Split `area` into a fixed-width left column and the remainder.
pub fn create_split_layout(area: Rect, left_width: u16) -> (Rect, Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Min(0)]).areas(area);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = center_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_center_popup_clips_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = center_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
    }
}
