use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single-line text field with a character-indexed cursor.
///
/// # Example
/// ```
/// use homebase::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters (not bytes).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when the field holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Handle a raw key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle an editing action from the keymap. Returns true if consumed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home | Action::GoToTop => self.move_home(),
            Action::End | Action::GoToEnd => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Plain characters are always typed. Anything else goes through the
    /// keymap action first and falls back to the raw key. A Ctrl/Alt chord
    /// never inserts its letter.
    pub fn handle_key_with_action(
        &mut self,
        key_code: KeyCode,
        modifiers: KeyModifiers,
        action: Option<Action>,
    ) -> bool {
        if is_text_key(key_code, modifiers) {
            return self.handle_key(key_code);
        }
        if let Some(action) = action {
            if self.handle_action(action) {
                return true;
            }
        }
        if matches!(key_code, KeyCode::Char(_)) {
            return false;
        }
        self.handle_key(key_code)
    }

    /// Whether a keymap action may fire while a text input has focus.
    ///
    /// Plain printable characters belong to the input, so `q` or `t` bound
    /// to Quit/ToggleTheme type a letter instead. Function keys and chords
    /// like Ctrl+Q still reach the app.
    pub fn is_action_allowed_when_focused(
        _action: &Action,
        key_code: KeyCode,
        modifiers: KeyModifiers,
    ) -> bool {
        !is_text_key(key_code, modifiers)
    }
}

/// A printable character without Ctrl/Alt held
fn is_text_key(key_code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(key_code, KeyCode::Char(_))
        && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chords_do_not_insert_letters() {
        let mut input = TextInput::with_text("ab");
        assert!(!input.handle_key_with_action(KeyCode::Char('x'), KeyModifiers::CONTROL, None));
        assert!(!input.handle_key_with_action(KeyCode::Char('z'), KeyModifiers::ALT, None));
        assert_eq!(input.text(), "ab");

        // Chords mapped to editing actions still edit
        assert!(input.handle_key_with_action(
            KeyCode::Char('h'),
            KeyModifiers::CONTROL,
            Some(Action::Backspace)
        ));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hello");
        input.move_left();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text(), "helxlo");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "Привет".chars() {
            input.insert_char(c);
        }
        input.backspace();
        assert_eq!(input.text(), "Приве");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "риве");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_cursor_clamps() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\n');
        assert!(input.text().is_empty());
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        assert!(TextInput::with_text("   ").is_empty());
        assert!(!TextInput::with_text(" a ").is_empty());
    }

    #[test]
    fn test_plain_char_types_even_when_bound() {
        let mut input = TextInput::new();
        let handled =
            input.handle_key_with_action(KeyCode::Char('t'), KeyModifiers::NONE, Some(Action::ToggleTheme));
        assert!(handled);
        assert_eq!(input.text(), "t");
    }

    #[test]
    fn test_focus_filter() {
        assert!(!TextInput::is_action_allowed_when_focused(
            &Action::Quit,
            KeyCode::Char('q'),
            KeyModifiers::NONE
        ));
        assert!(TextInput::is_action_allowed_when_focused(
            &Action::Quit,
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        ));
        assert!(TextInput::is_action_allowed_when_focused(
            &Action::ToggleLocale,
            KeyCode::F(2),
            KeyModifiers::NONE
        ));
    }
}
