//! KeyBinding struct for mapping keys to actions
//!
//! Parses key strings like "ctrl+q", "shift+tab", "f2" or "j".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+q", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Uppercase characters arrive from crossterm with SHIFT set, so SHIFT is
    /// ignored when comparing plain characters.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        if matches!(code, KeyCode::Char(_)) {
            parsed.modifiers - KeyModifiers::SHIFT == modifiers - KeyModifiers::SHIFT
        } else {
            parsed.modifiers == modifiers
        }
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Display string for this binding (e.g., "Ctrl+Q")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim();
    // A literal "+" key would otherwise split into two empty parts
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let parts: Vec<&str> = key.split('+').map(str::trim).collect();
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        return Err("Empty key".to_string());
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    // crossterm reports Shift+Tab as BackTab
    let mut code = parse_key_code(key_part)?;
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }

    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    // Single characters keep their case ("?" or "G")
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.clone().next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = key.to_lowercase();
    let code = match lower.as_str() {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("Unknown key: {}", key)),
        },
        _ => return Err(format!("Unknown key: {}", key)),
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+q" -> "Ctrl+Q")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let lower = part.trim().to_lowercase();
            match lower.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if lower.chars().count() == 1 => part.trim().to_uppercase(),
                _ if lower.starts_with('f') && lower.len() <= 3 => lower.to_uppercase(),
                _ => part.trim().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
