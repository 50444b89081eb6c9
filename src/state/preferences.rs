//! Presentation preferences: theme and locale.

use crate::i18n::Locale;
use crate::styles::ThemeType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl From<Theme> for ThemeType {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeType::Light,
            Theme::Dark => ThemeType::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {} (expected 'light' or 'dark')", other)),
        }
    }
}

/// User-togglable presentation settings. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub locale: Locale,
}

impl Preferences {
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self { theme, locale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_maps_to_theme_type() {
        assert_eq!(ThemeType::from(Theme::Dark), ThemeType::Dark);
        assert_eq!(ThemeType::from(Theme::Light), ThemeType::Light);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
