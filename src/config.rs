use crate::i18n::Locale;
use crate::icons::IconSet;
use crate::keymap::Keymap;
use crate::state::{Preferences, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Startup settings read from `config.toml`.
///
/// Only seeds the initial view. Toggling theme or language at runtime never
/// writes back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial theme ("light" or "dark")
    #[serde(default)]
    pub theme: Theme,
    /// Initial language ("ru" or "en")
    #[serde(default)]
    pub locale: Locale,
    /// Icon set override ("nerd", "unicode", "ascii"). Auto-detected when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_set: Option<String>,
    /// How long toasts stay on screen
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_toast_seconds() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            locale: Locale::default(),
            icon_set: None,
            toast_seconds: default_toast_seconds(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or write the defaults if it doesn't exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Starting theme and language
    pub fn preferences(&self) -> Preferences {
        Preferences::new(self.theme, self.locale)
    }

    /// Configured icon set, if set and valid
    pub fn get_icon_set(&self) -> Option<IconSet> {
        let name = self.icon_set.as_deref()?;
        match name.parse() {
            Ok(icon_set) => Some(icon_set),
            Err(e) => {
                warn!("Ignoring icon_set in config: {}", e);
                None
            }
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}
