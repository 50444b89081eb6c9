use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/homebase, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("homebase")
}

/// Get the config file path (always ~/.config/homebase/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the rolling log file.
///
/// Uses the platform cache dir (e.g. ~/.cache/homebase on Linux), falling back
/// to the config dir when the platform has none.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("homebase"))
        .unwrap_or_else(get_config_dir)
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/homebase/config.toml"));
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("~"), get_home_dir());
        assert_eq!(expand_path("~/x.toml"), get_home_dir().join("x.toml"));
        assert_eq!(expand_path("/etc/x.toml"), PathBuf::from("/etc/x.toml"));
        assert_eq!(expand_path("rel.toml"), PathBuf::from("rel.toml"));
    }
}
