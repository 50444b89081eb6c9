//! Fixed catalog shown on the dashboard.
//!
//! Platforms, games and files are hardcoded constants. "Add" actions never
//! append to these lists; they only produce a confirmation notice.

use crate::i18n::Strings;
use serde::Serialize;

/// Glyph family used for a streaming platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformIcon {
    Tv,
    Play,
    Radio,
    Music,
}

/// Brand colour of a platform tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandColor {
    Red,
    Purple,
    Green,
}

#[derive(Debug, Clone, Serialize)]
pub struct Platform {
    pub name: &'static str,
    pub icon: PlatformIcon,
    pub color: BrandColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Completed,
}

impl GameStatus {
    /// Localized badge text
    pub fn label(self, t: &Strings) -> &'static str {
        match self {
            GameStatus::Playing => t.playing,
            GameStatus::Completed => t.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub name: &'static str,
    pub hours: u32,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Document,
    Archive,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: &'static str,
    pub size: &'static str,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

pub static PLATFORMS: [Platform; 4] = [
    Platform {
        name: "Netflix",
        icon: PlatformIcon::Tv,
        color: BrandColor::Red,
    },
    Platform {
        name: "YouTube",
        icon: PlatformIcon::Play,
        color: BrandColor::Red,
    },
    Platform {
        name: "Twitch",
        icon: PlatformIcon::Radio,
        color: BrandColor::Purple,
    },
    Platform {
        name: "Spotify",
        icon: PlatformIcon::Music,
        color: BrandColor::Green,
    },
];

pub static GAMES: [Game; 4] = [
    Game {
        name: "Cyberpunk 2077",
        hours: 45,
        status: GameStatus::Playing,
    },
    Game {
        name: "The Witcher 3",
        hours: 120,
        status: GameStatus::Completed,
    },
    Game {
        name: "Red Dead Redemption 2",
        hours: 32,
        status: GameStatus::Playing,
    },
    Game {
        name: "Baldur's Gate 3",
        hours: 78,
        status: GameStatus::Playing,
    },
];

pub static FILES: [FileEntry; 3] = [
    FileEntry {
        name: "Project_Docs.pdf",
        size: "2.3 MB",
        kind: FileKind::Document,
    },
    FileEntry {
        name: "Vacation_Photos.zip",
        size: "145 MB",
        kind: FileKind::Archive,
    },
    FileEntry {
        name: "Presentation.pptx",
        size: "5.7 MB",
        kind: FileKind::Document,
    },
];

/// Account shown on the dashboard and profile panels
pub const DEMO_EMAIL: &str = "user@example.com";

pub fn platforms() -> &'static [Platform] {
    &PLATFORMS
}

pub fn games() -> &'static [Game] {
    &GAMES
}

pub fn files() -> &'static [FileEntry] {
    &FILES
}

/// Whole catalog as one serializable snapshot (used by `homebase catalog --json`)
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    pub platforms: &'static [Platform],
    pub games: &'static [Game],
    pub files: &'static [FileEntry],
}

pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        platforms: platforms(),
        games: games(),
        files: files(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(platforms().len(), 4);
        assert_eq!(games().len(), 4);
        assert_eq!(files().len(), 3);
    }

    #[test]
    fn test_game_status_split() {
        let playing = games()
            .iter()
            .filter(|g| g.status == GameStatus::Playing)
            .count();
        let completed = games()
            .iter()
            .filter(|g| g.status == GameStatus::Completed)
            .count();
        assert_eq!(playing, 3);
        assert_eq!(completed, 1);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["platforms"][0]["name"], "Netflix");
        assert_eq!(json["games"][1]["status"], "completed");
        assert_eq!(json["files"][1]["type"], "archive");
    }
}
