//! Dashboard sections.

use crate::i18n::Strings;

/// One of the six fixed dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Profile,
    Streaming,
    Games,
    Files,
    Settings,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Profile,
        Section::Streaming,
        Section::Games,
        Section::Files,
        Section::Settings,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Dashboard => 0,
            Section::Profile => 1,
            Section::Streaming => 2,
            Section::Games => 3,
            Section::Files => 4,
            Section::Settings => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Next section in sidebar order, wrapping around
    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in sidebar order, wrapping around
    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Localized sidebar label
    pub fn label(self, t: &Strings) -> &'static str {
        match self {
            Section::Dashboard => t.dashboard,
            Section::Profile => t.profile,
            Section::Streaming => t.streaming,
            Section::Games => t.games,
            Section::Files => t.files,
            Section::Settings => t.settings,
        }
    }

    /// Item kind that the section's "add" button creates, if it has one
    pub fn add_kind(self) -> Option<super::ItemKind> {
        match self {
            Section::Streaming => Some(super::ItemKind::Platform),
            Section::Games => Some(super::ItemKind::Game),
            Section::Files => Some(super::ItemKind::File),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_index(6), None);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Section::Settings.next(), Section::Dashboard);
        assert_eq!(Section::Dashboard.prev(), Section::Settings);
        assert_eq!(Section::Games.next().prev(), Section::Games);
    }

    #[test]
    fn test_only_catalog_sections_have_add_kind() {
        let with_kind: Vec<_> = Section::ALL
            .iter()
            .filter(|s| s.add_kind().is_some())
            .collect();
        assert_eq!(with_kind.len(), 3);
    }
}
