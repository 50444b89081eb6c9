//! "Add item" modal coordination.

use crate::i18n::Strings;

/// What the add dialog pretends to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Platform,
    Game,
    File,
}

impl ItemKind {
    /// Localized dialog title
    pub fn title(self, t: &Strings) -> &'static str {
        match self {
            ItemKind::Platform => t.add_platform,
            ItemKind::Game => t.add_game,
            ItemKind::File => t.upload_file,
        }
    }
}

/// Open flag plus the kind the dialog was opened for.
///
/// `kind` is always a valid value, so an open dialog can never lack one. It
/// keeps the last kind after closing, which is harmless because it is only
/// read while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    open: bool,
    kind: ItemKind,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Kind of the currently open dialog
    pub fn open_kind(&self) -> Option<ItemKind> {
        self.open.then_some(self.kind)
    }

    pub(crate) fn open(&mut self, kind: ItemKind) {
        self.kind = kind;
        self.open = true;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }
}
