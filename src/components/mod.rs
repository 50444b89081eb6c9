// Building blocks shared by the screens

pub mod add_dialog;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod panels;
pub mod sidebar;

pub use add_dialog::AddItemDialog;
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use sidebar::Sidebar;
