pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod style;
pub mod text_input;

pub use layout::{center_popup, create_split_layout, create_standard_layout};
pub use list_navigation::ListStateExt;
pub use path::{expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use style::{
    focused_border_style, input_placeholder_style, input_text_style, pane_border_style,
    unfocused_border_style,
};
pub use text_input::TextInput;
