// Reusable UI widgets

pub mod dialog;
pub mod logo;
pub mod text_input;
pub mod toast;

pub use dialog::Dialog;
pub use logo::HomebaseLogo;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
