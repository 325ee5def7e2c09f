//! Modal dialogs placed into a page-wide overlay.

mod animation;
mod color_dialog;
#[allow(clippy::module_inception)]
mod dialog;
mod gate;
mod layer;

pub use animation::{Easing, Tween};
pub use color_dialog::ColorPickerDialog;
pub use dialog::{Dialog, DialogHandle, DialogResult};
pub use gate::CompletionGate;
pub use layer::{DialogLayer, dialog_host};
