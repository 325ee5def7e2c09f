//! # floem-argb
//!
//! ARGB color editing widgets for [Floem](https://github.com/lapce/floem).
//!
//! - [`ColorPickerEntry`]: a hex editor with a preview button that opens the
//!   color dialog.
//! - [`ColorPickerMixer`]: sliders and numeric editors for each channel.
//! - [`ColorPickerDialog`]: the mixer in a modal dialog with OK and Cancel.
//! - [`ColorValue`]: the view model keeping channels, packed color and hex
//!   text consistent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_argb::{Argb, ColorPickerEntry, DialogLayer, dialog_host};
//!
//! let color = RwSignal::new(Argb::from_hex("#FF3B82F6").unwrap());
//! let layer = DialogLayer::new();
//! layer.provide();
//! // The entry finds the layer through context.
//! let page = ColorPickerEntry::new(color).dialog_title("Accent").build();
//! let _root = dialog_host(layer, page);
//! ```

mod binding;
mod channel_slider;
mod color;
mod constants;
mod convert;
mod dialog;
mod entry;
mod error;
mod inputs;
mod mixer;
mod settings;
mod swatch;
mod value;

pub use color::Argb;
pub use convert::ByteText;
pub use dialog::{
    ColorPickerDialog, CompletionGate, Dialog, DialogHandle, DialogLayer, DialogResult, Easing,
    Tween, dialog_host,
};
pub use entry::{ColorPickerEntry, PreviewButtonClicked};
pub use error::HexParseError;
pub use mixer::{ColorPickerMixer, color_picker_mixer};
pub use settings::{ColorDialogSettings, DialogSettings, MixerAppearance};
pub use value::{Changes, Channel, ColorProperty, ColorValue};

use std::sync::Once;

use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Registers the icon font used by the copy and close buttons.
pub(crate) fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        log::debug!("loading lucide icon font");
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
