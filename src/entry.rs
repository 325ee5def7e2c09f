//! Color entry: hex editor plus a preview button that opens the color dialog.

use std::rc::Rc;

use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::binding::ColorBinding;
use crate::color::Argb;
use crate::constants;
use crate::dialog::{ColorPickerDialog, DialogHandle, DialogLayer};
use crate::inputs::{EditorLook, hex_input};
use crate::settings::ColorDialogSettings;
use crate::swatch::signal_swatch;

/// Passed to the preview button handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewButtonClicked {
    /// Current color; the entry adopts whatever the handler leaves here.
    pub color: Argb,
    /// Set to skip the color dialog.
    pub handled: bool,
}

type PreviewHandler = Rc<dyn Fn(&mut PreviewButtonClicked)>;

/// Builder for the entry view.
///
/// ```rust,no_run
/// use floem::prelude::*;
/// use floem_argb::{Argb, ColorPickerEntry, DialogLayer, dialog_host};
///
/// let color = RwSignal::new(Argb::from_rgb(0x3B, 0x82, 0xF6));
/// let layer = DialogLayer::new();
/// let page = ColorPickerEntry::new(color)
///     .dialog_title("Accent")
///     .root_container(layer.clone())
///     .build();
/// let _root = dialog_host(layer, page);
/// ```
pub struct ColorPickerEntry {
    color: RwSignal<Argb>,
    edit_alpha: RwSignal<bool>,
    dialog_title: String,
    root_container: Option<DialogLayer>,
    show_color_preview: RwSignal<bool>,
    color_preview_button_width: f64,
    allow_picker_dialog: bool,
    dialog_settings: Option<ColorDialogSettings>,
    on_preview_clicked: Option<PreviewHandler>,
    editor: EditorLook,
}

impl ColorPickerEntry {
    pub fn new(color: RwSignal<Argb>) -> Self {
        Self {
            color,
            edit_alpha: RwSignal::new(true),
            dialog_title: String::new(),
            root_container: None,
            show_color_preview: RwSignal::new(true),
            color_preview_button_width: constants::PREVIEW_BUTTON_WIDTH,
            allow_picker_dialog: true,
            dialog_settings: None,
            on_preview_clicked: None,
            editor: EditorLook {
                width: constants::ENTRY_EDITOR_WIDTH as f64,
                background: Argb::WHITE,
                text: Argb::BLACK,
            },
        }
    }

    /// Caption in the header of the dialog.
    pub fn dialog_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = title.into();
        self
    }

    /// Layer the dialog is placed into. Defaults to the layer found in
    /// context when the entry is built.
    pub fn root_container(mut self, layer: DialogLayer) -> Self {
        self.root_container = Some(layer);
        self
    }

    pub fn show_color_preview(self, show: bool) -> Self {
        self.show_color_preview.set(show);
        self
    }

    /// Drive preview button visibility from a signal.
    pub fn show_color_preview_signal(mut self, show: RwSignal<bool>) -> Self {
        self.show_color_preview = show;
        self
    }

    pub fn color_preview_button_width(mut self, width: f64) -> Self {
        self.color_preview_button_width = width;
        self
    }

    /// Open the color dialog when the preview button is clicked.
    pub fn allow_picker_dialog(mut self, allow: bool) -> Self {
        self.allow_picker_dialog = allow;
        self
    }

    /// Edit ARGB when true, RGB only when false.
    pub fn edit_alpha(self, edit_alpha: bool) -> Self {
        self.edit_alpha.set(edit_alpha);
        self
    }

    pub fn edit_alpha_signal(mut self, edit_alpha: RwSignal<bool>) -> Self {
        self.edit_alpha = edit_alpha;
        self
    }

    pub fn dialog_settings(mut self, settings: ColorDialogSettings) -> Self {
        self.dialog_settings = Some(settings);
        self
    }

    /// Runs before the dialog opens; may change the color or mark the click
    /// handled.
    pub fn on_preview_clicked(mut self, handler: impl Fn(&mut PreviewButtonClicked) + 'static) -> Self {
        self.on_preview_clicked = Some(Rc::new(handler));
        self
    }

    pub fn editor_width(mut self, width: f64) -> Self {
        self.editor.width = width;
        self
    }

    pub fn editor_colors(mut self, background: Argb, text: Argb) -> Self {
        self.editor.background = background;
        self.editor.text = text;
        self
    }

    pub fn build(self) -> impl IntoView {
        let layer = self.root_container.or_else(DialogLayer::from_context);
        let binding = ColorBinding::new(self.color, self.edit_alpha);
        let click = PreviewClick {
            binding: binding.clone(),
            handler: self.on_preview_clicked,
            allow_picker_dialog: self.allow_picker_dialog,
            layer,
            title: self.dialog_title,
            settings: self.dialog_settings,
        };
        let show_preview = self.show_color_preview;
        let button_width = self.color_preview_button_width;

        h_stack((
            hex_input(binding.hex(), self.editor, binding.hex_editor()),
            signal_swatch(binding.color(), Argb::from_rgb(160, 160, 160))
                .style(move |s| {
                    s.width(button_width)
                        .height(26.0)
                        .cursor(floem::style::CursorStyle::Pointer)
                        .apply_if(!show_preview.get(), |s| s.hide())
                })
                .on_event_stop(EventListener::PointerUp, move |_| {
                    click.run();
                }),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0))
    }
}

/// Apply the preview handler. Returns the color to adopt and whether the click
/// was handled.
fn run_preview_handler(
    handler: Option<&PreviewHandler>,
    color: Argb,
) -> PreviewButtonClicked {
    let mut args = PreviewButtonClicked {
        color,
        handled: false,
    };
    if let Some(handler) = handler {
        handler(&mut args);
    }
    args
}

struct PreviewClick {
    binding: ColorBinding,
    handler: Option<PreviewHandler>,
    allow_picker_dialog: bool,
    layer: Option<DialogLayer>,
    title: String,
    settings: Option<ColorDialogSettings>,
}

impl PreviewClick {
    /// Returns the color dialog if one was opened.
    fn run(&self) -> Option<DialogHandle> {
        let color = self.binding.color();
        if let Some(handler) = &self.handler {
            let args = run_preview_handler(Some(handler), color.get_untracked());
            if args.color != color.get_untracked() {
                color.set(args.color);
            }
            if args.handled {
                return None;
            }
        }
        if !self.allow_picker_dialog {
            return None;
        }
        let Some(layer) = &self.layer else {
            log::warn!("color entry has no dialog layer; wrap the page with dialog_host");
            return None;
        };
        Some(ColorPickerDialog::show(
            layer,
            self.title.clone(),
            self.binding.value(),
            Some(self.dialog_settings()),
            move |picked| color.set(picked),
        ))
    }

    /// The configured dialog settings with the entry's alpha mode applied.
    fn dialog_settings(&self) -> ColorDialogSettings {
        let mut settings = self.settings.clone().unwrap_or_default();
        settings.edit_alpha = self.binding.edit_alpha().get_untracked();
        settings
    }
}
