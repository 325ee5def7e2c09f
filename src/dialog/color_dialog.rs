use floem::prelude::*;
use floem::reactive::{RwSignal, Scope, SignalGet};

use super::dialog::{Dialog, DialogHandle};
use super::layer::DialogLayer;
use crate::color::Argb;
use crate::mixer::ColorPickerMixer;
use crate::settings::ColorDialogSettings;

/// Dialog hosting a [`ColorPickerMixer`].
pub struct ColorPickerDialog;

impl ColorPickerDialog {
    /// Show the color dialog in `layer`.
    ///
    /// `on_picked` receives the mixed color when OK is clicked and
    /// `default_color` otherwise.
    pub fn show(
        layer: &DialogLayer,
        title: impl Into<String>,
        default_color: Argb,
        settings: Option<ColorDialogSettings>,
        on_picked: impl FnOnce(Argb) + 'static,
    ) -> DialogHandle {
        let cx = Scope::current().create_child();
        let picked = cx.create_rw_signal(default_color);
        Self::present(layer, title, picked, default_color, settings, move |color| {
            on_picked(color);
            cx.dispose();
        })
    }

    /// Show the dialog with the mixer bound to `picked`.
    fn present(
        layer: &DialogLayer,
        title: impl Into<String>,
        picked: RwSignal<Argb>,
        default_color: Argb,
        settings: Option<ColorDialogSettings>,
        on_picked: impl FnOnce(Argb) + 'static,
    ) -> DialogHandle {
        crate::load_icon_font();
        let settings = settings.unwrap_or_default();
        let appearance = settings.mixer_appearance();
        let edit_alpha = settings.edit_alpha;

        Dialog::new(title).settings(settings.dialog).show(
            layer,
            move || {
                ColorPickerMixer::new(picked)
                    .appearance(appearance.clone())
                    .edit_alpha(edit_alpha)
                    .build()
                    .into_any()
            },
            move |result| {
                let color = if result.is_confirmed() {
                    picked.get_untracked()
                } else {
                    default_color
                };
                log::debug!("color dialog closed with {result:?}, color {color}");
                on_picked(color);
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use floem::reactive::SignalUpdate;

    use super::*;
    use crate::dialog::DialogResult;

    fn instant() -> ColorDialogSettings {
        let mut settings = ColorDialogSettings::default();
        settings.dialog.dialog_animation = false;
        settings
    }

    fn open(
        layer: &DialogLayer,
        picked: RwSignal<Argb>,
        default_color: Argb,
    ) -> (DialogHandle, Rc<Cell<Option<Argb>>>) {
        let slot = Rc::new(Cell::new(None));
        let sink = slot.clone();
        let handle = ColorPickerDialog::present(
            layer,
            "Color",
            picked,
            default_color,
            Some(instant()),
            move |color| sink.set(Some(color)),
        );
        (handle, slot)
    }

    #[test]
    fn ok_reports_the_mixed_color() {
        let layer = DialogLayer::new();
        let picked = RwSignal::new(Argb::BLACK);
        let (handle, reported) = open(&layer, picked, Argb::BLACK);
        picked.set(Argb::new(0x80, 1, 2, 3));
        assert!(handle.resolve(DialogResult::Ok));
        assert_eq!(reported.get(), Some(Argb::new(0x80, 1, 2, 3)));
        assert!(!layer.is_open());
    }

    #[test]
    fn cancel_and_close_report_the_default() {
        for result in [DialogResult::Cancel, DialogResult::Closed] {
            let layer = DialogLayer::new();
            let picked = RwSignal::new(Argb::BLACK);
            let (handle, reported) = open(&layer, picked, Argb::BLACK);
            picked.set(Argb::WHITE);
            assert!(handle.resolve(result));
            assert_eq!(reported.get(), Some(Argb::BLACK));
        }
    }

    #[test]
    fn show_reports_default_when_closed() {
        let layer = DialogLayer::new();
        let reported = Rc::new(Cell::new(None));
        let sink = reported.clone();
        let handle = ColorPickerDialog::show(
            &layer,
            "Color",
            Argb::from_rgb(9, 8, 7),
            Some(instant()),
            move |color| sink.set(Some(color)),
        );
        assert!(handle.close());
        assert_eq!(reported.get(), Some(Argb::from_rgb(9, 8, 7)));
    }
}
