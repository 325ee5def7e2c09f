//! Standalone demo: a page with two color entries and an inline mixer.
//!
//! Run with `RUST_LOG=debug` to follow the dialog lifecycle.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_argb::{
    Argb, ColorDialogSettings, ColorPickerEntry, ColorPickerMixer, DialogLayer, dialog_host,
};

fn main() {
    env_logger::init();

    let edited = RwSignal::new(Argb::from_rgb(0x3B, 0x82, 0xF6));
    let background = RwSignal::new(Argb::WHITE);

    floem::Application::new()
        .window(
            move |_| {
                let layer = DialogLayer::new();
                layer.provide();

                let mut settings = ColorDialogSettings::default();
                settings.dialog.ok_button_text = "Apply".to_string();

                let page = v_stack((
                    label(move || format!("Edited color: {}", edited.get())),
                    ColorPickerEntry::new(edited)
                        .dialog_title("Edited color")
                        .dialog_settings(settings)
                        .build(),
                    // RGB only; a click on the preview resets to white instead of
                    // opening the dialog.
                    ColorPickerEntry::new(background)
                        .edit_alpha(false)
                        .on_preview_clicked(|e| {
                            e.color = Argb::WHITE;
                            e.handled = true;
                        })
                        .build(),
                    ColorPickerMixer::new(edited).build(),
                ))
                .style(move |s| {
                    s.size_full()
                        .padding(16.0)
                        .gap(12.0)
                        .background(Color::from(background.get()))
                });

                dialog_host(layer, page).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 420.0))
                    .title("floem-argb"),
            ),
        )
        .run();
}
